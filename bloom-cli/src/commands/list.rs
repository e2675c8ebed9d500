use bloom_gateway::{Config, Message, Presenter, TextPresenter, ViewMode};

use crate::commands::FilterArgs;
use crate::{provide_store, AppError};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "Show the profiles matching the filters")]
pub struct List {
    #[clap(flatten)]
    filters: FilterArgs,
    #[clap(long, help = "Layout of the list: grid or list")]
    view: Option<ViewMode>,
}

impl List {
    pub async fn run(&self, config: &Config) -> Result<(), AppError> {
        let mut store = provide_store(config).await;
        if let Some(view) = self.view {
            store.update(Message::ViewChanged(view));
        }
        store.update(Message::CriteriaChanged(self.filters.criteria()));

        let mut presenter = TextPresenter::new(std::io::stdout().lock());
        presenter.present(&store)?;
        Ok(())
    }
}
