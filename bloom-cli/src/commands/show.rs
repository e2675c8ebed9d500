use bloom_gateway::{Config, Presenter, TextPresenter};

use crate::{provide_store, select_profile, AppError};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "show", about = "Show every detail of one profile")]
pub struct Show {
    #[clap(help = "ID of the profile")]
    id: String,
}

impl Show {
    pub async fn run(&self, config: &Config) -> Result<(), AppError> {
        let mut store = provide_store(config).await;
        let profile = select_profile(&mut store, &self.id)?;

        let mut presenter = TextPresenter::new(std::io::stdout().lock());
        presenter.present_detail(profile)?;

        println!();
        println!("Send mail:   bloom-cli contact {}", self.id);
        println!("Export data: bloom-cli export {}", self.id);
        Ok(())
    }
}
