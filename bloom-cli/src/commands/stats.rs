use bloom_gateway::filter::distinct_values;
use bloom_gateway::{Config, Message};

use crate::commands::FilterArgs;
use crate::{provide_store, require_loaded, AppError};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "stats", about = "Count profiles and list the filter choices")]
pub struct Stats {
    #[clap(flatten)]
    filters: FilterArgs,
    #[clap(long, short, action, help = "Also list the values each filter accepts")]
    options: bool,
}

impl Stats {
    pub async fn run(&self, config: &Config) -> Result<(), AppError> {
        let mut store = provide_store(config).await;
        require_loaded(&store)?;
        store.update(Message::CriteriaChanged(self.filters.criteria()));

        let stats = store.stats();
        println!("Total:   {}", stats.total);
        println!("Shown:   {}", stats.shown);
        println!("Matched: {}", stats.high_match);

        if self.options {
            let options = distinct_values(store.full());
            println!("Types:      {}", options.types.join(", "));
            println!("Categories: {}", options.categories.join(", "));
            println!("Interests:  {}", options.interests.join(", "));
            println!("Skills:     {}", options.skills.join(", "));
        }
        Ok(())
    }
}
