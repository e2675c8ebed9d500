use bloom_gateway::contact::mailto;
use bloom_gateway::{Config, DirectoryStore};

use crate::{provide_store, select_profile, AppError};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "contact", about = "Print a mailto link for one profile")]
pub struct Contact {
    #[clap(help = "ID of the profile")]
    id: String,
}

impl Contact {
    pub async fn run(&self, config: &Config) -> Result<(), AppError> {
        let mut store = provide_store(config).await;
        println!("{}", self.link(&mut store)?);
        Ok(())
    }

    fn link(&self, store: &mut DirectoryStore) -> Result<String, AppError> {
        let profile = select_profile(store, &self.id)?;
        Ok(mailto(profile)?.to_string())
    }
}
