use bloom_gateway::export::export_profile;
use bloom_gateway::{Config, DirectoryStore};
use std::path::PathBuf;

use crate::{provide_store, select_profile, AppError};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "export", about = "Save one profile as a JSON file")]
pub struct Export {
    #[clap(help = "ID of the profile")]
    id: String,
    #[clap(long, short, value_parser, help = "Directory to write the file to")]
    out: Option<PathBuf>,
}

impl Export {
    pub async fn run(&self, config: &Config) -> Result<(), AppError> {
        let mut store = provide_store(config).await;
        let path = self.save(&mut store, config)?;
        println!("Profile saved to {}", path.display());
        Ok(())
    }

    fn save(
        &self,
        store: &mut DirectoryStore,
        config: &Config,
    ) -> Result<PathBuf, AppError> {
        let profile = select_profile(store, &self.id)?;
        let dir = self.out.as_ref().unwrap_or(&config.export_dir);

        export_profile(profile, dir)
            .map_err(|e| AppError::ExportError(e.to_string()))
    }
}
