use bloom_gateway::store::LoadState;
use bloom_gateway::{Config, DirectoryStore, Message, Profile};
use std::path::PathBuf;

use crate::AppError;

/// Configuration file values, with the command line source on top
pub fn provide_config(
    config: &Option<PathBuf>,
    source: &Option<String>,
) -> Result<Config, AppError> {
    let mut config = Config::load(config.as_deref())?;
    if let Some(source) = source {
        config.source = source.clone();
    }
    Ok(config)
}

/// Fetch the profiles once and hand them to a fresh store. A failed
/// fetch leaves the store in its error state.
pub async fn provide_store(config: &Config) -> DirectoryStore {
    let mut store = DirectoryStore::new().with_view(config.view);
    let source = config.source();
    let message = match source.fetch().await {
        Ok(profiles) => Message::Loaded(profiles),
        Err(e) => {
            log::error!("fetching from {} failed: {}", source, e);
            Message::LoadFailed(e.to_string())
        }
    };
    store.update(message);
    store
}

pub fn require_loaded(store: &DirectoryStore) -> Result<(), AppError> {
    match store.load_state() {
        LoadState::Failed(reason) => Err(AppError::LoadError(reason.clone())),
        LoadState::Loading => {
            Err(AppError::LoadError("profiles were never loaded".to_owned()))
        }
        LoadState::Ready => Ok(()),
    }
}

pub fn select_profile<'a>(
    store: &'a mut DirectoryStore,
    id: &str,
) -> Result<&'a Profile, AppError> {
    require_loaded(store)?;
    store
        .select(id)
        .ok_or_else(|| AppError::ProfileNotFound(id.to_owned()))
}
