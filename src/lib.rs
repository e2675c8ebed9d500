//! Profile directory: fetch a list of profiles, filter it, score it and
//! render it as text.

pub mod config;
pub mod contact;
mod errors;
pub mod export;
pub mod filter;
pub mod profile;
pub mod render;
pub mod score;
pub mod source;
pub mod store;

pub use config::Config;
pub use errors::{DirectoryError, Result};
pub use filter::{filter, FilterCriteria};
pub use profile::{Profile, ProfileId};
pub use render::{Presenter, TextPresenter};
pub use score::score;
pub use source::Source;
pub use store::{DirectoryStore, DisplayState, Message, ViewMode};
