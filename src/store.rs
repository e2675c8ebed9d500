use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::filter::{filter, FilterCriteria};
use crate::profile::Profile;
use crate::score::high_match_count;

const LOG_PREFIX: &str = "[directory-store]";

/// How the filtered list is laid out. Display only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(format!("View must be either 'grid' or 'list', got '{}'", s)),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Grid => f.write_str("grid"),
            ViewMode::List => f.write_str("list"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// What the presenter has to show for the current store state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Error(String),
    NoResults,
    Results,
}

/// Counters shown above the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub shown: usize,
    pub high_match: usize,
}

/// Input events funneled through [DirectoryStore::update]
#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Vec<Profile>),
    LoadFailed(String),
    CriteriaChanged(FilterCriteria),
    Reset,
    ViewChanged(ViewMode),
    Selected(String),
    Deselected,
}

/// Owner of the full profile list and the view derived from it.
///
/// The filtered list is always recomputed from the full list, so the
/// same criteria produce the same view no matter what came before.
#[derive(Debug)]
pub struct DirectoryStore {
    full: Arc<Vec<Profile>>,
    filtered: Arc<Vec<Profile>>,
    criteria: FilterCriteria,
    view: ViewMode,
    state: LoadState,
    selected: Option<usize>,
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryStore {
    pub fn new() -> Self {
        let full = Arc::new(Vec::new());
        Self {
            filtered: Arc::clone(&full),
            full,
            criteria: FilterCriteria::default(),
            view: ViewMode::default(),
            state: LoadState::Loading,
            selected: None,
        }
    }

    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }

    /// Replace the full list and show all of it
    pub fn load(&mut self, profiles: Vec<Profile>) {
        log::info!("{} {} profiles loaded", LOG_PREFIX, profiles.len());
        self.full = Arc::new(profiles);
        self.filtered = Arc::clone(&self.full);
        self.criteria = FilterCriteria::default();
        self.selected = None;
        self.state = LoadState::Ready;
    }

    /// Record that the data source could not be read
    pub fn fail<S: Into<String>>(&mut self, message: S) {
        let message = message.into();
        log::warn!("{} loading failed: {}", LOG_PREFIX, message);
        self.state = LoadState::Failed(message);
    }

    pub fn full(&self) -> &[Profile] {
        &self.full
    }

    pub fn current_filtered(&self) -> &[Profile] {
        &self.filtered
    }

    pub fn set_filtered(&mut self, profiles: Vec<Profile>) {
        self.filtered = Arc::new(profiles);
    }

    /// Shared handle to the filtered list. It is the same allocation as
    /// the full list whenever no criterion is active.
    pub fn filtered_handle(&self) -> Arc<Vec<Profile>> {
        Arc::clone(&self.filtered)
    }

    pub fn full_handle(&self) -> Arc<Vec<Profile>> {
        Arc::clone(&self.full)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn load_state(&self) -> &LoadState {
        &self.state
    }

    /// Recompute the filtered list for new criteria
    pub fn apply(&mut self, criteria: FilterCriteria) {
        if criteria.is_empty() {
            self.criteria = criteria;
            self.filtered = Arc::clone(&self.full);
        } else {
            let filtered = filter(&self.full, &criteria);
            self.criteria = criteria;
            self.set_filtered(filtered);
        }
        log::debug!(
            "{} {} of {} profiles match",
            LOG_PREFIX,
            self.filtered.len(),
            self.full.len()
        );
    }

    /// Clear every criterion
    pub fn reset(&mut self) {
        self.apply(FilterCriteria::default());
    }

    /// Select a profile of the full list by id. Unknown ids clear the
    /// selection.
    pub fn select(&mut self, id: &str) -> Option<&Profile> {
        self.selected = self.full.iter().position(|p| p.id.matches(id));
        if self.selected.is_none() {
            log::debug!("{} no profile with id {}", LOG_PREFIX, id);
        }
        self.selected()
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Profile> {
        self.selected.and_then(|index| self.full.get(index))
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total: self.full.len(),
            shown: self.filtered.len(),
            high_match: high_match_count(self.filtered.iter()),
        }
    }

    pub fn display_state(&self) -> DisplayState {
        match &self.state {
            LoadState::Loading => DisplayState::Loading,
            LoadState::Failed(message) => DisplayState::Error(message.clone()),
            LoadState::Ready if self.filtered.is_empty() => {
                DisplayState::NoResults
            }
            LoadState::Ready => DisplayState::Results,
        }
    }

    /// Apply one input event and report what should be displayed
    pub fn update(&mut self, message: Message) -> DisplayState {
        match message {
            Message::Loaded(profiles) => self.load(profiles),
            Message::LoadFailed(reason) => self.fail(reason),
            Message::CriteriaChanged(criteria) => self.apply(criteria),
            Message::Reset => self.reset(),
            Message::ViewChanged(view) => self.view = view,
            Message::Selected(id) => {
                self.select(&id);
            }
            Message::Deselected => self.deselect(),
        }
        self.display_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profiles() -> Vec<Profile> {
        vec![
            json!({
                "id": 1,
                "name": "Aoi",
                "type": "student",
                "category": "Tech",
                "interests": ["AI", "Design"],
                "skills": ["Python", "Figma", "Excel"],
                "sns": {"instagram": "x", "tiktok": "", "twitter": "y"}
            }),
            json!({
                "id": 2,
                "name": "Ren",
                "type": "professional",
                "category": "Sales",
                "interests": [],
                "skills": ["Excel"]
            }),
        ]
        .into_iter()
        .map(|value| Profile::from_value(value).unwrap())
        .collect()
    }

    fn loaded() -> DirectoryStore {
        let mut store = DirectoryStore::new();
        store.load(profiles());
        store
    }

    #[test]
    fn empty_before_load() {
        let store = DirectoryStore::new();

        assert!(store.full().is_empty());
        assert!(store.current_filtered().is_empty());
        assert_eq!(store.display_state(), DisplayState::Loading);
        assert_eq!(
            store.stats(),
            Stats {
                total: 0,
                shown: 0,
                high_match: 0
            }
        );
    }

    #[test]
    fn load_shows_everything() {
        let store = loaded();

        assert_eq!(store.full().len(), 2);
        assert!(Arc::ptr_eq(&store.full_handle(), &store.filtered_handle()));
        assert_eq!(store.display_state(), DisplayState::Results);
        assert_eq!(store.stats().high_match, 1);
    }

    #[test]
    fn reset_restores_full_list() {
        let mut store = loaded();

        store.apply(FilterCriteria::new().with_type("professional"));
        assert_eq!(store.current_filtered().len(), 1);
        assert!(!Arc::ptr_eq(&store.full_handle(), &store.filtered_handle()));

        store.update(Message::Reset);
        assert!(Arc::ptr_eq(&store.full_handle(), &store.filtered_handle()));
        assert!(store.criteria().is_empty());
    }

    #[test]
    fn no_results_is_distinct_state() {
        let mut store = loaded();

        let state = store.update(Message::CriteriaChanged(
            FilterCriteria::new().with_search("nobody"),
        ));

        assert!(store.current_filtered().is_empty());
        assert_eq!(state, DisplayState::NoResults);
        assert_eq!(store.stats().shown, 0);
        assert_eq!(store.stats().total, 2);
    }

    #[test]
    fn failed_load_keeps_lists_empty() {
        let mut store = DirectoryStore::new();

        let state = store.update(Message::LoadFailed("timeout".to_owned()));
        assert_eq!(state, DisplayState::Error("timeout".to_owned()));

        store.apply(FilterCriteria::new().with_type("student"));
        assert!(store.current_filtered().is_empty());
        assert_eq!(
            store.display_state(),
            DisplayState::Error("timeout".to_owned())
        );
    }

    #[test]
    fn filtering_always_starts_from_full_list() {
        let mut store = loaded();

        store.apply(FilterCriteria::new().with_type("professional"));
        store.apply(FilterCriteria::new().with_type("student"));

        let names: Vec<_> =
            store.current_filtered().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Aoi"]);
        assert_eq!(store.stats().high_match, 1);
    }

    #[test]
    fn selection_by_id() {
        let mut store = loaded();

        store.update(Message::Selected("2".to_owned()));
        assert_eq!(store.selected().map(|p| p.name.as_str()), Some("Ren"));

        assert!(store.select("99").is_none());
        assert!(store.selected().is_none());

        store.select("1");
        store.update(Message::Deselected);
        assert!(store.selected().is_none());
    }

    #[test]
    fn view_changes_leave_data_alone() {
        let mut store = loaded().with_view(ViewMode::List);
        assert_eq!(store.view(), ViewMode::List);

        let before = store.filtered_handle();
        store.update(Message::ViewChanged(ViewMode::Grid));

        assert_eq!(store.view(), ViewMode::Grid);
        assert!(Arc::ptr_eq(&before, &store.filtered_handle()));
        assert_eq!("LIST".parse::<ViewMode>(), Ok(ViewMode::List));
        assert!("table".parse::<ViewMode>().is_err());
    }

    #[test]
    fn set_filtered_replaces_view() {
        let mut store = loaded();
        let first = store.full()[..1].to_vec();

        store.set_filtered(first);
        assert_eq!(store.current_filtered().len(), 1);
        assert_eq!(store.full().len(), 2);
    }
}
