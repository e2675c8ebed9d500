//! Filtering of the profile list.
//!
//! A profile passes when it satisfies every active criterion. Unset
//! criteria always pass, so empty criteria keep the whole list.

use crate::profile::Profile;

/// Constraints selected by the user. Each field is either unset or
/// an exact value; the search query is stored lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub type_filter: Option<String>,
    pub category_filter: Option<String>,
    pub interest_filter: Option<String>,
    pub skill_filter: Option<String>,
    pub search_query: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type<S: Into<String>>(mut self, value: S) -> Self {
        self.type_filter = non_empty(value.into());
        self
    }

    pub fn with_category<S: Into<String>>(mut self, value: S) -> Self {
        self.category_filter = non_empty(value.into());
        self
    }

    pub fn with_interest<S: Into<String>>(mut self, value: S) -> Self {
        self.interest_filter = non_empty(value.into());
        self
    }

    pub fn with_skill<S: Into<String>>(mut self, value: S) -> Self {
        self.skill_filter = non_empty(value.into());
        self
    }

    pub fn with_search<S: AsRef<str>>(mut self, query: S) -> Self {
        self.search_query = query.as_ref().to_lowercase();
        self
    }

    /// Build criteria from raw inputs where empty strings mean "unset"
    pub fn from_inputs(
        type_filter: Option<String>,
        category_filter: Option<String>,
        interest_filter: Option<String>,
        skill_filter: Option<String>,
        search_query: Option<String>,
    ) -> Self {
        Self {
            type_filter: type_filter.and_then(non_empty),
            category_filter: category_filter.and_then(non_empty),
            interest_filter: interest_filter.and_then(non_empty),
            skill_filter: skill_filter.and_then(non_empty),
            search_query: search_query.unwrap_or_default().to_lowercase(),
        }
    }

    /// True when no criterion is active
    pub fn is_empty(&self) -> bool {
        self.type_filter.is_none()
            && self.category_filter.is_none()
            && self.interest_filter.is_none()
            && self.skill_filter.is_none()
            && self.search_query.is_empty()
    }
}

/// Lower-cased text matched by the free-text search
pub fn search_text(profile: &Profile) -> String {
    format!(
        "{} {} {} {} {}",
        profile.name,
        profile.kind,
        profile.category,
        profile.interests.join(" "),
        profile.skills.join(" ")
    )
    .to_lowercase()
}

pub fn matches(profile: &Profile, criteria: &FilterCriteria) -> bool {
    if let Some(kind) = &criteria.type_filter {
        if &profile.kind != kind {
            return false;
        }
    }

    if let Some(category) = &criteria.category_filter {
        if &profile.category != category {
            return false;
        }
    }

    if let Some(interest) = &criteria.interest_filter {
        if !profile.interests.contains(interest) {
            return false;
        }
    }

    if let Some(skill) = &criteria.skill_filter {
        if !profile.skills.contains(skill) {
            return false;
        }
    }

    if !criteria.search_query.is_empty()
        && !search_text(profile).contains(&criteria.search_query)
    {
        return false;
    }

    true
}

/// Profiles satisfying `criteria`, in input order
pub fn filter(profiles: &[Profile], criteria: &FilterCriteria) -> Vec<Profile> {
    profiles
        .iter()
        .filter(|profile| matches(profile, criteria))
        .cloned()
        .collect()
}

/// Choices offered for each exact-match filter, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub types: Vec<String>,
    pub categories: Vec<String>,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
}

pub fn distinct_values(profiles: &[Profile]) -> FilterOptions {
    let mut options = FilterOptions::default();
    for profile in profiles {
        push_distinct(&mut options.types, &profile.kind);
        push_distinct(&mut options.categories, &profile.category);
        for interest in &profile.interests {
            push_distinct(&mut options.interests, interest);
        }
        for skill in &profile.skills {
            push_distinct(&mut options.skills, skill);
        }
    }
    options
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !values.iter().any(|v| v == value) {
        values.push(value.to_owned());
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
