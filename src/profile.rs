use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::{DirectoryError, Result};

/// Values of `type` which select the student subtitle.
pub const STUDENT_TYPES: [&str; 2] = ["student", "学生"];

/// Identifier of a profile as it appears in the data source,
/// either a JSON string or a JSON integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileId {
    Number(i64),
    Text(String),
}

impl ProfileId {
    /// Compare with an identifier typed by a user, where the
    /// distinction between `7` and `"7"` is lost.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ProfileId::Number(n) => raw.trim().parse::<i64>() == Ok(*n),
            ProfileId::Text(s) => s == raw,
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileId::Number(n) => write!(f, "{}", n),
            ProfileId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for ProfileId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) => ProfileId::Number(n),
            Err(_) => ProfileId::Text(s.to_owned()),
        })
    }
}

/// Social platforms rendered on cards and in the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnsPlatform {
    Instagram,
    TikTok,
    Twitter,
}

impl SnsPlatform {
    pub const ALL: [SnsPlatform; 3] =
        [SnsPlatform::Instagram, SnsPlatform::TikTok, SnsPlatform::Twitter];

    pub fn key(&self) -> &'static str {
        match self {
            SnsPlatform::Instagram => "instagram",
            SnsPlatform::TikTok => "tiktok",
            SnsPlatform::Twitter => "twitter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SnsPlatform::Instagram => "Instagram",
            SnsPlatform::TikTok => "TikTok",
            SnsPlatform::Twitter => "X",
        }
    }
}

/// Social links of a profile.
///
/// Only entries holding a non-empty string are kept. Null, empty and
/// non-string values are treated as absent, so every stored entry is
/// "present".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sns {
    links: Vec<(String, String)>,
}

impl Sns {
    pub fn from_value(value: &Value) -> Self {
        let links = match value {
            Value::Object(map) => map
                .iter()
                .filter_map(|(platform, url)| match url {
                    Value::String(url) if !url.is_empty() => {
                        Some((platform.clone(), url.clone()))
                    }
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        Self { links }
    }

    pub fn get(&self, platform: SnsPlatform) -> Option<&str> {
        self.links
            .iter()
            .find(|(key, _)| key == platform.key())
            .map(|(_, url)| url.as_str())
    }

    /// Number of present entries, on any platform
    pub fn count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Present links of the known platforms, in display order
    pub fn known(
        &self,
    ) -> impl Iterator<Item = (SnsPlatform, &str)> + '_ {
        SnsPlatform::ALL
            .into_iter()
            .filter_map(|platform| self.get(platform).map(|url| (platform, url)))
    }
}

/// One directory entry.
///
/// The typed fields are a read view decoded leniently from the record;
/// the record itself is retained untouched so that it can be written
/// back out exactly as it was received.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub kind: String,
    pub category: String,
    pub university: String,
    pub grade: String,
    pub company: String,
    pub experience: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub sns: Sns,
    raw: Map<String, Value>,
}

impl Profile {
    /// Decode a record. Only `id` is required; everything else falls
    /// back to empty.
    pub fn from_value(value: Value) -> Result<Self> {
        let raw = match value {
            Value::Object(map) => map,
            other => {
                return Err(DirectoryError::Parse(format!(
                    "profile record must be an object, got {}",
                    kind_of(&other)
                )))
            }
        };

        let id = match raw.get("id") {
            Some(id) => ProfileId::deserialize(id).map_err(|_| {
                DirectoryError::Parse(format!("invalid profile id {}", id))
            })?,
            None => {
                return Err(DirectoryError::Parse(
                    "profile record without id".to_owned(),
                ))
            }
        };

        let text = |key: &str| raw.get(key).map(scalar_text).unwrap_or_default();
        let list = |key: &str| raw.get(key).map(text_list).unwrap_or_default();

        Ok(Self {
            id,
            name: text("name"),
            kind: text("type"),
            category: text("category"),
            university: text("university"),
            grade: text("grade"),
            company: text("company"),
            experience: text("experience"),
            email: text("email"),
            phone: text("phone"),
            bio: text("bio"),
            interests: list("interests"),
            skills: list("skills"),
            sns: raw.get("sns").map(Sns::from_value).unwrap_or_default(),
            raw,
        })
    }

    pub fn is_student(&self) -> bool {
        STUDENT_TYPES.contains(&self.kind.as_str())
    }

    /// `university / grade` for students, `company / experience` for
    /// everyone else
    pub fn subtitle(&self) -> String {
        if self.is_student() {
            format!("{} / {}", self.university, self.grade)
        } else {
            format!("{} / {}", self.company, self.experience)
        }
    }

    /// The record exactly as received
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }
}

impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Profile::from_value(value).map_err(de::Error::custom)
    }
}

impl Serialize for Profile {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(scalar_text)
            .collect(),
        Value::String(s) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
