use reqwest::header::HeaderValue;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

use crate::profile::Profile;
use crate::{DirectoryError, Result};

const USER_AGENT: &str = concat!("bloom-gateway/", env!("CARGO_PKG_VERSION"));

/// Where the profile array is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(Url),
    File(PathBuf),
}

impl Source {
    /// Interpret a user supplied location. Anything that parses as an
    /// `http(s)` URL is remote, everything else is a local path.
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                Source::Remote(url)
            }
            _ => Source::File(PathBuf::from(location)),
        }
    }

    /// Read every profile. A single attempt, no retry.
    pub async fn fetch(&self) -> Result<Vec<Profile>> {
        match self {
            Source::Remote(url) => fetch_profiles(url.as_str()).await,
            Source::File(path) => read_profiles(path),
        }
    }

    /// Synchronized version of [Source::fetch]
    pub fn fetch_synced(&self) -> Result<Vec<Profile>> {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.fetch())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Download the profile array from `url`.
///
/// Network errors, non-success statuses and malformed bodies are all
/// reported as errors; nothing partial is returned.
pub async fn fetch_profiles<S>(url: S) -> Result<Vec<Profile>>
where
    S: Into<String>,
{
    let url = url.into();
    log::info!("fetching profiles from {}", url);

    let mut header = reqwest::header::HeaderMap::new();
    header.insert("User-Agent", HeaderValue::from_static(USER_AGENT));
    header.insert("Accept", HeaderValue::from_static("application/json"));
    let client = reqwest::Client::builder()
        .default_headers(header)
        .build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(DirectoryError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    let profiles = parse_profiles(&body)?;
    log::info!("{} profiles received", profiles.len());
    Ok(profiles)
}

/// Read the profile array from a local JSON file
pub fn read_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<Profile>> {
    log::info!("reading profiles from {}", path.as_ref().display());
    let bytes = std::fs::read(path.as_ref())?;
    parse_profiles(&bytes)
}

/// Decode a JSON array of profile records
pub fn parse_profiles(bytes: &[u8]) -> Result<Vec<Profile>> {
    let value: Value = serde_json::from_slice(bytes)?;
    let records = match value {
        Value::Array(records) => records,
        _ => {
            return Err(DirectoryError::Parse(
                "expected a JSON array of profiles".to_owned(),
            ))
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Profile::from_value(record).map_err(|e| {
                DirectoryError::Parse(format!("record {}: {}", index, e))
            })
        })
        .collect()
}
