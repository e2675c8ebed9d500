use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::profile::Profile;
use crate::Result;

pub const EXPORT_SUFFIX: &str = "_data.json";

/// Scratch file next to the destination, removed unless persisted
struct TmpFile {
    file: File,
    path: PathBuf,
}

impl TmpFile {
    fn create_in(dir: impl AsRef<Path>) -> Result<Self> {
        let filename: String = std::iter::repeat_with(fastrand::alphanumeric)
            .take(10)
            .collect();
        let path = dir.as_ref().join(format!(".{}.tmp", filename));
        let file = File::create(&path)?;
        Ok(Self { file, path })
    }

    fn persist(self, destination: &Path) -> Result<()> {
        self.file.sync_all()?;
        fs::rename(&self.path, destination)?;
        Ok(())
    }
}

impl Drop for TmpFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// `<name>_data.json`, with path separators in the name replaced
pub fn export_file_name(profile: &Profile) -> String {
    let name: String = profile
        .name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();
    format!("{}{}", name, EXPORT_SUFFIX)
}

/// The profile record as received, pretty-printed with two-space
/// indentation
pub fn to_pretty_json(profile: &Profile) -> Result<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}

/// Write the profile to `<dir>/<name>_data.json` and return the path
pub fn export_profile<P: AsRef<Path>>(
    profile: &Profile,
    dir: P,
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let destination = dir.join(export_file_name(profile));

    let data = to_pretty_json(profile)?;
    let tmp = TmpFile::create_in(dir)?;
    (&tmp.file).write_all(data.as_bytes())?;
    tmp.persist(&destination)?;

    log::info!(
        "profile {} exported to {}",
        profile.id,
        destination.display()
    );
    Ok(destination)
}
