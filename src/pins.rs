//! Persistent list of pinned files and directories.
//!
//! The pin file is a JSON array of strings, kept in insertion order.
//! Entries written by this crate are absolute paths; bare names from
//! older pin files are still accepted and resolve against the home
//! directory.

use crate::error::PinError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the pin file placed beside the executable.
pub const PIN_FILE_NAME: &str = "pin.json";

/// A single pinned item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinEntry(String);

impl PinEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Pin entry for a filesystem path, stored as given.
    pub fn from_path(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base name shown in the pin list.
    pub fn display_name(&self) -> &str {
        Path::new(&self.0)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.0)
    }

    /// Full path of the pinned item. Bare names are joined onto `home`.
    pub fn resolve(&self, home: &Path) -> PathBuf {
        let path = Path::new(&self.0);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            home.join(path)
        }
    }
}

/// Ordered, de-duplicated pin list bound to a file.
#[derive(Debug)]
pub struct PinStore {
    path: PathBuf,
    entries: Vec<PinEntry>,
}

impl PinStore {
    /// Loads the pin list from `path`.
    ///
    /// A missing or malformed file yields an empty list.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load(&path);
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[PinEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry resolves to `path`, so a legacy bare name and the
    /// absolute path of the same item count as one pin.
    pub fn contains(&self, path: &Path, home: &Path) -> bool {
        self.entries.iter().any(|e| e.resolve(home) == path)
    }

    /// Appends `entry` unless present, then persists.
    ///
    /// Returns `Ok(false)` when the entry was already pinned; nothing is
    /// written in that case.
    pub fn add(&mut self, entry: PinEntry) -> Result<bool, PinError> {
        if self.entries.contains(&entry) {
            return Ok(false);
        }
        tracing::debug!(pin = entry.as_str(), "pinning item");
        self.entries.push(entry);
        self.save()?;
        Ok(true)
    }

    /// Removes `name` if present, then persists.
    pub fn remove(&mut self, name: &str) -> Result<bool, PinError> {
        let Some(idx) = self.entries.iter().position(|e| e.as_str() == name) else {
            return Ok(false);
        };
        self.entries.remove(idx);
        tracing::debug!(pin = name, "unpinned item");
        self.save()?;
        Ok(true)
    }

    /// Writes the whole list, overwriting the file.
    pub fn save(&self) -> Result<(), PinError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| PinError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let json = serde_json::to_string(&self.entries)?;
        fs::write(&self.path, json).map_err(|source| PinError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

/// Reads a pin file, treating any failure as "no pins yet".
pub fn load(path: &Path) -> Vec<PinEntry> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "failed to read pin file");
            }
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<PinEntry>>(&contents) {
        Ok(raw) => {
            let mut entries: Vec<PinEntry> = Vec::with_capacity(raw.len());
            for entry in raw {
                if !entries.contains(&entry) {
                    entries.push(entry);
                }
            }
            entries
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "malformed pin file, starting empty");
            Vec::new()
        }
    }
}

/// Default pin file location: beside the running executable, falling
/// back to the platform data directory.
pub fn default_pin_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        return Some(dir.join(PIN_FILE_NAME));
    }
    directories::ProjectDirs::from("", "", "axiom")
        .map(|dirs| dirs.data_dir().join(PIN_FILE_NAME))
}
