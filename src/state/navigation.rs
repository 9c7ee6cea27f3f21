// Navigation state - breadcrumb history and current root
use std::path::{Path, PathBuf};

pub struct NavigationState {
    history: Vec<PathBuf>,
}

/// One breadcrumb segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb<'a> {
    pub index: usize,
    pub label: String,
    pub path: &'a Path,
}

impl NavigationState {
    pub fn new(start_path: PathBuf) -> Self {
        Self {
            history: vec![start_path],
        }
    }

    pub fn current(&self) -> &Path {
        // history is never empty
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[PathBuf] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Pushes `path` as the new root if it is a directory.
    ///
    /// Relative paths are taken relative to the current root.
    pub fn navigate_into(&mut self, path: &Path) -> bool {
        let path = if path.is_relative() {
            self.current().join(path)
        } else {
            path.to_path_buf()
        };
        if !path.is_dir() {
            tracing::debug!(path = %path.display(), "ignoring navigation to non-directory");
            return false;
        }
        if path == self.current() {
            return true;
        }
        self.history.push(path);
        true
    }

    /// Truncates history so `index` is the last entry.
    pub fn navigate_to(&mut self, index: usize) -> Option<&Path> {
        if index >= self.history.len() {
            return None;
        }
        self.history.truncate(index + 1);
        Some(self.current())
    }

    pub fn go_back(&mut self) -> Option<&Path> {
        if self.history.len() < 2 {
            return None;
        }
        let index = self.history.len() - 2;
        self.navigate_to(index)
    }

    /// Drops every entry at or below `removed`. Returns whether history changed.
    ///
    /// When nothing survives, the trail restarts at the nearest existing
    /// ancestor of `removed`.
    pub fn forget(&mut self, removed: &Path) -> bool {
        if !self.history.iter().any(|p| p.starts_with(removed)) {
            return false;
        }
        let first = self.history[0].clone();
        self.history.retain(|p| !p.starts_with(removed));
        self.history.dedup();
        if self.history.is_empty() {
            let fallback = removed
                .ancestors()
                .skip(1)
                .find(|p| p.is_dir())
                .map(Path::to_path_buf)
                .unwrap_or(first);
            tracing::debug!(path = %fallback.display(), "history emptied, restarting");
            self.history.push(fallback);
        }
        true
    }

    pub fn breadcrumbs(&self) -> Vec<Crumb<'_>> {
        self.history
            .iter()
            .enumerate()
            .map(|(index, path)| Crumb {
                index,
                label: crumb_label(path),
                path,
            })
            .collect()
    }
}

fn crumb_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
