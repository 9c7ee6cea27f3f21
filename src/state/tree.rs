// Tree state - entries under the current root with lazily expanded folders
use crate::entry::FileEntry;
use crate::io::{list_directory, ListOptions};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

pub struct TreeState {
    pub root: PathBuf,
    pub roots: Vec<FileEntry>,
    pub children: HashMap<PathBuf, Vec<FileEntry>>,
    pub expanded: HashSet<PathBuf>,
    pub selected: Option<PathBuf>,
}

pub struct TreeRow<'a> {
    pub entry: &'a FileEntry,
    pub depth: usize,
    pub expanded: bool,
}

impl TreeState {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            roots: Vec::new(),
            children: HashMap::new(),
            expanded: HashSet::new(),
            selected: None,
        }
    }

    /// Re-roots the tree. Expansion and selection are kept only when the
    /// root is unchanged.
    pub fn set_root(&mut self, root: &Path, options: ListOptions) -> std::io::Result<()> {
        if self.root != root {
            self.root = root.to_path_buf();
            self.expanded.clear();
            self.selected = None;
        }
        self.refresh(options)
    }

    /// Re-reads the root and every expanded folder.
    pub fn refresh(&mut self, options: ListOptions) -> std::io::Result<()> {
        self.children.clear();
        let roots = match list_directory(&self.root, options) {
            Ok(entries) => entries,
            Err(e) => {
                self.roots.clear();
                self.expanded.clear();
                return Err(e);
            }
        };
        self.roots = roots;

        let mut expanded: Vec<PathBuf> = self.expanded.iter().cloned().collect();
        expanded.sort();
        for dir in expanded {
            match list_directory(&dir, options) {
                Ok(entries) => {
                    self.children.insert(dir, entries);
                }
                Err(_) => {
                    self.expanded.remove(&dir);
                }
            }
        }

        if self.selected.as_deref().is_some_and(|s| !s.exists()) {
            self.selected = None;
        }
        Ok(())
    }

    pub fn toggle(&mut self, dir: &Path, options: ListOptions) -> std::io::Result<()> {
        if self.expanded.remove(dir) {
            self.children.remove(dir);
            return Ok(());
        }
        let entries = list_directory(dir, options)?;
        self.children.insert(dir.to_path_buf(), entries);
        self.expanded.insert(dir.to_path_buf());
        Ok(())
    }

    pub fn select(&mut self, path: PathBuf) {
        self.selected = Some(path);
    }

    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    pub fn find(&self, path: &Path) -> Option<&FileEntry> {
        self.roots
            .iter()
            .chain(self.children.values().flatten())
            .find(|e| e.path == path)
    }

    /// Drops cached state for a removed path and everything under it.
    pub fn forget(&mut self, removed: &Path) {
        self.expanded.retain(|p| !p.starts_with(removed));
        self.children.retain(|p, _| !p.starts_with(removed));
        if self.selected.as_deref().is_some_and(|s| s.starts_with(removed)) {
            self.selected = None;
        }
    }

    /// Flattens the tree into display order.
    pub fn visible_rows(&self) -> Vec<TreeRow<'_>> {
        let mut rows = Vec::new();
        self.push_rows(&self.roots, 0, &mut rows);
        rows
    }

    fn push_rows<'a>(&'a self, entries: &'a [FileEntry], depth: usize, rows: &mut Vec<TreeRow<'a>>) {
        for entry in entries {
            let expanded = entry.is_dir && self.expanded.contains(&entry.path);
            rows.push(TreeRow {
                entry,
                depth,
                expanded,
            });
            if expanded {
                if let Some(children) = self.children.get(&entry.path) {
                    self.push_rows(children, depth + 1, rows);
                }
            }
        }
    }
}
