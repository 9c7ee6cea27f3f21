use crate::entry::FileEntry;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub show_hidden: bool,
    pub dirs_only: bool,
}

/// Lists `path`, directories first, then case-insensitive by name.
pub fn list_directory(path: &Path, options: ListOptions) -> Result<Vec<FileEntry>, std::io::Error> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(path)?.flatten() {
        let Some(file_entry) = FileEntry::from_path(entry.path()) else {
            continue;
        };
        if !options.show_hidden && file_entry.is_hidden() {
            continue;
        }
        if options.dirs_only && !file_entry.is_dir {
            continue;
        }
        entries.push(file_entry);
    }

    entries.sort_by(|a, b| {
        if a.is_dir != b.is_dir {
            return b.is_dir.cmp(&a.is_dir);
        }
        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    });
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn populated() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("beta.txt"), "b").unwrap();
        fs::write(root.join("Alpha.txt"), "a").unwrap();
        fs::write(root.join(".hidden"), "h").unwrap();
        fs::create_dir(root.join("zeta")).unwrap();
        fs::create_dir(root.join("Docs")).unwrap();
        dir
    }

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn directories_first_then_name() {
        let dir = populated();
        let entries = list_directory(dir.path(), ListOptions::default()).unwrap();
        assert_eq!(names(&entries), vec!["Docs", "zeta", "Alpha.txt", "beta.txt"]);
    }

    #[test]
    fn hidden_entries_are_optional() {
        let dir = populated();
        let options = ListOptions {
            show_hidden: true,
            ..Default::default()
        };
        let entries = list_directory(dir.path(), options).unwrap();
        assert!(names(&entries).contains(&".hidden"));
    }

    #[test]
    fn dirs_only_filters_files() {
        let dir = populated();
        let options = ListOptions {
            dirs_only: true,
            ..Default::default()
        };
        let entries = list_directory(dir.path(), options).unwrap();
        assert_eq!(names(&entries), vec!["Docs", "zeta"]);
    }

    #[test]
    fn missing_directory_errors() {
        let dir = TempDir::new().unwrap();
        assert!(list_directory(&dir.path().join("missing"), ListOptions::default()).is_err());
    }
}
