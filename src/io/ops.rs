use crate::error::GatewayError;
use std::fs;
use std::path::Path;

/// Hands a path to the host's default application.
pub trait Launcher {
    fn launch(&self, path: &Path) -> std::io::Result<()>;
}

/// Launcher backed by the platform's default handler
/// (`xdg-open` / `open` / `ShellExecute`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn handler(&self) -> &'static str {
        if cfg!(target_os = "windows") {
            "ShellExecute"
        } else if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        }
    }
}

impl Launcher for SystemLauncher {
    fn launch(&self, path: &Path) -> std::io::Result<()> {
        open::that_detached(path)
    }
}

pub fn default_launcher() -> Box<dyn Launcher> {
    let launcher = SystemLauncher;
    tracing::debug!(handler = launcher.handler(), "selected system launcher");
    Box::new(launcher)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteMode {
    #[default]
    Permanent,
    Trash,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deleted {
    File,
    Directory,
}

impl Deleted {
    /// What deleting `path` would remove. Symlinks are not followed.
    pub fn of(path: &Path) -> std::io::Result<Self> {
        let meta = fs::symlink_metadata(path)?;
        Ok(if meta.is_dir() {
            Deleted::Directory
        } else {
            Deleted::File
        })
    }
}

/// Performs the filesystem side effects requested by the browser.
pub struct Gateway {
    launcher: Box<dyn Launcher>,
    delete_mode: DeleteMode,
}

impl Gateway {
    pub fn new(launcher: Box<dyn Launcher>, delete_mode: DeleteMode) -> Self {
        Self {
            launcher,
            delete_mode,
        }
    }

    pub fn delete_mode(&self) -> DeleteMode {
        self.delete_mode
    }

    /// Removes a file, a symlink, or a directory tree.
    ///
    /// Confirmation is the caller's job.
    pub fn delete_item(&self, path: &Path) -> Result<Deleted, GatewayError> {
        let kind = Deleted::of(path).map_err(|e| GatewayError::from_io("delete", path, e))?;

        match (self.delete_mode, kind) {
            (DeleteMode::Trash, _) => trash::delete(path)?,
            (DeleteMode::Permanent, Deleted::Directory) => {
                fs::remove_dir_all(path).map_err(|e| GatewayError::from_io("delete", path, e))?
            }
            (DeleteMode::Permanent, Deleted::File) => {
                fs::remove_file(path).map_err(|e| GatewayError::from_io("delete", path, e))?
            }
        }

        tracing::info!(path = %path.display(), ?kind, mode = ?self.delete_mode, "deleted item");
        Ok(kind)
    }

    pub fn open_item(&self, path: &Path) -> Result<(), GatewayError> {
        fs::metadata(path).map_err(|e| GatewayError::from_io("open", path, e))?;
        self.launcher
            .launch(path)
            .map_err(|e| GatewayError::from_io("open", path, e))?;
        tracing::info!(path = %path.display(), "opened with default handler");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;
    use tempfile::TempDir;

    /// Records launched paths instead of spawning anything.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingLauncher {
        pub(crate) launched: Rc<RefCell<Vec<PathBuf>>>,
    }

    impl Launcher for RecordingLauncher {
        fn launch(&self, path: &Path) -> std::io::Result<()> {
            self.launched.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    fn gateway() -> (Gateway, RecordingLauncher) {
        let launcher = RecordingLauncher::default();
        (
            Gateway::new(Box::new(launcher.clone()), DeleteMode::Permanent),
            launcher,
        )
    }

    #[test]
    fn deletes_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "x").unwrap();

        let (gw, _) = gateway();
        assert_eq!(gw.delete_item(&file).unwrap(), Deleted::File);
        assert!(!file.exists());
    }

    #[test]
    fn deletes_directory_recursively() {
        let dir = TempDir::new().unwrap();
        let tree = dir.path().join("tree");
        fs::create_dir_all(tree.join("inner").join("deeper")).unwrap();
        fs::write(tree.join("inner").join("f.txt"), "x").unwrap();

        let (gw, _) = gateway();
        assert_eq!(gw.delete_item(&tree).unwrap(), Deleted::Directory);
        assert!(!tree.exists());
    }

    #[test]
    fn delete_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (gw, _) = gateway();
        let err = gw.delete_item(&dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn delete_symlink_keeps_target() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "x").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert_eq!(Deleted::of(&link).unwrap(), Deleted::File);
        assert_eq!(Deleted::of(&target).unwrap(), Deleted::Directory);

        let (gw, _) = gateway();
        assert_eq!(gw.delete_item(&link).unwrap(), Deleted::File);
        assert!(target.join("keep.txt").exists());
    }

    #[test]
    fn open_dispatches_to_launcher() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("doc.txt");
        fs::write(&file, "x").unwrap();

        let (gw, launcher) = gateway();
        gw.open_item(&file).unwrap();
        assert_eq!(*launcher.launched.borrow(), vec![file]);
    }

    #[test]
    fn open_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (gw, launcher) = gateway();
        let err = gw.open_item(&dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(_)));
        assert!(launcher.launched.borrow().is_empty());
    }
}
