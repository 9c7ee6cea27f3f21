mod directory;
mod ops;
mod watcher;

pub use directory::{list_directory, ListOptions};
pub use ops::{default_launcher, DeleteMode, Deleted, Gateway, Launcher, SystemLauncher};
pub use watcher::DirWatcher;
