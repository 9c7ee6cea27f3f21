use std::path::PathBuf;

#[derive(Debug, PartialEq, Clone, Default)]
pub enum AppMode {
    #[default]
    Normal,
    DeleteConfirm(PathBuf),
}
