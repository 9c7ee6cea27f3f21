//! Error types for the browser, pin store and shortcut creator.

use std::path::PathBuf;

/// Errors produced while persisting the pin list.
#[derive(Debug, thiserror::Error)]
pub enum PinError {
    #[error("I/O error on pin file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced by delete and open operations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{op} failed for {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("move to trash failed: {0}")]
    Trash(#[from] trash::Error),
}

impl GatewayError {
    /// Maps an I/O error to the matching variant for `path`.
    pub fn from_io(op: &'static str, path: &std::path::Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                op,
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// Errors produced while loading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors produced by the shortcut creator.
#[derive(Debug, thiserror::Error)]
pub enum ShortcutError {
    #[error("{name} not found under {}", .start.display())]
    FileNotFound { name: String, start: PathBuf },

    #[error("desktop directory does not exist: {}", .0.display())]
    MissingDesktop(PathBuf),

    #[error("could not determine home directory")]
    NoHome,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};
    use std::path::Path;

    #[test]
    fn from_io_maps_not_found() {
        let err = GatewayError::from_io("delete", Path::new("/x"), Error::from(ErrorKind::NotFound));
        assert!(matches!(err, GatewayError::NotFound(p) if p == Path::new("/x")));
    }

    #[test]
    fn from_io_maps_permission_denied() {
        let err = GatewayError::from_io(
            "delete",
            Path::new("/x"),
            Error::from(ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, GatewayError::PermissionDenied(_)));
    }

    #[test]
    fn from_io_keeps_other_errors() {
        let err = GatewayError::from_io("open", Path::new("/x"), Error::other("boom"));
        assert!(err.to_string().contains("open failed for /x"));
    }
}
