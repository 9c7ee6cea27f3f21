//! Desktop shortcut provisioning.
//!
//! Locates the program and its icon by scanning a directory tree, then
//! writes a launcher file on the desktop: an `InternetShortcut` `.url`
//! file on Windows, a freedesktop `.desktop` entry elsewhere.

use crate::error::ShortcutError;
use ignore::WalkBuilder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Returns the first file named `name` under `start`, in walk order.
///
/// Hidden and git-ignored files are included; unreadable directories
/// are skipped.
pub fn find_file(name: &str, start: &Path) -> Result<PathBuf, ShortcutError> {
    tracing::info!(name, start = %start.display(), "searching");
    let walker = WalkBuilder::new(start)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        if is_file && entry.file_name() == std::ffi::OsStr::new(name) {
            tracing::info!(path = %entry.path().display(), "found");
            return Ok(entry.into_path());
        }
    }

    Err(ShortcutError::FileNotFound {
        name: name.to_string(),
        start: start.to_path_buf(),
    })
}

/// The desktop directory, preferring a OneDrive-synced desktop when present.
pub fn desktop_dir() -> Result<PathBuf, ShortcutError> {
    let dirs = directories::UserDirs::new().ok_or(ShortcutError::NoHome)?;
    Ok(pick_desktop(dirs.home_dir(), dirs.desktop_dir()))
}

fn pick_desktop(home: &Path, platform_desktop: Option<&Path>) -> PathBuf {
    let one_drive = home.join("OneDrive").join("Desktop");
    if one_drive.is_dir() {
        tracing::info!(path = %one_drive.display(), "using OneDrive desktop");
        return one_drive;
    }
    platform_desktop
        .map(Path::to_path_buf)
        .unwrap_or_else(|| home.join("Desktop"))
}

/// Default directory the search starts from.
pub fn downloads_dir() -> Option<PathBuf> {
    let dirs = directories::UserDirs::new()?;
    Some(
        dirs.download_dir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| dirs.home_dir().join("Downloads")),
    )
}

/// Platform launcher file extension.
pub fn shortcut_extension() -> &'static str {
    if cfg!(windows) {
        "url"
    } else {
        "desktop"
    }
}

/// Writes `<desktop>/<name>.<ext>` pointing at `target` with `icon`.
///
/// The file is staged next to its destination and renamed into place.
pub fn create_shortcut(
    target: &Path,
    icon: &Path,
    desktop: &Path,
    name: &str,
) -> Result<PathBuf, ShortcutError> {
    if !desktop.is_dir() {
        return Err(ShortcutError::MissingDesktop(desktop.to_path_buf()));
    }
    let shortcut = desktop.join(format!("{}.{}", name, shortcut_extension()));
    let contents = if cfg!(windows) {
        url_shortcut(target, icon)
    } else {
        desktop_entry(target, icon, name)
    };

    let staging = desktop.join(format!(".{}.{}.tmp", name, shortcut_extension()));
    let written = fs::File::create(&staging).and_then(|mut file| {
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written.and_then(|_| fs::rename(&staging, &shortcut)) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }
    mark_executable(&shortcut)?;

    tracing::info!(
        shortcut = %shortcut.display(),
        target = %target.display(),
        icon = %icon.display(),
        "shortcut created"
    );
    Ok(shortcut)
}

fn url_shortcut(target: &Path, icon: &Path) -> String {
    format!(
        "[InternetShortcut]\r\nURL={}\r\nIconIndex=0\r\nIconFile={}\r\n",
        file_url(target),
        icon.display()
    )
}

fn desktop_entry(target: &Path, icon: &Path, name: &str) -> String {
    format!(
        "[Desktop Entry]\nType=Application\nName={}\nExec=\"{}\"\nIcon={}\nTerminal=false\nCategories=Utility;FileManager;\n",
        name,
        target.display(),
        icon.display()
    )
}

fn file_url(path: &Path) -> String {
    let raw = path.to_string_lossy().replace('\\', "/");
    let mut url = String::from("file://");
    if !raw.starts_with('/') {
        url.push('/');
    }
    for ch in raw.chars() {
        match ch {
            ' ' => url.push_str("%20"),
            '#' => url.push_str("%23"),
            '%' => url.push_str("%25"),
            c => url.push(c),
        }
    }
    url
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
