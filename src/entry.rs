use chrono::{DateTime, Local};
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

#[derive(Clone, Debug)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub size: u64,
    pub modified: SystemTime,
    pub extension: String,
}

impl FileEntry {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let symlink_meta = fs::symlink_metadata(&path).ok()?;
        let is_symlink = symlink_meta.is_symlink();

        let name = path.file_name()?.to_string_lossy().to_string();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        // Broken links fall back to the link's own metadata
        let metadata = fs::metadata(&path).ok();
        let is_dir = metadata.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let size = metadata.as_ref().map(|m| m.len()).unwrap_or(0);
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .or_else(|| symlink_meta.modified().ok())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        Some(Self {
            path,
            name,
            is_dir,
            is_symlink,
            size,
            modified,
            extension,
        })
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    pub fn get_icon(&self) -> &str {
        if self.is_dir {
            return "📁";
        }
        match self.extension.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg" | "ico" => "🖼",
            "mp4" | "mkv" | "mov" | "avi" | "webm" => "🎞",
            "mp3" | "wav" | "flac" | "ogg" | "m4a" => "🎵",
            "zip" | "tar" | "gz" | "7z" | "rar" | "xz" | "bz2" => "📦",
            "pdf" | "doc" | "docx" | "odt" => "📕",
            "exe" | "msi" | "sh" | "bat" | "cmd" => "⚙",
            _ => "📄",
        }
    }

    pub fn display_name(&self) -> String {
        if self.is_symlink {
            format!("{} \u{2192}", self.name)
        } else {
            self.name.clone()
        }
    }

    pub fn size_label(&self) -> String {
        if self.is_dir {
            String::new()
        } else {
            bytesize::ByteSize(self.size).to_string()
        }
    }

    pub fn kind_label(&self) -> String {
        if self.is_dir {
            "Folder".to_string()
        } else if self.extension.is_empty() {
            "File".to_string()
        } else {
            format!("{} File", self.extension.to_uppercase())
        }
    }

    pub fn modified_label(&self) -> String {
        let datetime: DateTime<Local> = self.modified.into();
        datetime.format("%Y-%m-%d %H:%M").to_string()
    }
}
