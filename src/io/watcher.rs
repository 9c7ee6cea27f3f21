use eframe::egui;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};

/// Watches the current root directory (non-recursively) for external changes.
pub struct DirWatcher {
    watcher: RecommendedWatcher,
    rx: Receiver<()>,
    watched: Option<PathBuf>,
}

impl DirWatcher {
    /// `ctx` is repainted on every event so the UI picks up the change.
    pub fn new(ctx: Option<egui::Context>) -> notify::Result<Self> {
        let (tx, rx) = channel();
        let watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) if !matches!(event.kind, EventKind::Access(_)) => {
                    let _ = tx.send(());
                    if let Some(ctx) = &ctx {
                        ctx.request_repaint();
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::warn!(error = %e, "file watcher error"),
            }
        })?;
        Ok(Self {
            watcher,
            rx,
            watched: None,
        })
    }

    pub fn watched(&self) -> Option<&Path> {
        self.watched.as_deref()
    }

    /// Moves the watch to `path`, dropping the previous one.
    pub fn watch(&mut self, path: &Path) {
        if self.watched.as_deref() == Some(path) {
            return;
        }
        if let Some(old) = self.watched.take() {
            let _ = self.watcher.unwatch(&old);
        }
        match self.watcher.watch(path, RecursiveMode::NonRecursive) {
            Ok(()) => self.watched = Some(path.to_path_buf()),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not watch directory"),
        }
        // stale events belong to the old root
        while self.rx.try_recv().is_ok() {}
    }

    /// True if any change arrived since the last call.
    pub fn take_changed(&self) -> bool {
        let mut changed = false;
        while self.rx.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}
