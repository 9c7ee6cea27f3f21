use crate::config::{home_dir, Config};
use crate::io::{default_launcher, DirWatcher, Gateway, ListOptions};
use crate::message::Message;
use crate::pins::{PinEntry, PinStore};
use crate::state::{AppMode, NavigationState, TreeState, UIState};
use crate::style::{self, Theme};
use eframe::egui;
use std::path::{Path, PathBuf};

pub struct Axiom {
    // Navigation
    pub navigation: NavigationState,
    pub tree: TreeState,

    // Pins
    pub pins: PinStore,
    pub home: PathBuf,

    // File operations
    pub gateway: Gateway,
    pub confirm_delete: bool,

    // Mode & UI
    pub mode: AppMode,
    pub ui: UIState,
    pub pins_width: f32,

    pub watcher: Option<DirWatcher>,
    applied_theme: Option<Theme>,
}

impl Axiom {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        let pins = PinStore::open(config.pin_file());
        tracing::info!(path = %pins.path().display(), count = pins.len(), "loaded pins");

        let gateway = Gateway::new(default_launcher(), config.browser.delete_mode());
        let mut app = Self::from_parts(config, pins, gateway, home_dir());

        match DirWatcher::new(Some(cc.egui_ctx.clone())) {
            Ok(mut watcher) => {
                watcher.watch(app.navigation.current());
                app.watcher = Some(watcher);
            }
            Err(e) => tracing::warn!(error = %e, "file watching disabled"),
        }
        app
    }

    /// Builds the browser without a window, rooted at the configured start directory.
    pub fn from_parts(config: &Config, pins: PinStore, gateway: Gateway, home: PathBuf) -> Self {
        let start = config.start_dir();
        let mut app = Self {
            navigation: NavigationState::new(start.clone()),
            tree: TreeState::new(start),
            pins,
            home,
            gateway,
            confirm_delete: config.browser.confirm_delete,
            mode: AppMode::Normal,
            ui: UIState::new(
                Theme::from_name(&config.theme.mode),
                config.browser.show_hidden,
                config.browser.dirs_only,
            ),
            pins_width: style::PINS_DEFAULT,
            watcher: None,
            applied_theme: None,
        };
        app.sync_root();
        app
    }

    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            show_hidden: self.ui.show_hidden,
            dirs_only: self.ui.dirs_only,
        }
    }

    pub fn dispatch(&mut self, message: Message) {
        tracing::trace!(?message, "dispatch");
        match message {
            Message::NavigateInto(path) => {
                if self.navigation.navigate_into(&path) {
                    self.sync_root();
                }
            }
            Message::NavigateTo(index) => {
                if self.navigation.navigate_to(index).is_some() {
                    self.sync_root();
                }
            }
            Message::GoBack => {
                if self.navigation.go_back().is_some() {
                    self.sync_root();
                }
            }
            Message::Refresh => self.refresh(),
            Message::Select(path) => self.tree.select(path),
            Message::ToggleExpand(path) => {
                let options = self.list_options();
                if let Err(e) = self.tree.toggle(&path, options) {
                    self.ui
                        .set_error(format!("Cannot read {}: {}", path.display(), e));
                }
            }
            Message::Open(path) => self.open(&path),
            Message::OpenSelected => {
                if let Some(path) = self.tree.selected().map(Path::to_path_buf) {
                    self.open(&path);
                }
            }
            Message::RequestDelete(path) => {
                if self.confirm_delete {
                    self.mode = AppMode::DeleteConfirm(path);
                } else {
                    self.perform_delete(&path);
                }
            }
            Message::ConfirmDelete => {
                if let AppMode::DeleteConfirm(path) = std::mem::take(&mut self.mode) {
                    self.perform_delete(&path);
                }
            }
            Message::CancelDelete => self.mode = AppMode::Normal,
            Message::Pin(path) => self.pin(&path),
            Message::Unpin(name) => {
                if let Err(e) = self.pins.remove(&name) {
                    self.ui.set_error(format!("Could not save pins: {}", e));
                }
            }
            Message::OpenPin(name) => self.open_pin(&name),
            Message::ToggleHidden => {
                self.ui.show_hidden = !self.ui.show_hidden;
                self.refresh();
            }
            Message::ToggleTheme => self.ui.theme = self.ui.theme.toggle(),
        }
    }

    /// Points the tree and the watcher at the current breadcrumb.
    fn sync_root(&mut self) {
        let root = self.navigation.current().to_path_buf();
        let options = self.list_options();
        if let Err(e) = self.tree.set_root(&root, options) {
            self.ui
                .set_error(format!("Cannot read {}: {}", root.display(), e));
        }
        if let Some(watcher) = &mut self.watcher {
            watcher.watch(&root);
        }
    }

    fn refresh(&mut self) {
        let options = self.list_options();
        if let Err(e) = self.tree.refresh(options) {
            self.ui.set_error(format!(
                "Cannot read {}: {}",
                self.tree.root.display(),
                e
            ));
        }
    }

    fn open(&mut self, path: &Path) {
        if path.is_dir() {
            self.dispatch(Message::NavigateInto(path.to_path_buf()));
        } else if let Err(e) = self.gateway.open_item(path) {
            self.ui.set_error(format!("Could not open file: {}", e));
        }
    }

    fn perform_delete(&mut self, path: &Path) {
        match self.gateway.delete_item(path) {
            Ok(kind) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.ui.set_info(format!(
                    "Deleted {} '{}'",
                    match kind {
                        crate::io::Deleted::File => "file",
                        crate::io::Deleted::Directory => "folder",
                    },
                    name
                ));
                self.tree.forget(path);
                if self.navigation.forget(path) {
                    self.sync_root();
                } else {
                    self.refresh();
                }
            }
            Err(e) => self.ui.set_error(format!("Delete failed: {}", e)),
        }
    }

    fn pin(&mut self, path: &Path) {
        if !path.exists() {
            self.ui
                .set_error(format!("Cannot pin missing item: {}", path.display()));
            return;
        }
        let entry = PinEntry::from_path(path);
        let name = entry.display_name().to_string();
        if self.pins.contains(path, &self.home) {
            self.ui.set_info(format!("{} is already pinned", name));
            return;
        }
        match self.pins.add(entry) {
            Ok(true) => self.ui.set_info(format!("Pinned {}", name)),
            Ok(false) => self.ui.set_info(format!("{} is already pinned", name)),
            Err(e) => self.ui.set_error(format!("Could not save pins: {}", e)),
        }
    }

    fn open_pin(&mut self, name: &str) {
        let Some(entry) = self.pins.entries().iter().find(|e| e.as_str() == name) else {
            return;
        };
        let path = entry.resolve(&self.home);
        if path.is_dir() {
            self.dispatch(Message::NavigateInto(path));
        } else if path.is_file() {
            self.open(&path);
        } else {
            self.ui.set_error(format!(
                "Pinned item no longer exists: {}",
                path.display()
            ));
        }
    }

    fn poll_watcher(&mut self) {
        let changed = self.watcher.as_ref().is_some_and(|w| w.take_changed());
        if changed {
            tracing::debug!(root = %self.tree.root.display(), "directory changed, refreshing");
            self.refresh();
        }
    }
}

impl eframe::App for Axiom {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_theme != Some(self.ui.theme) {
            ctx.set_visuals(self.ui.theme.visuals());
            self.applied_theme = Some(self.ui.theme);
        }
        self.poll_watcher();
        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);

        let mut pending = Vec::new();
        self.handle_input(ctx, &mut pending);

        egui::TopBottomPanel::top("breadcrumb_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_breadcrumbs(ui, &mut pending);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            self.render_actions(ui, &mut pending);
            ui.separator();
            self.render_status(ui);
        });

        egui::SidePanel::left("pins_panel")
            .resizable(true)
            .default_width(self.pins_width)
            .width_range(style::PINS_MIN..=style::PINS_MAX)
            .show(ctx, |ui| {
                self.render_pins(ui, &mut pending);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_tree(ui, &mut pending);
        });

        self.render_delete_modal(ctx, &mut pending);

        for message in pending {
            self.dispatch(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{DeleteMode, Launcher};
    use crate::state::Notice;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<PathBuf>>>);

    impl Launcher for Recorder {
        fn launch(&self, path: &Path) -> std::io::Result<()> {
            self.0.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    struct Fixture {
        _dir: TempDir,
        home: PathBuf,
        pin_file: PathBuf,
        launched: Recorder,
        app: Axiom,
    }

    fn fixture(confirm_delete: bool) -> Fixture {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        fs::create_dir_all(home.join("Projects").join("axiom")).unwrap();
        fs::create_dir_all(home.join("Notes")).unwrap();
        fs::write(home.join("todo.txt"), "x").unwrap();
        let pin_file = dir.path().join("app").join("pin.json");

        let mut config = Config::default();
        config.browser.start_dir = Some(home.clone());
        config.browser.confirm_delete = confirm_delete;

        let launched = Recorder::default();
        let gateway = Gateway::new(Box::new(launched.clone()), DeleteMode::Permanent);
        let app = Axiom::from_parts(&config, PinStore::open(&pin_file), gateway, home.clone());
        Fixture {
            _dir: dir,
            home,
            pin_file,
            launched,
            app,
        }
    }

    fn notice(app: &Axiom) -> Option<Notice> {
        app.ui.current_notice().cloned()
    }

    #[test]
    fn starts_at_start_dir_with_listing() {
        let f = fixture(true);
        assert_eq!(f.app.navigation.current(), f.home);
        let names: Vec<_> = f.app.tree.roots.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Notes", "Projects", "todo.txt"]);
    }

    #[test]
    fn breadcrumb_navigation_round_trip() {
        let mut f = fixture(true);
        let projects = f.home.join("Projects");
        f.app.dispatch(Message::NavigateInto(projects.clone()));
        f.app.dispatch(Message::NavigateInto(projects.join("axiom")));
        assert_eq!(f.app.navigation.len(), 3);
        assert_eq!(f.app.tree.root, projects.join("axiom"));

        f.app.dispatch(Message::NavigateTo(1));
        assert_eq!(f.app.navigation.len(), 2);
        assert_eq!(f.app.tree.root, projects);

        f.app.dispatch(Message::GoBack);
        assert_eq!(f.app.tree.root, f.home);
    }

    #[test]
    fn navigating_into_file_is_ignored() {
        let mut f = fixture(true);
        f.app.dispatch(Message::NavigateInto(f.home.join("todo.txt")));
        assert_eq!(f.app.navigation.len(), 1);
        assert!(notice(&f.app).is_none());
    }

    #[test]
    fn open_file_uses_launcher_and_open_dir_navigates() {
        let mut f = fixture(true);
        let todo = f.home.join("todo.txt");
        f.app.dispatch(Message::Select(todo.clone()));
        f.app.dispatch(Message::OpenSelected);
        assert_eq!(*f.launched.0.borrow(), vec![todo]);

        f.app.dispatch(Message::Open(f.home.join("Notes")));
        assert_eq!(f.app.navigation.current(), f.home.join("Notes"));
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut f = fixture(true);
        let todo = f.home.join("todo.txt");
        f.app.dispatch(Message::RequestDelete(todo.clone()));
        assert_eq!(f.app.mode, AppMode::DeleteConfirm(todo.clone()));
        assert!(todo.exists());

        f.app.dispatch(Message::CancelDelete);
        assert_eq!(f.app.mode, AppMode::Normal);
        assert!(todo.exists());

        f.app.dispatch(Message::RequestDelete(todo.clone()));
        f.app.dispatch(Message::ConfirmDelete);
        assert!(!todo.exists());
        assert_eq!(f.app.mode, AppMode::Normal);
        assert_eq!(
            notice(&f.app),
            Some(Notice::Info("Deleted file 'todo.txt'".into()))
        );
        assert!(f.app.tree.roots.iter().all(|e| e.name != "todo.txt"));
    }

    #[test]
    fn delete_missing_reports_and_leaves_state() {
        let mut f = fixture(false);
        let notes = f.home.join("Notes");
        f.app.dispatch(Message::Pin(notes.clone()));
        f.app.dispatch(Message::NavigateInto(notes.clone()));
        let pins_before: Vec<_> = f.app.pins.entries().to_vec();
        let history_before = f.app.navigation.history().to_vec();

        f.app.dispatch(Message::RequestDelete(f.home.join("ghost")));
        let n = notice(&f.app).unwrap();
        assert!(n.is_error());
        assert!(n.text().contains("not found"));
        assert_eq!(f.app.pins.entries(), pins_before.as_slice());
        assert_eq!(f.app.navigation.history(), history_before.as_slice());
    }

    #[test]
    fn deleting_current_root_moves_up() {
        let mut f = fixture(false);
        let projects = f.home.join("Projects");
        f.app.dispatch(Message::NavigateInto(projects.clone()));
        f.app.dispatch(Message::NavigateInto(projects.join("axiom")));

        f.app.dispatch(Message::RequestDelete(projects.clone()));
        assert!(!projects.exists());
        assert_eq!(f.app.navigation.current(), f.home);
        assert_eq!(f.app.tree.root, f.home);
    }

    #[test]
    fn pin_unpin_persist() {
        let mut f = fixture(true);
        let projects = f.home.join("Projects");
        f.app.dispatch(Message::Pin(projects.clone()));
        f.app.dispatch(Message::Pin(f.home.join("Notes")));
        f.app.dispatch(Message::Pin(projects.clone()));
        assert_eq!(f.app.pins.len(), 2);
        assert_eq!(
            notice(&f.app),
            Some(Notice::Info("Projects is already pinned".into()))
        );

        let reloaded = PinStore::open(&f.pin_file);
        assert_eq!(reloaded.entries(), f.app.pins.entries());

        let key = PinEntry::from_path(&projects).as_str().to_string();
        f.app.dispatch(Message::Unpin(key));
        assert_eq!(PinStore::open(&f.pin_file).len(), 1);
    }

    #[test]
    fn pin_missing_item_is_rejected() {
        let mut f = fixture(true);
        f.app.dispatch(Message::Pin(f.home.join("ghost")));
        assert!(f.app.pins.is_empty());
        assert!(notice(&f.app).unwrap().is_error());
    }

    #[test]
    fn open_pin_handles_legacy_names_and_missing_targets() {
        let mut f = fixture(true);
        fs::create_dir_all(f.pin_file.parent().unwrap()).unwrap();
        fs::write(&f.pin_file, r#"["Notes","Gone"]"#).unwrap();
        f.app.pins = PinStore::open(&f.pin_file);

        f.app.dispatch(Message::OpenPin("Notes".into()));
        assert_eq!(f.app.navigation.current(), f.home.join("Notes"));

        f.app.dispatch(Message::OpenPin("Gone".into()));
        assert!(notice(&f.app).unwrap().is_error());
        assert_eq!(f.app.navigation.current(), f.home.join("Notes"));
    }

    #[test]
    fn toggle_hidden_relists() {
        let mut f = fixture(true);
        fs::write(f.home.join(".secret"), "x").unwrap();
        f.app.dispatch(Message::Refresh);
        assert!(f.app.tree.roots.iter().all(|e| e.name != ".secret"));

        f.app.dispatch(Message::ToggleHidden);
        assert!(f.app.tree.roots.iter().any(|e| e.name == ".secret"));
    }

    #[test]
    fn expand_unreadable_reports_error() {
        let mut f = fixture(true);
        f.app.dispatch(Message::ToggleExpand(f.home.join("ghost")));
        assert!(notice(&f.app).unwrap().is_error());
    }

    #[test]
    fn deleting_off_trail_crumb_drops_it_from_history() {
        let mut f = fixture(false);
        let projects = f.home.join("Projects");
        let notes = f.home.join("Notes");
        f.app.dispatch(Message::NavigateInto(projects.clone()));
        f.app.dispatch(Message::NavigateInto(notes.clone()));

        f.app.dispatch(Message::RequestDelete(projects.clone()));
        assert!(!projects.exists());
        assert_eq!(f.app.navigation.history(), [f.home.clone(), notes.clone()]);
        assert_eq!(f.app.tree.root, notes);
        assert!(!notice(&f.app).unwrap().is_error());
    }

    #[test]
    fn deleting_start_dir_restarts_at_parent() {
        let mut f = fixture(false);
        let projects = f.home.join("Projects");
        let axiom = projects.join("axiom");
        f.app.navigation = NavigationState::new(projects.clone());
        f.app.dispatch(Message::NavigateInto(axiom));

        f.app.dispatch(Message::RequestDelete(projects));
        assert_eq!(f.app.navigation.history(), [f.home.clone()]);
        assert_eq!(f.app.tree.root, f.home);
        assert!(!notice(&f.app).unwrap().is_error());
    }

    #[test]
    fn pinning_item_held_as_legacy_name_is_a_no_op() {
        let mut f = fixture(true);
        fs::create_dir_all(f.pin_file.parent().unwrap()).unwrap();
        fs::write(&f.pin_file, r#"["Projects","Notes"]"#).unwrap();
        f.app.pins = PinStore::open(&f.pin_file);

        f.app.dispatch(Message::Pin(f.home.join("Projects")));
        assert_eq!(f.app.pins.len(), 2);
        assert_eq!(
            notice(&f.app),
            Some(Notice::Info("Projects is already pinned".into()))
        );
        assert_eq!(
            fs::read_to_string(&f.pin_file).unwrap(),
            r#"["Projects","Notes"]"#
        );
    }
}
