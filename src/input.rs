// Input handling for Axiom
// Keyboard shortcuts mapped onto messages

use crate::app::Axiom;
use crate::message::Message;
use crate::state::AppMode;
use eframe::egui;
use std::path::PathBuf;

impl Axiom {
    pub fn handle_input(&self, ctx: &egui::Context, out: &mut Vec<Message>) {
        // Confirmation modal swallows everything else
        if matches!(self.mode, AppMode::DeleteConfirm(_)) {
            if ctx.input(|i| i.key_pressed(egui::Key::Y) || i.key_pressed(egui::Key::Enter)) {
                out.push(Message::ConfirmDelete);
            }
            if ctx.input(|i| i.key_pressed(egui::Key::N) || i.key_pressed(egui::Key::Escape)) {
                out.push(Message::CancelDelete);
            }
            return;
        }

        if ctx.wants_keyboard_input() {
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::J)) {
            if let Some(path) = self.step_selection(1) {
                out.push(Message::Select(path));
            }
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::K)) {
            if let Some(path) = self.step_selection(-1) {
                out.push(Message::Select(path));
            }
        }

        let selected = self.tree.selected().map(|p| p.to_path_buf());
        if let Some(path) = selected {
            if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                out.push(Message::Open(path.clone()));
            }
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::L)) {
                let collapsed_dir = self
                    .tree
                    .find(&path)
                    .is_some_and(|e| e.is_dir && !self.tree.expanded.contains(&path));
                if collapsed_dir {
                    out.push(Message::ToggleExpand(path.clone()));
                }
            }
            if ctx.input(|i| i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::D)) {
                out.push(Message::RequestDelete(path.clone()));
            }
            if ctx.input(|i| i.key_pressed(egui::Key::P)) {
                out.push(Message::Pin(path));
            }
        }

        if ctx.input(|i| {
            i.key_pressed(egui::Key::Backspace)
                || (i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft))
        }) {
            out.push(Message::GoBack);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Period)) {
            out.push(Message::ToggleHidden);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            out.push(Message::Refresh);
        }
    }

    /// The row `delta` steps from the selection, clamped to the visible rows.
    pub(crate) fn step_selection(&self, delta: isize) -> Option<PathBuf> {
        let rows = self.tree.visible_rows();
        if rows.is_empty() {
            return None;
        }
        let current = self
            .tree
            .selected()
            .and_then(|sel| rows.iter().position(|r| r.entry.path == sel));
        let next = match current {
            Some(idx) => idx.saturating_add_signed(delta).min(rows.len() - 1),
            None => 0,
        };
        Some(rows[next].entry.path.clone())
    }
}
