// Modal rendering functions (delete confirmation)

use crate::app::Axiom;
use crate::io::{DeleteMode, Deleted};
use crate::message::Message;
use crate::state::AppMode;
use crate::style;
use eframe::egui;

impl Axiom {
    pub(crate) fn render_delete_modal(&self, ctx: &egui::Context, out: &mut Vec<Message>) {
        let AppMode::DeleteConfirm(path) = &self.mode else {
            return;
        };
        let kind = match Deleted::of(path) {
            Ok(Deleted::Directory) => "folder",
            _ => "file",
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.label(format!(
                    "Are you sure you want to delete the {} '{}'?",
                    kind, name
                ));
                ui.weak(path.display().to_string());
                if self.gateway.delete_mode() == DeleteMode::Trash {
                    ui.label("It will be moved to the trash.");
                } else if kind == "folder" {
                    ui.colored_label(
                        egui::Color32::from_rgb(255, 170, 0),
                        "Everything inside it will be removed.",
                    );
                }
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes (y)").clicked() {
                        out.push(Message::ConfirmDelete);
                    }
                    if ui.button("No (n)").clicked() {
                        out.push(Message::CancelDelete);
                    }
                });
            });
    }
}
