// Panel rendering for Axiom
// Breadcrumb bar, pin list, tree table, action buttons and status line

use crate::app::Axiom;
use crate::message::Message;
use crate::style;
use eframe::egui;

impl Axiom {
    pub(crate) fn render_breadcrumbs(&self, ui: &mut egui::Ui, out: &mut Vec<Message>) {
        ui.horizontal(|ui| {
            let can_go_back = self.navigation.len() > 1;
            if ui
                .add_enabled(can_go_back, egui::Button::new("⬅"))
                .on_hover_text("Back")
                .clicked()
            {
                out.push(Message::GoBack);
            }
            if ui.button("⟳").on_hover_text("Refresh").clicked() {
                out.push(Message::Refresh);
            }
            ui.separator();

            ui.spacing_mut().item_spacing.x = 0.0;
            let crumbs = self.navigation.breadcrumbs();
            let last = crumbs.len().saturating_sub(1);
            for crumb in crumbs {
                let text = if crumb.index == last {
                    egui::RichText::new(&crumb.label).strong()
                } else {
                    egui::RichText::new(&crumb.label)
                };
                if ui
                    .add(egui::Button::new(text).frame(false))
                    .on_hover_text(crumb.path.display().to_string())
                    .clicked()
                {
                    out.push(Message::NavigateTo(crumb.index));
                }
                if crumb.index < last {
                    ui.label(" / ");
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut hidden = self.ui.show_hidden;
                if ui.checkbox(&mut hidden, "Hidden").changed() {
                    out.push(Message::ToggleHidden);
                }
                let theme_icon = match self.ui.theme {
                    style::Theme::Dark => "☀",
                    style::Theme::Light => "🌙",
                };
                if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                    out.push(Message::ToggleTheme);
                }
            });
        });
    }

    pub(crate) fn render_pins(&self, ui: &mut egui::Ui, out: &mut Vec<Message>) {
        ui.add_space(4.0);
        ui.heading("Pinned Items");
        ui.separator();

        if self.pins.is_empty() {
            ui.weak("Nothing pinned yet");
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("pins_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for pin in self.pins.entries() {
                    let target = pin.resolve(&self.home);
                    ui.horizontal(|ui| {
                        if ui
                            .small_button("🗑")
                            .on_hover_text("Unpin")
                            .clicked()
                        {
                            out.push(Message::Unpin(pin.as_str().to_string()));
                        }
                        let icon = if target.is_dir() { "📁" } else { "📄" };
                        let response = style::truncated_label_with_sense(
                            ui,
                            format!("{} {}", icon, pin.display_name()),
                            egui::Sense::click(),
                        )
                        .on_hover_text(target.display().to_string());
                        if response.clicked() {
                            out.push(Message::OpenPin(pin.as_str().to_string()));
                        }
                    });
                }
            });
    }

    pub(crate) fn render_tree(&self, ui: &mut egui::Ui, out: &mut Vec<Message>) {
        use egui_extras::{Column, TableBuilder};

        let rows = self.tree.visible_rows();
        let selected = self.tree.selected();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(style::NAME_COL_WIDTH).at_least(120.0).clip(true))
            .column(Column::initial(80.0).at_least(50.0))
            .column(Column::initial(90.0).at_least(50.0))
            .column(Column::remainder().at_least(110.0))
            .header(style::HEADER_HEIGHT, |mut header| {
                for title in ["Name", "Size", "Type", "Date Modified"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(style::ROW_HEIGHT, rows.len(), |mut row| {
                    let tree_row = &rows[row.index()];
                    let entry = tree_row.entry;
                    row.set_selected(selected == Some(entry.path.as_path()));

                    row.col(|ui| {
                        ui.add_space(tree_row.depth as f32 * style::INDENT_WIDTH);
                        if entry.is_dir {
                            let arrow = if tree_row.expanded { "⏷" } else { "⏵" };
                            if ui.add(egui::Button::new(arrow).frame(false)).clicked() {
                                out.push(Message::ToggleExpand(entry.path.clone()));
                            }
                        } else {
                            ui.add_space(style::ICON_SIZE + 4.0);
                        }
                        ui.label(egui::RichText::new(entry.get_icon()).size(style::ICON_SIZE));
                        let mut text = egui::RichText::new(entry.display_name());
                        if entry.is_dir {
                            text = text.color(style::DIR_COLOR);
                        }
                        style::truncated_label(ui, text);
                    });
                    row.col(|ui| {
                        ui.label(entry.size_label());
                    });
                    row.col(|ui| {
                        ui.label(entry.kind_label());
                    });
                    row.col(|ui| {
                        ui.label(entry.modified_label());
                    });

                    let response = row.response();
                    if response.clicked() {
                        out.push(Message::Select(entry.path.clone()));
                    }
                    if response.double_clicked() {
                        out.push(Message::Open(entry.path.clone()));
                    }
                    response.context_menu(|ui| {
                        if ui.button("📂 Open").clicked() {
                            out.push(Message::Open(entry.path.clone()));
                            ui.close();
                        }
                        if ui.button("📌 Pin").clicked() {
                            out.push(Message::Pin(entry.path.clone()));
                            ui.close();
                        }
                        ui.separator();
                        if ui.button("🗑 Delete").clicked() {
                            out.push(Message::Select(entry.path.clone()));
                            out.push(Message::RequestDelete(entry.path.clone()));
                            ui.close();
                        }
                    });
                });
            });
    }

    pub(crate) fn render_actions(&self, ui: &mut egui::Ui, out: &mut Vec<Message>) {
        let selected = self.tree.selected().map(|p| p.to_path_buf());
        let enabled = selected.is_some();
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(enabled, egui::Button::new("Open")).clicked() {
                out.push(Message::OpenSelected);
            }
            if ui.add_enabled(enabled, egui::Button::new("Delete")).clicked() {
                if let Some(path) = &selected {
                    out.push(Message::RequestDelete(path.clone()));
                }
            }
            if ui
                .add_enabled(enabled, egui::Button::new("Pin Selected Item"))
                .clicked()
            {
                if let Some(path) = &selected {
                    out.push(Message::Pin(path.clone()));
                }
            }
        });
    }

    pub(crate) fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("{} items", self.tree.roots.len()));
            if let Some(entry) = self.tree.selected().and_then(|p| self.tree.find(p)) {
                ui.separator();
                ui.label(entry.path.display().to_string());
            }
            if let Some(notice) = self.ui.current_notice() {
                ui.separator();
                let color = if notice.is_error() {
                    egui::Color32::RED
                } else {
                    ui.visuals().text_color()
                };
                ui.colored_label(color, notice.text());
            }
        });
    }
}
