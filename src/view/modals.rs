// Drive menu modal
use crate::app::{PendingClicks, TwinCmd};
use crate::layout;
use eframe::egui;
use std::cell::RefCell;

impl TwinCmd {
    pub(crate) fn render_drive_menu(&self, ctx: &egui::Context, clicks: &RefCell<PendingClicks>) {
        let Some(menu) = &self.view.drive_menu else {
            return;
        };
        egui::Window::new("Drives")
            .id(egui::Id::new("drive_menu"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(layout::modal_width(ctx))
            .show(ctx, |ui| {
                ui.label(format!("Open in {} pane", menu.target.name()));
                ui.separator();
                egui::Grid::new("drive_grid").striped(true).show(ui, |ui| {
                    for (idx, label) in menu.labels.iter().enumerate() {
                        ui.monospace(format!("{}", idx + 1));
                        if ui.selectable_label(idx == menu.cursor, label).clicked() {
                            clicks.borrow_mut().drive = Some(idx);
                        }
                        ui.end_row();
                    }
                });
                ui.separator();
                ui.weak("j/k move · Enter open · Tab switch pane · Esc cancel");
            });
    }
}
