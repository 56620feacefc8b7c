// Dual-pane listing rendering
use crate::app::{PendingClicks, TwinCmd};
use crate::layout;
use crate::state::Pane;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::cell::RefCell;

impl TwinCmd {
    pub(crate) fn render_panes(&self, ctx: &egui::Context, clicks: &RefCell<PendingClicks>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.spacing_mut().item_spacing.x = layout::PANE_GAP;
            ui.columns(2, |columns| {
                for (pane, ui) in Pane::BOTH.into_iter().zip(columns.iter_mut()) {
                    self.render_pane(ui, pane, clicks);
                }
            });
        });
    }

    fn render_pane(&self, ui: &mut egui::Ui, pane: Pane, clicks: &RefCell<PendingClicks>) {
        let id = format!("{}_pane", pane.name());
        ui.push_id(&id, |ui| {
            let response = self.render_pane_header(ui, pane);
            if response.clicked() {
                clicks.borrow_mut().pane = Some(pane);
            }
            ui.separator();
            self.render_pane_table(ui, pane, clicks);

            // Clicking empty space below the rows still focuses the pane.
            let rest = ui.allocate_response(ui.available_size(), egui::Sense::click());
            if rest.clicked() {
                clicks.borrow_mut().pane = Some(pane);
            }
        });
    }

    fn render_pane_header(&self, ui: &mut egui::Ui, pane: Pane) -> egui::Response {
        let id = format!("{}_pane_header", pane.name());
        ui.push_id(&id, |ui| self.render_pane_header_frame(ui, pane))
            .inner
    }

    fn render_pane_header_frame(&self, ui: &mut egui::Ui, pane: Pane) -> egui::Response {
        let palette = self.view.theme.palette();
        let listing = self.pane(pane);
        let active = pane == self.view.active_pane;
        let fill = if active {
            palette.header_active
        } else {
            palette.header_inactive
        };

        egui::Frame::new()
            .fill(fill)
            .inner_margin(egui::Margin::symmetric(6, 2))
            .show(ui, |ui| {
                ui.set_min_height(layout::HEADER_HEIGHT);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(self.view.header_label(pane))
                            .small()
                            .strong(),
                    );
                    let mut path = listing.path.display().to_string();
                    if let Some(query) = listing.filter() {
                        path.push_str(&format!("  [/{}]", query));
                    }
                    if listing.is_loading() {
                        path.push_str("  …");
                    }
                    layout::truncated_label_with_sense(ui, path, egui::Sense::hover());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let marked = listing.marked_count();
                        let count = if marked > 0 {
                            format!("{} marked / {}", marked, listing.total_entries())
                        } else {
                            format!("{} items", listing.total_entries())
                        };
                        ui.label(egui::RichText::new(count).small());
                    });
                });
            })
            .response
            .interact(egui::Sense::click())
    }

    fn render_pane_table(&self, ui: &mut egui::Ui, pane: Pane, clicks: &RefCell<PendingClicks>) {
        let palette = self.view.theme.palette();
        let listing = self.pane(pane);
        let entries = listing.visible_entries();
        let active = pane == self.view.active_pane;

        let mut table = TableBuilder::new(ui)
            .id_salt(format!("{}_table", pane.name()))
            .striped(true)
            .resizable(false)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(layout::ICON_COL_WIDTH))
            .column(Column::remainder().clip(true))
            .column(Column::exact(layout::SIZE_COL_WIDTH))
            .column(Column::exact(layout::DATE_COL_WIDTH));
        if let Some(idx) = listing.cursor() {
            table = table.scroll_to_row(idx, None);
        }

        table
            .header(layout::HEADER_HEIGHT, |mut header| {
                header.col(|_| {});
                header.col(|ui| {
                    ui.strong("Name");
                });
                header.col(|ui| {
                    ui.strong("Size");
                });
                header.col(|ui| {
                    ui.strong("Modified");
                });
            })
            .body(|body| {
                body.rows(layout::ROW_HEIGHT, entries.len(), |mut row| {
                    let idx = row.index();
                    let entry = &entries[idx];
                    let marked = listing.is_marked(&entry.path);
                    row.set_selected(active && listing.cursor() == Some(idx));

                    let color = if marked {
                        palette.marked
                    } else if entry.is_dir {
                        palette.directory
                    } else {
                        palette.text
                    };

                    row.col(|ui| {
                        ui.label(entry.icon());
                    });
                    row.col(|ui| {
                        layout::truncated_label_with_sense(
                            ui,
                            egui::RichText::new(entry.display_name()).color(color),
                            egui::Sense::hover(),
                        );
                    });
                    row.col(|ui| {
                        ui.label(entry.size_label());
                    });
                    row.col(|ui| {
                        ui.label(entry.modified_label());
                    });

                    let response = row.response();
                    if response.clicked() {
                        let mut clicks = clicks.borrow_mut();
                        clicks.pane = Some(pane);
                        clicks.row = Some((pane, idx));
                    }
                    if response.double_clicked() {
                        clicks.borrow_mut().open = Some(pane);
                    }
                });
            });
    }
}
