// Status bar, command line and toast overlay
use crate::app::TwinCmd;
use eframe::egui;

impl TwinCmd {
    pub(crate) fn render_status_bar(&self, ctx: &egui::Context) {
        let palette = self.view.theme.palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::side_top_panel(&ctx.style()).fill(palette.status_bar))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let mode_color = palette.mode_color(self.view.mode);
                    ui.push_id("mode_indicator", |ui| {
                        ui.label(
                            egui::RichText::new(format!(" {} ", self.view.mode_label))
                                .monospace()
                                .strong()
                                .color(palette.background)
                                .background_color(mode_color),
                        );
                    });

                    let status = match &self.view.command_line {
                        Some(line) => line.clone(),
                        None => self.normal_status(),
                    };
                    ui.push_id("status_text", |ui| {
                        ui.label(egui::RichText::new(status).monospace());
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.view.window_maximized {
                            ui.label(egui::RichText::new("[max]").small());
                        }
                        ui.label(
                            egui::RichText::new(self.view.active_pane.name())
                                .small()
                                .color(palette.header_active),
                        );
                    });
                });
            });
    }

    fn normal_status(&self) -> String {
        if let Some(pane) = self.view.visual_pane {
            let marked = self.pane(pane).marked_count();
            return format!("{} selected in {} pane", marked, pane.name());
        }
        self.pane(self.view.active_pane)
            .selected_entry()
            .map(|e| e.path.display().to_string())
            .unwrap_or_default()
    }

    pub(crate) fn render_toast(&self, ctx: &egui::Context) {
        let Some(toast) = &self.view.toast else {
            return;
        };
        let color = self.view.theme.palette().toast_color(toast.kind);
        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -36.0])
            .order(egui::Order::Tooltip)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(1.0, color))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&toast.message).color(color));
                    });
            });
    }
}
