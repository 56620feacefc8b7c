use crate::app::{PendingClicks, TwinCmd};
use eframe::egui;
use std::cell::RefCell;

impl TwinCmd {
    pub(crate) fn render_bookmark_bar(&self, ctx: &egui::Context, clicks: &RefCell<PendingClicks>) {
        egui::TopBottomPanel::top("BookmarkBar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                if self.config.bookmarks.is_empty() {
                    ui.weak("No bookmarks. Add one with :mark <name>");
                }
                for bookmark in &self.config.bookmarks {
                    let response = ui
                        .button(format!("★ {}", bookmark.name))
                        .on_hover_text(bookmark.path.display().to_string());
                    if response.clicked() {
                        clicks.borrow_mut().bookmark = Some(bookmark.path.clone());
                    }
                }
            });
        });
    }
}
