// Layout constants for twincmd

use eframe::egui;

// --- Sizing ---
pub const ICON_COL_WIDTH: f32 = 30.0;
pub const SIZE_COL_WIDTH: f32 = 80.0;
pub const DATE_COL_WIDTH: f32 = 120.0;
pub const ROW_HEIGHT: f32 = 22.0;
pub const HEADER_HEIGHT: f32 = 20.0;
pub const PANE_GAP: f32 = 4.0;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 240.0;
pub const MODAL_MAX_WIDTH: f32 = 420.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.4;

// --- Timing ---
pub const TOAST_TTL_MS: u64 = 2000;

// --- Window ---
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1100.0, 680.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 400.0];

pub fn modal_width(ctx: &egui::Context) -> f32 {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(800.0)
    });
    (width * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

/// Render a label that truncates overflowing text with an ellipsis and uses the provided sense.
pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}
