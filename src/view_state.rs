// Render-agnostic snapshot of everything the UI shows
use crate::state::{Mode, Pane, ToastKind};
use crate::style::Theme;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub mode: Mode,
    pub mode_label: &'static str,
    /// Prompt plus typed text, only while a text mode is active.
    pub command_line: Option<String>,
    pub active_pane: Pane,
    /// "active"/"inactive" per pane, indexed by `Pane::index`.
    pub header_labels: [&'static str; 2],
    pub toast: Option<ToastView>,
    pub bookmark_bar_visible: bool,
    pub window_maximized: bool,
    pub drive_menu: Option<DriveMenuView>,
    /// Pane holding the selection, only while in Visual mode.
    pub visual_pane: Option<Pane>,
    pub theme: Theme,
}

impl ViewState {
    pub fn header_label(&self, pane: Pane) -> &'static str {
        self.header_labels[pane.index()]
    }

    #[cfg(test)]
    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().map(|t| t.message.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastView {
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriveMenuView {
    pub labels: Vec<String>,
    pub cursor: usize,
    pub target: Pane,
}
