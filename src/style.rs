use crate::state::{Mode, ToastKind};
use eframe::egui::{self, Color32};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Theme> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_system(theme: egui::Theme) -> Theme {
        match theme {
            egui::Theme::Light => Theme::Light,
            egui::Theme::Dark => Theme::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            // Classic commander blue
            Theme::Dark => Palette {
                background: Color32::from_rgb(0, 0, 96),
                header_active: Color32::from_rgb(0, 170, 170),
                header_inactive: Color32::from_rgb(40, 40, 120),
                text: Color32::from_rgb(220, 220, 220),
                directory: Color32::from_rgb(255, 255, 255),
                marked: Color32::from_rgb(255, 255, 85),
                status_bar: Color32::from_rgb(0, 128, 128),
                mode_normal: Color32::from_rgb(85, 170, 255),
                mode_visual: Color32::from_rgb(255, 170, 0),
                mode_command: Color32::from_rgb(85, 255, 85),
                mode_filter: Color32::from_rgb(255, 85, 255),
                mode_drive: Color32::from_rgb(255, 255, 85),
                mode_ai: Color32::from_rgb(170, 120, 255),
                toast_info: Color32::from_rgb(30, 90, 60),
                toast_error: Color32::from_rgb(150, 30, 30),
            },
            Theme::Light => Palette {
                background: Color32::from_rgb(245, 245, 240),
                header_active: Color32::from_rgb(0, 120, 180),
                header_inactive: Color32::from_rgb(190, 190, 200),
                text: Color32::from_rgb(30, 30, 30),
                directory: Color32::from_rgb(0, 60, 140),
                marked: Color32::from_rgb(190, 110, 0),
                status_bar: Color32::from_rgb(210, 225, 235),
                mode_normal: Color32::from_rgb(0, 100, 200),
                mode_visual: Color32::from_rgb(200, 110, 0),
                mode_command: Color32::from_rgb(0, 140, 60),
                mode_filter: Color32::from_rgb(170, 0, 170),
                mode_drive: Color32::from_rgb(150, 130, 0),
                mode_ai: Color32::from_rgb(110, 60, 200),
                toast_info: Color32::from_rgb(200, 235, 210),
                toast_error: Color32::from_rgb(245, 200, 200),
            },
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        let palette = self.palette();
        let mut visuals = match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        };
        visuals.panel_fill = palette.background;
        visuals.override_text_color = Some(palette.text);
        visuals
    }
}

/// Colours resolved once per theme.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: Color32,
    pub header_active: Color32,
    pub header_inactive: Color32,
    pub text: Color32,
    pub directory: Color32,
    pub marked: Color32,
    pub status_bar: Color32,
    pub mode_normal: Color32,
    pub mode_visual: Color32,
    pub mode_command: Color32,
    pub mode_filter: Color32,
    pub mode_drive: Color32,
    pub mode_ai: Color32,
    pub toast_info: Color32,
    pub toast_error: Color32,
}

impl Palette {
    pub fn mode_color(&self, mode: Mode) -> Color32 {
        match mode {
            Mode::Normal => self.mode_normal,
            Mode::Visual => self.mode_visual,
            Mode::Command => self.mode_command,
            Mode::Filter => self.mode_filter,
            Mode::Drive => self.mode_drive,
            Mode::Ai => self.mode_ai,
        }
    }

    pub fn toast_color(&self, kind: ToastKind) -> Color32 {
        match kind {
            ToastKind::Info => self.toast_info,
            ToastKind::Error => self.toast_error,
        }
    }
}
