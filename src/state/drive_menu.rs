// Drive menu - mount roots offered in Drive mode
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Drive {
    pub label: String,
    pub path: PathBuf,
}

impl Drive {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DriveMenu {
    drives: Vec<Drive>,
    cursor: usize,
}

impl DriveMenu {
    pub fn set_drives(&mut self, drives: Vec<Drive>) {
        self.drives = drives;
        self.cursor = self.cursor.min(self.drives.len().saturating_sub(1));
    }

    pub fn drives(&self) -> &[Drive] {
        &self.drives
    }

    pub fn is_empty(&self) -> bool {
        self.drives.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    pub fn move_down(&mut self) {
        if !self.drives.is_empty() {
            self.cursor = (self.cursor + 1) % self.drives.len();
        }
    }

    pub fn move_up(&mut self) {
        if !self.drives.is_empty() {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(self.drives.len() - 1);
        }
    }

    pub fn highlighted(&self) -> Option<&Drive> {
        self.drives.get(self.cursor)
    }

    /// Drive for a 1-based number key.
    pub fn by_number(&self, number: u32) -> Option<&Drive> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.drives.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> DriveMenu {
        let mut menu = DriveMenu::default();
        menu.set_drives(vec![
            Drive::new("/", "/"),
            Drive::new("home", "/home/user"),
            Drive::new("usb", "/media/usb"),
        ]);
        menu
    }

    #[test]
    fn cursor_wraps() {
        let mut menu = menu();
        menu.move_up();
        assert_eq!(menu.cursor(), 2);
        menu.move_down();
        assert_eq!(menu.cursor(), 0);
    }

    #[test]
    fn number_keys_are_one_based() {
        let menu = menu();
        assert_eq!(menu.by_number(1).map(|d| d.label.as_str()), Some("/"));
        assert_eq!(menu.by_number(3).map(|d| d.label.as_str()), Some("usb"));
        assert!(menu.by_number(0).is_none());
        assert!(menu.by_number(4).is_none());
    }

    #[test]
    fn shrinking_list_clamps_cursor() {
        let mut menu = menu();
        menu.move_up();
        menu.set_drives(vec![Drive::new("/", "/")]);
        assert_eq!(menu.cursor(), 0);
        menu.set_drives(Vec::new());
        assert!(menu.highlighted().is_none());
        menu.move_down();
        assert_eq!(menu.cursor(), 0);
    }
}
