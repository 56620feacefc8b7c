// Pane focus - which of the two panes receives navigation
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pane {
    #[default]
    Left,
    Right,
}

impl Pane {
    pub const BOTH: [Pane; 2] = [Pane::Left, Pane::Right];

    pub fn other(self) -> Pane {
        match self {
            Pane::Left => Pane::Right,
            Pane::Right => Pane::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Pane::Left => 0,
            Pane::Right => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pane::Left => "left",
            Pane::Right => "right",
        }
    }

    pub fn parse(s: &str) -> Option<Pane> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Some(Pane::Left),
            "right" | "r" => Some(Pane::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PaneFocus {
    active: Pane,
}

impl PaneFocus {
    #[cfg(test)]
    pub fn new(active: Pane) -> Self {
        Self { active }
    }

    pub fn current(&self) -> Pane {
        self.active
    }

    /// Returns false when `pane` was already active.
    pub fn activate(&mut self, pane: Pane) -> bool {
        if self.active == pane {
            return false;
        }
        self.active = pane;
        true
    }

    pub fn toggle(&mut self) -> Pane {
        self.active = self.active.other();
        self.active
    }

    pub fn header_label(&self, pane: Pane) -> &'static str {
        if pane == self.active {
            "active"
        } else {
            "inactive"
        }
    }
}
