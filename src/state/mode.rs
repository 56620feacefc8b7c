// Interaction modes and their key-entry bindings

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Normal,
    Visual,
    Command,
    Filter,
    Drive,
    Ai,
}

impl Mode {
    #[cfg(test)]
    pub const ALL: [Mode; 6] = [
        Mode::Normal,
        Mode::Visual,
        Mode::Command,
        Mode::Filter,
        Mode::Drive,
        Mode::Ai,
    ];

    /// Text shown in the mode indicator.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Visual => "VISUAL",
            Mode::Command => "COMMAND",
            Mode::Filter => "FILTER",
            Mode::Drive => "DRIVE",
            Mode::Ai => "AI",
        }
    }

    /// Prompt character for modes that edit a command line.
    pub fn prompt_prefix(self) -> Option<char> {
        match self {
            Mode::Command => Some(':'),
            Mode::Filter => Some('/'),
            Mode::Ai => Some('>'),
            Mode::Normal | Mode::Visual | Mode::Drive => None,
        }
    }

    /// Mode entered from Normal by pressing `c`.
    pub fn from_entry_key(c: char) -> Option<Mode> {
        match c {
            ':' => Some(Mode::Command),
            '/' => Some(Mode::Filter),
            'v' => Some(Mode::Visual),
            'd' => Some(Mode::Drive),
            'a' => Some(Mode::Ai),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_uppercase_names() {
        for mode in Mode::ALL {
            let label = mode.label();
            assert_eq!(label, label.to_uppercase());
            assert_eq!(label.to_lowercase(), format!("{:?}", mode).to_lowercase());
        }
    }

    #[test]
    fn only_text_modes_have_prefixes() {
        assert_eq!(Mode::Command.prompt_prefix(), Some(':'));
        assert_eq!(Mode::Filter.prompt_prefix(), Some('/'));
        assert_eq!(Mode::Ai.prompt_prefix(), Some('>'));
        assert_eq!(Mode::Visual.prompt_prefix(), None);
        assert_eq!(Mode::Drive.prompt_prefix(), None);
        assert_eq!(Mode::Normal.prompt_prefix(), None);
    }

    #[test]
    fn entry_keys_never_reenter_normal() {
        for c in [':', '/', 'v', 'd', 'a'] {
            assert_ne!(Mode::from_entry_key(c), Some(Mode::Normal));
            assert!(Mode::from_entry_key(c).is_some());
        }
        assert_eq!(Mode::from_entry_key('x'), None);
    }
}
