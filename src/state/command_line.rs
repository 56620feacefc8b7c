// Command line buffer - text typed in Command, Filter and AI modes
use crate::error::BufferEditInvalid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine {
    prefix: char,
    text: String,
}

impl CommandLine {
    pub fn new(prefix: char) -> Self {
        Self {
            prefix,
            text: String::new(),
        }
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Removes the last character. Fails without touching the buffer when it is empty.
    pub fn backspace(&mut self) -> Result<char, BufferEditInvalid> {
        self.text.pop().ok_or(BufferEditInvalid)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Prompt plus typed text, as shown in the status line.
    pub fn display(&self) -> String {
        format!("{}{}", self.prefix, self.text)
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_prefix() {
        let mut line = CommandLine::new(':');
        assert_eq!(line.display(), ":");
        for c in "foo".chars() {
            line.push(c);
        }
        assert_eq!(line.display(), ":foo");
        assert_eq!(line.text(), "foo");
    }

    #[test]
    fn backspace_handles_multibyte_chars() {
        let mut line = CommandLine::new('/');
        line.push('é');
        line.push('ü');
        assert_eq!(line.backspace(), Ok('ü'));
        assert_eq!(line.text(), "é");
    }

    #[test]
    fn backspace_on_empty_is_rejected() {
        let mut line = CommandLine::new(':');
        assert_eq!(line.backspace(), Err(BufferEditInvalid));
        assert!(line.is_empty());
        assert_eq!(line.display(), ":");
    }
}
