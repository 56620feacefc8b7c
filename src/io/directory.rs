use crate::entry::FileEntry;
use std::fs;
use std::path::Path;

/// Lists `path`, directories first, then case-insensitive by name.
pub fn read_directory(path: &Path, show_hidden: bool) -> Result<Vec<FileEntry>, std::io::Error> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path)?.flatten() {
        if let Some(file_entry) = FileEntry::from_path(entry.path()) {
            if show_hidden || !file_entry.is_hidden() {
                entries.push(file_entry);
            }
        }
    }
    entries.sort_by(|a, b| {
        if a.is_dir != b.is_dir {
            return b.is_dir.cmp(&a.is_dir);
        }
        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    });
    Ok(entries)
}

/// Subsequence match ignoring ASCII case: "nts" matches "notes.txt".
pub fn fuzzy_match(text: &str, query: &str) -> bool {
    let mut q_chars = query.chars();
    let mut q_char = match q_chars.next() {
        Some(c) => c,
        None => return true,
    };
    for t_char in text.chars() {
        if t_char.eq_ignore_ascii_case(&q_char) {
            q_char = match q_chars.next() {
                Some(c) => c,
                None => return true,
            };
        }
    }
    false
}
