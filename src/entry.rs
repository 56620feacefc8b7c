use chrono::{DateTime, Local};
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// One row of a pane listing.
#[derive(Clone, Debug)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub size: u64,
    pub modified: SystemTime,
}

impl FileEntry {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let symlink_meta = fs::symlink_metadata(&path).ok()?;
        let name = path.file_name()?.to_string_lossy().to_string();

        // Follow links for the target's kind and size; a dangling link keeps its own metadata.
        let metadata = fs::metadata(&path).ok();
        let is_dir = metadata.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let size = metadata.as_ref().map(|m| m.len()).unwrap_or(0);
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .or_else(|| symlink_meta.modified().ok())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        Some(Self {
            path,
            name,
            is_dir,
            is_symlink: symlink_meta.is_symlink(),
            size,
            modified,
        })
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    pub fn icon(&self) -> &'static str {
        if self.is_dir {
            "📁"
        } else if self.is_symlink {
            "🔗"
        } else {
            "📄"
        }
    }

    pub fn display_name(&self) -> String {
        if self.is_dir {
            format!("/{}", self.name)
        } else if self.is_symlink {
            format!("{} \u{2192}", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Commander style: directories show a marker instead of a byte count.
    pub fn size_label(&self) -> String {
        if self.is_dir {
            "<DIR>".to_string()
        } else {
            bytesize::ByteSize(self.size).to_string()
        }
    }

    pub fn modified_label(&self) -> String {
        let datetime: DateTime<Local> = self.modified.into();
        datetime.format("%Y-%m-%d %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_file_metadata() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"hello").expect("write");

        let entry = FileEntry::from_path(path).expect("entry");
        assert_eq!(entry.name, "notes.txt");
        assert!(!entry.is_dir);
        assert_eq!(entry.size, 5);
        assert_eq!(entry.display_name(), "notes.txt");
        assert!(!entry.is_hidden());
    }

    #[test]
    fn directories_are_marked() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sub = dir.path().join(".config");
        fs::create_dir(&sub).expect("mkdir");

        let entry = FileEntry::from_path(sub).expect("entry");
        assert!(entry.is_dir);
        assert!(entry.is_hidden());
        assert_eq!(entry.display_name(), "/.config");
        assert_eq!(entry.size_label(), "<DIR>");
    }

    #[test]
    fn missing_path_yields_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(FileEntry::from_path(dir.path().join("nope")).is_none());
    }
}
