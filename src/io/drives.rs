use crate::state::Drive;
use std::fs;
use std::path::{Path, PathBuf};

/// Roots offered by the Drive menu: filesystem root(s), home, and mounted volumes.
pub fn list_drives() -> Vec<Drive> {
    let mut drives = Vec::new();

    #[cfg(windows)]
    for letter in b'A'..=b'Z' {
        let root = PathBuf::from(format!("{}:\\", letter as char));
        if root.exists() {
            drives.push(Drive::new(format!("{}:", letter as char), root));
        }
    }

    #[cfg(not(windows))]
    drives.push(Drive::new("/", "/"));

    if let Some(user_dirs) = directories::UserDirs::new() {
        drives.push(Drive::new("~", user_dirs.home_dir()));
    }

    for mount_root in ["/Volumes", "/media", "/mnt", "/run/media"] {
        drives.extend(mounted_under(Path::new(mount_root)));
    }

    drives.dedup_by(|a, b| a.path == b.path);
    drives
}

fn mounted_under(root: &Path) -> Vec<Drive> {
    let Ok(read_dir) = fs::read_dir(root) else {
        return Vec::new();
    };
    let mut found: Vec<PathBuf> = read_dir
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    found.sort();

    let mut drives = Vec::new();
    for path in found {
        // /media/<user>/<volume> on most Linux desktops
        let nested: Vec<PathBuf> = fs::read_dir(&path)
            .map(|rd| rd.flatten().map(|e| e.path()).filter(|p| p.is_dir()).collect())
            .unwrap_or_default();
        let is_user_dir = root != Path::new("/Volumes") && root != Path::new("/mnt");
        if is_user_dir && !nested.is_empty() {
            drives.extend(nested.into_iter().map(drive_for));
        } else {
            drives.push(drive_for(path));
        }
    }
    drives
}

fn drive_for(path: PathBuf) -> Drive {
    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    Drive::new(label, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_offers_a_root() {
        let drives = list_drives();
        assert!(!drives.is_empty());
    }

    #[test]
    fn mount_points_are_listed_by_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("usb")).expect("mkdir");
        fs::create_dir(dir.path().join("backup")).expect("mkdir");
        fs::write(dir.path().join("not-a-mount"), b"").expect("write");

        let labels: Vec<_> = mounted_under(dir.path())
            .into_iter()
            .map(|d| d.label)
            .collect();
        assert_eq!(labels, vec!["backup", "usb"]);
    }

    #[test]
    fn missing_mount_root_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(mounted_under(&dir.path().join("nothing")).is_empty());
    }
}
