use crate::error::ConfigError;
use crate::style::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub ui: UiConfig,
    pub bookmarks: Vec<Bookmark>,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark", "light" or "system"
    pub mode: String,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Show hidden files by default
    pub show_hidden: bool,
    /// Bookmark bar visibility, toggled with `B` or `:bookmarks`
    pub bookmark_bar: bool,
    /// How long toasts stay on screen (in milliseconds)
    pub toast_ttl_ms: u64,
}

/// A named directory shown on the bookmark bar
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Bookmark {
    pub name: String,
    pub path: PathBuf,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: "dark".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            bookmark_bar: true,
            toast_ttl_ms: crate::layout::TOAST_TTL_MS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig::default(),
            ui: UiConfig::default(),
            bookmarks: default_bookmarks(),
        }
    }
}

fn default_bookmarks() -> Vec<Bookmark> {
    let Some(user_dirs) = directories::UserDirs::new() else {
        return Vec::new();
    };
    let mut bookmarks = vec![Bookmark {
        name: "Home".to_string(),
        path: user_dirs.home_dir().to_path_buf(),
    }];
    let extra = [
        ("Desktop", user_dirs.desktop_dir()),
        ("Documents", user_dirs.document_dir()),
        ("Downloads", user_dirs.download_dir()),
    ];
    for (name, dir) in extra {
        if let Some(dir) = dir {
            bookmarks.push(Bookmark {
                name: name.to_string(),
                path: dir.to_path_buf(),
            });
        }
    }
    bookmarks
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "twincmd")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from `path` (or the default location), falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::config_path) else {
            tracing::warn!("no config directory, using default configuration");
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to `path`, or the default location
    pub fn save(&self, path: Option<&Path>) -> Result<(), ConfigError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(Self::config_path)
            .ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)?;
        Ok(())
    }

    /// `None` when the theme follows the system appearance.
    pub fn fixed_theme(&self) -> Option<Theme> {
        Theme::parse(&self.theme.mode)
    }

    pub fn follows_system_theme(&self) -> bool {
        self.theme.mode.eq_ignore_ascii_case("system")
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.ui.toast_ttl_ms)
    }

    /// Adds or replaces the bookmark called `name`.
    pub fn add_bookmark(&mut self, name: String, path: PathBuf) {
        match self.bookmarks.iter_mut().find(|b| b.name == name) {
            Some(existing) => existing.path = path,
            None => self.bookmarks.push(Bookmark { name, path }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.fixed_theme(), Some(Theme::Dark));
        assert!(config.ui.bookmark_bar);
        assert_eq!(config.toast_ttl(), Duration::from_millis(2000));
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.ui.bookmark_bar = false;
        config.theme.mode = "light".to_string();
        config.add_bookmark("src".into(), PathBuf::from("/tmp/src"));
        config.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, config);
        assert!(!loaded.ui.bookmark_bar);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\nbookmark_bar = false\n").expect("write");

        let loaded = Config::load_from(&path).expect("load");
        assert!(!loaded.ui.bookmark_bar);
        assert_eq!(loaded.ui.toast_ttl_ms, 2000);
        assert_eq!(loaded.theme.mode, "dark");
    }

    #[test]
    fn test_broken_file_falls_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "ui = [not toml").expect("write");

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
        let config = Config::load(Some(&path));
        assert_eq!(config.theme, ThemeConfig::default());
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_system_theme_mode() {
        let mut config = Config::default();
        config.theme.mode = "System".to_string();
        assert!(config.follows_system_theme());
        assert_eq!(config.fixed_theme(), None);
    }

    #[test]
    fn test_add_bookmark_replaces_by_name() {
        let mut config = Config::default();
        config.bookmarks.clear();
        config.add_bookmark("w".into(), PathBuf::from("/a"));
        config.add_bookmark("w".into(), PathBuf::from("/b"));
        assert_eq!(config.bookmarks.len(), 1);
        assert_eq!(config.bookmarks[0].path, PathBuf::from("/b"));
    }
}
