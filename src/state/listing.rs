// Pane listing - entries, cursor, filter and marks for one pane
use crate::engine::{Motion, PaneAction};
use crate::entry::FileEntry;
use crate::io::fuzzy_match;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Where a pane action wants to go next; carried out by the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Enter(PathBuf),
    Up { parent: PathBuf, from: PathBuf },
    OpenFile(PathBuf),
}

pub struct PaneListing {
    pub path: PathBuf,
    // Directory requested from the worker and not yet answered
    pending: Option<PathBuf>,
    all_entries: Vec<FileEntry>,
    visible_entries: Vec<FileEntry>,
    cursor: Option<usize>,
    marked: HashSet<PathBuf>,
    anchor: Option<usize>,
    filter: Option<String>,
}

impl PaneListing {
    pub fn new(path: PathBuf) -> Self {
        Self {
            pending: Some(path.clone()),
            path,
            all_entries: Vec::new(),
            visible_entries: Vec::new(),
            cursor: None,
            marked: HashSet::new(),
            anchor: None,
            filter: None,
        }
    }

    /// Installs a fresh listing. A new directory drops marks and the filter.
    pub fn set_entries(&mut self, path: PathBuf, entries: Vec<FileEntry>, select: Option<&Path>) {
        let previous = self.selected_entry().map(|e| e.path.clone());
        if path != self.path {
            self.marked.clear();
            self.anchor = None;
            self.filter = None;
        }
        self.path = path;
        self.all_entries = entries;
        self.pending = None;
        self.refresh_visible();
        // A reload may shrink the listing under an open visual range.
        self.anchor = self
            .anchor
            .and_then(|a| self.visible_entries.len().checked_sub(1).map(|max| a.min(max)));

        let wanted = select.map(Path::to_path_buf).or(previous);
        self.cursor = match wanted.and_then(|p| self.position_of(&p)) {
            Some(idx) => Some(idx),
            None if self.visible_entries.is_empty() => None,
            None => Some(0),
        };
    }

    /// Records a directory request; only the latest one is awaited.
    pub fn begin_load(&mut self, path: PathBuf) {
        self.pending = Some(path);
    }

    pub fn cancel_load(&mut self) {
        self.pending = None;
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn awaits(&self, path: &Path) -> bool {
        self.pending.as_deref() == Some(path)
    }

    pub fn set_filter(&mut self, query: Option<String>) {
        self.filter = query;
        self.anchor = None;
        self.refresh_visible();
        self.cursor = if self.visible_entries.is_empty() {
            None
        } else {
            Some(0)
        };
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn visible_entries(&self) -> &[FileEntry] {
        &self.visible_entries
    }

    pub fn total_entries(&self) -> usize {
        self.all_entries.len()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn set_cursor(&mut self, idx: usize) {
        if idx < self.visible_entries.len() {
            self.cursor = Some(idx);
        }
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.cursor.and_then(|idx| self.visible_entries.get(idx))
    }

    pub fn is_marked(&self, path: &Path) -> bool {
        self.marked.contains(path)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Marked entries in listing order, or the entry under the cursor when nothing is marked.
    pub fn selected_paths(&self) -> Vec<PathBuf> {
        if self.marked.is_empty() {
            return self.selected_entry().map(|e| e.path.clone()).into_iter().collect();
        }
        self.all_entries
            .iter()
            .filter(|e| self.marked.contains(&e.path))
            .map(|e| e.path.clone())
            .collect()
    }

    pub fn apply(&mut self, action: PaneAction) -> Option<Navigation> {
        match action {
            PaneAction::Move { motion, extend } => {
                self.move_cursor(motion);
                if extend {
                    self.mark_range();
                }
                None
            }
            PaneAction::Parent => {
                let parent = self.path.parent()?.to_path_buf();
                Some(Navigation::Up {
                    parent,
                    from: self.path.clone(),
                })
            }
            PaneAction::Open => {
                let entry = self.selected_entry()?;
                Some(if entry.is_dir {
                    Navigation::Enter(entry.path.clone())
                } else {
                    Navigation::OpenFile(entry.path.clone())
                })
            }
            PaneAction::StartSelection => {
                self.anchor = self.cursor;
                self.mark_range();
                None
            }
            PaneAction::ToggleMark => {
                if let Some(path) = self.selected_entry().map(|e| e.path.clone()) {
                    if !self.marked.remove(&path) {
                        self.marked.insert(path);
                    }
                }
                None
            }
            PaneAction::ClearSelection => {
                self.anchor = None;
                self.marked.clear();
                None
            }
        }
    }

    fn move_cursor(&mut self, motion: Motion) {
        let Some(max_idx) = self.visible_entries.len().checked_sub(1) else {
            return;
        };
        let current = self.cursor.unwrap_or(0);
        self.cursor = Some(match motion {
            Motion::Down => (current + 1).min(max_idx),
            Motion::Up => current.saturating_sub(1),
            Motion::Top => 0,
            Motion::Bottom => max_idx,
        });
    }

    fn mark_range(&mut self) {
        let (Some(anchor), Some(cursor)) = (self.anchor, self.cursor) else {
            return;
        };
        let (start, end) = if anchor <= cursor {
            (anchor, cursor)
        } else {
            (cursor, anchor)
        };
        let Some(range) = self.visible_entries.get(start..=end) else {
            return;
        };
        self.marked = range.iter().map(|e| e.path.clone()).collect();
    }

    fn refresh_visible(&mut self) {
        self.visible_entries = match self.filter.as_deref() {
            Some(query) => self
                .all_entries
                .iter()
                .filter(|e| fuzzy_match(&e.name, query))
                .cloned()
                .collect(),
            None => self.all_entries.clone(),
        };
    }

    fn position_of(&self, path: &Path) -> Option<usize> {
        self.visible_entries.iter().position(|e| e.path == path)
    }
}
