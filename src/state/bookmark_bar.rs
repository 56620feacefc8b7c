// Bookmark bar visibility

#[derive(Clone, Debug, Default)]
pub struct BookmarkBar {
    visible: bool,
}

impl BookmarkBar {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
