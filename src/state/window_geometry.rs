// Window geometry - maximize/restore with the pre-maximize frame remembered in memory

/// Window rectangle in logical points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[cfg(test)]
    pub fn approx_eq(&self, other: &Frame, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

#[derive(Clone, Debug, Default)]
pub struct WindowGeometry {
    maximized: bool,
    saved_frame: Option<Frame>,
}

impl WindowGeometry {
    /// Returns the frame the window should take next.
    pub fn toggle_maximize(&mut self, current: Frame, maximized: Frame) -> Frame {
        match self.saved_frame.take() {
            Some(saved) if self.maximized => {
                self.maximized = false;
                saved
            }
            _ => {
                self.saved_frame = Some(current);
                self.maximized = true;
                maximized
            }
        }
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    #[cfg(test)]
    pub fn saved_frame(&self) -> Option<Frame> {
        self.saved_frame
    }
}
