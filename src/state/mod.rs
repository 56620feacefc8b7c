pub mod bookmark_bar;
pub mod command_line;
pub mod drive_menu;
pub mod listing;
pub mod mode;
pub mod pane_focus;
pub mod toast;
pub mod window_geometry;

pub use bookmark_bar::BookmarkBar;
pub use command_line::CommandLine;
pub use drive_menu::{Drive, DriveMenu};
pub use listing::{Navigation, PaneListing};
pub use mode::Mode;
pub use pane_focus::{Pane, PaneFocus};
pub use toast::{Clock, SystemClock, ToastKind, ToastScheduler};
pub use window_geometry::{Frame, WindowGeometry};

#[cfg(test)]
pub(crate) use toast::ManualClock;
