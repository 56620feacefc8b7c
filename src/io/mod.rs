mod directory;
mod drives;
pub mod worker;

pub use directory::fuzzy_match;
pub use drives::list_drives;
