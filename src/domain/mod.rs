//! Domain layer - Tag extraction, filtering and aggregation

pub mod file_tags;
pub mod tags;

pub use file_tags::FileTags;
