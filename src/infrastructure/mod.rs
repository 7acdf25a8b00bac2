//! Infrastructure layer - External I/O and configuration

pub mod config;
pub mod repository;

pub use config::{Config, EmptyQueryAction, SortSetting, CONFIG_FILE};
pub use repository::{FileRepository, FileSystemRepository};
