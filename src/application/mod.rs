//! Application layer - Use cases and orchestration

pub mod run_config;
pub mod scan;
pub mod search;

pub use run_config::{Action, OutputShape, RunConfig, RunFlags};
pub use scan::{ScanReport, ScanService, UnreadableFile};
pub use search::{SearchOutcome, SearchService};
