//! Tag system

pub mod aggregate;
pub mod filter;
pub mod index;
pub mod parser;
pub mod similar;

// Re-export main types
pub use aggregate::{SortMode, TagAggregator, TagSummary};
pub use filter::{FilterMode, KeywordQuery, TagFilter};
pub use index::TagIndex;
pub use parser::{TagParser, TagSet};
pub use similar::{find_similar, SimilarTags, SimilarityKind};
