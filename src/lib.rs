//! tagsearch - search for, and summarise, tags in plaintext files
//!
//! Tags are written inline as `@word`. Files can be selected by a list of
//! required and `!`-excluded tags, combined with ALL or ANY semantics, and
//! the tag vocabulary can be listed with usage counts.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagsearchError;
