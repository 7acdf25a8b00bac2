//! Resolved settings for one invocation
//!
//! Command-line flags and the config file are merged once, up front, into a
//! [`RunConfig`] that is passed down by reference.

use crate::domain::tags::{FilterMode, KeywordQuery, SortMode};
use crate::infrastructure::{Config, EmptyQueryAction};
use std::path::PathBuf;

/// What an invocation produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Files matching the query
    Files,
    /// Tags of the files matching the query
    List,
    /// Tags of the matching files, each followed by its files
    Summarise,
    /// Files without any tag
    Untagged,
    /// Near-duplicate tags among the matching files
    Similar,
}

/// Separator used for flat tag listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputShape {
    /// `a, b, c`
    #[default]
    Compact,
    /// One tag per line
    Long,
}

/// Presentation flags as given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunFlags {
    pub keywords: Vec<String>,
    pub not: Vec<String>,
    pub list: bool,
    pub long: bool,
    pub numeric: bool,
    pub summarise: bool,
    pub or_filter: bool,
    pub untagged: bool,
    pub similar_tags: bool,
    pub vim: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub query: KeywordQuery,
    pub action: Action,
    pub sort: SortMode,
    pub shape: OutputShape,
    /// Append `- N` file counts to flat tag listings
    pub numeric: bool,
    /// Quickfix-style `path:1:` lines for file and untagged listings
    pub vim: bool,
    /// Print the untagged-file count before the listing
    pub untagged_hint: bool,
}

impl RunConfig {
    /// Merge flags with file configuration.
    ///
    /// Action precedence: untagged, similar tags, summarise, any listing
    /// flag, then files when keywords are present. Without keywords the
    /// configured `empty_query` action applies.
    pub fn resolve(root: PathBuf, flags: RunFlags, config: &Config) -> Self {
        let mode = if flags.or_filter {
            FilterMode::Any
        } else {
            FilterMode::All
        };
        let query = KeywordQuery::new(flags.keywords, mode).with_excluded(&flags.not);

        let defaulted = query.is_empty()
            && !(flags.untagged
                || flags.similar_tags
                || flags.summarise
                || flags.list
                || flags.long
                || flags.numeric);

        let action = if flags.untagged {
            Action::Untagged
        } else if flags.similar_tags {
            Action::Similar
        } else if flags.summarise {
            Action::Summarise
        } else if flags.list || flags.long || flags.numeric {
            Action::List
        } else if !query.is_empty() {
            Action::Files
        } else {
            match config.empty_query {
                EmptyQueryAction::List => Action::List,
                EmptyQueryAction::Files => Action::Files,
            }
        };

        let sort = if flags.numeric {
            SortMode::Frequency
        } else {
            config.sort.into()
        };

        let shape = if flags.long {
            OutputShape::Long
        } else {
            OutputShape::Compact
        };

        RunConfig {
            root,
            extensions: config.extensions.clone(),
            query,
            action,
            sort,
            shape,
            numeric: flags.numeric,
            vim: flags.vim,
            untagged_hint: defaulted && action == Action::List && config.untagged_hint,
        }
    }
}
