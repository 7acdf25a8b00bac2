//! Keyword filtering
//!
//! A keyword query is a flat list of terms. Plain terms are required, terms
//! prefixed with `!` are excluded. Excluded tags always veto a file; required
//! tags are combined with either ALL or ANY semantics.
//!
//! # Examples
//!
//! ```
//! use tagsearch::domain::tags::{FilterMode, KeywordQuery, TagFilter, TagParser};
//!
//! let query = KeywordQuery::new(["work", "!draft"], FilterMode::All);
//! let filter = TagFilter::compile(&query).unwrap();
//! assert!(filter.matches(&TagParser::extract_from_str("@work @urgent")));
//! assert!(!filter.matches(&TagParser::extract_from_str("@work @draft")));
//! ```

use crate::domain::tags::TagSet;
use crate::domain::FileTags;
use crate::error::{Result, TagsearchError};
use std::collections::BTreeSet;

/// How required terms combine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Every required tag must be present
    #[default]
    All,
    /// At least one required tag must be present
    Any,
}

/// Raw keyword query as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordQuery {
    pub terms: Vec<String>,
    pub mode: FilterMode,
}

impl KeywordQuery {
    pub fn new<I, S>(terms: I, mode: FilterMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KeywordQuery {
            terms: terms.into_iter().map(Into::into).collect(),
            mode,
        }
    }

    /// Add terms that are excluded without needing a `!` prefix
    pub fn with_excluded<I, S>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in excluded {
            let term = term.as_ref();
            // An already negated term stays negated once
            if term.starts_with('!') {
                self.terms.push(term.to_string());
            } else {
                self.terms.push(format!("!{}", term));
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A keyword query compiled into required and excluded tag sets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    required: BTreeSet<String>,
    excluded: BTreeSet<String>,
    mode: FilterMode,
}

impl TagFilter {
    /// Compile a query, normalizing terms the same way tags are extracted.
    ///
    /// Fails on terms that name no tag, such as `!` on its own.
    pub fn compile(query: &KeywordQuery) -> Result<Self> {
        let mut required = BTreeSet::new();
        let mut excluded = BTreeSet::new();

        for raw in &query.terms {
            let (negated, rest) = match raw.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, raw.as_str()),
            };
            // Accept the same spelling used in files
            let tag = rest.strip_prefix('@').unwrap_or(rest);
            if tag.is_empty() {
                return Err(TagsearchError::InvalidQuery(raw.clone()));
            }

            let tag = tag.to_lowercase();
            if negated {
                excluded.insert(tag);
            } else {
                required.insert(tag);
            }
        }

        Ok(TagFilter {
            required,
            excluded,
            mode: query.mode,
        })
    }

    /// Decide whether a file carrying `tags` satisfies the query.
    ///
    /// Any excluded tag rejects the file regardless of mode. With no
    /// required tags every remaining file matches.
    pub fn matches(&self, tags: &TagSet) -> bool {
        let mut matching = 0;
        for tag in tags {
            if self.excluded.contains(tag) {
                return false;
            }
            if self.required.contains(tag) {
                matching += 1;
            }
        }

        if self.required.is_empty() {
            return true;
        }

        match self.mode {
            FilterMode::Any => matching > 0,
            FilterMode::All => matching >= self.required.len(),
        }
    }

    /// Required tags that no file in `files` carries.
    ///
    /// Under ALL semantics any entry here guarantees zero matches.
    pub fn missing_required(&self, files: &[FileTags]) -> Vec<&str> {
        self.required
            .iter()
            .filter(|tag| !files.iter().any(|f| f.tags.contains(*tag)))
            .map(String::as_str)
            .collect()
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }
}
