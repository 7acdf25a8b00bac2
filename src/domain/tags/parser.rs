//! Tag extraction from plain text
//!
//! A tag is an `@` followed by one or more characters from `[a-zA-Z0-9_-]`.
//! The `@` must sit at the very start of the content or directly after a
//! whitespace character, so `me@example.com` does not produce a tag.

use regex::bytes::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// A file's tags: lowercase, deduplicated, iterated in sorted order
pub type TagSet = BTreeSet<String>;

/// Regex for matching tags: @word, @word-with-dashes, @word_with_underscores
fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?:^|\s)@([a-zA-Z0-9_-]+)").expect("tag pattern is a valid regex")
    })
}

pub struct TagParser;

impl TagParser {
    /// Extract the set of tags from raw file content.
    ///
    /// Content does not have to be valid UTF-8; captures are always ASCII.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagsearch::domain::tags::TagParser;
    ///
    /// let tags = TagParser::extract(b"@Work notes @urgent and @work again");
    /// assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["urgent", "work"]);
    /// ```
    pub fn extract(content: &[u8]) -> TagSet {
        tag_regex()
            .captures_iter(content)
            .map(|cap| String::from_utf8_lossy(&cap[1]).to_lowercase())
            .collect()
    }

    /// Extract tags from text that is already decoded
    pub fn extract_from_str(content: &str) -> TagSet {
        Self::extract(content.as_bytes())
    }
}
