//! Detection of near-duplicate tags

use std::fmt;

/// Why two tags were reported as similar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityKind {
    /// The tags only differ by trailing `s` characters (`@idea` / `@ideas`)
    Plural,
}

impl fmt::Display for SimilarityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityKind::Plural => write!(f, "PLURAL"),
        }
    }
}

/// A pair of tags that probably mean the same thing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarTags {
    pub kind: SimilarityKind,
    pub first: String,
    pub second: String,
}

impl fmt::Display for SimilarTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} & {}", self.kind, self.first, self.second)
    }
}

/// Find similar pairs among `tags`.
///
/// Tags are already lowercase, so only plural variants are detected. Each
/// pair is reported once, with `first < second`.
pub fn find_similar<'a, I>(tags: I) -> Vec<SimilarTags>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sorted: Vec<&str> = tags.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut similar = Vec::new();
    for (i, first) in sorted.iter().enumerate() {
        for second in &sorted[i + 1..] {
            if first.trim_end_matches('s') == second.trim_end_matches('s') {
                similar.push(SimilarTags {
                    kind: SimilarityKind::Plural,
                    first: first.to_string(),
                    second: second.to_string(),
                });
            }
        }
    }
    similar
}
