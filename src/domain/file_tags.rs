//! Per-file tag sets

use crate::domain::tags::TagSet;

/// The tags extracted from a single file.
///
/// `path` is the display identifier of the file (relative to the search
/// root, `/`-separated). A file with an empty tag set is "untagged".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTags {
    pub path: String,
    pub tags: TagSet,
}

impl FileTags {
    pub fn new(path: impl Into<String>, tags: TagSet) -> Self {
        FileTags {
            path: path.into(),
            tags,
        }
    }

    /// True when no tag was found in the file
    pub fn is_untagged(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged() {
        let file = FileTags::new("notes.md", TagSet::new());
        assert!(file.is_untagged());

        let tags: TagSet = ["work".to_string()].into_iter().collect();
        let file = FileTags::new("notes.md", tags);
        assert!(!file.is_untagged());
    }
}
