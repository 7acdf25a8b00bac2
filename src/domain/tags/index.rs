//! Inverted tag → files index

use crate::domain::FileTags;
use std::collections::HashMap;

/// Mapping from tag to the files carrying it.
///
/// Iteration follows the order in which tags were first encountered while
/// building, so consumers that need a presentation order sort explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    entries: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl TagIndex {
    /// Build the index from files, in the order given
    pub fn build<'a, I>(files: I) -> Self
    where
        I: IntoIterator<Item = &'a FileTags>,
    {
        let mut index = TagIndex::default();
        for file in files {
            for tag in &file.tags {
                index.insert(tag, &file.path);
            }
        }
        index
    }

    fn insert(&mut self, tag: &str, path: &str) {
        match self.positions.get(tag) {
            Some(&pos) => self.entries[pos].1.push(path.to_string()),
            None => {
                self.positions.insert(tag.to_string(), self.entries.len());
                self.entries.push((tag.to_string(), vec![path.to_string()]));
            }
        }
    }

    /// Iterate `(tag, files)` in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(tag, files)| (tag.as_str(), files.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tags::TagSet;

    fn file(path: &str, tags: &[&str]) -> FileTags {
        FileTags::new(path, tags.iter().map(|t| t.to_string()).collect::<TagSet>())
    }

    #[test]
    fn test_build_inverts_files() {
        let files = vec![
            file("a.md", &["alpha", "beta"]),
            file("b.md", &["alpha"]),
            file("c.md", &[]),
        ];
        let index = TagIndex::build(&files);

        let entries: Vec<(&str, &[String])> = index.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("alpha", &["a.md".to_string(), "b.md".to_string()][..]));
        assert_eq!(entries[1], ("beta", &["a.md".to_string()][..]));
        assert!(!index.positions.contains_key("gamma"));
    }

    #[test]
    fn test_iteration_follows_first_encounter() {
        let files = vec![file("a.md", &["zeta"]), file("b.md", &["alpha", "zeta"])];
        let index = TagIndex::build(&files);

        let order: Vec<&str> = index.iter().map(|(tag, _)| tag).collect();
        assert_eq!(order, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_empty_index() {
        let index = TagIndex::build(&Vec::<FileTags>::new());
        assert_eq!(index.iter().count(), 0);
        assert_eq!(index, TagIndex::default());
    }
}
