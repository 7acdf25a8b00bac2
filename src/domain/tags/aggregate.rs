//! Tag listing and ordering

use crate::domain::tags::TagIndex;

/// Ordering applied to a tag listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Ascending by tag name
    #[default]
    Alpha,
    /// Descending by number of files, ties in first-encounter order
    Frequency,
}

/// One line of a tag listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub tag: String,
    pub count: usize,
    /// Files carrying the tag, present only for grouped listings
    pub files: Option<Vec<String>>,
}

pub struct TagAggregator;

impl TagAggregator {
    /// Produce an ordered listing from an index.
    ///
    /// Both orderings are stable sorts over the index's first-encounter
    /// order, so equal keys never shuffle between runs.
    pub fn aggregate(index: &TagIndex, sort: SortMode, grouped: bool) -> Vec<TagSummary> {
        let mut summaries: Vec<TagSummary> = index
            .iter()
            .map(|(tag, files)| TagSummary {
                tag: tag.to_string(),
                count: files.len(),
                files: grouped.then(|| files.to_vec()),
            })
            .collect();

        match sort {
            SortMode::Alpha => summaries.sort_by(|a, b| a.tag.cmp(&b.tag)),
            SortMode::Frequency => summaries.sort_by(|a, b| b.count.cmp(&a.count)),
        }

        summaries
    }
}
