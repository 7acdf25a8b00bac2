//! Search use case
//!
//! Compiles the keyword query once, scans the repository and produces the
//! result for the requested action.

use crate::application::run_config::{Action, RunConfig};
use crate::application::scan::{ScanReport, ScanService};
use crate::domain::tags::{
    find_similar, FilterMode, SimilarTags, SortMode, TagAggregator, TagFilter, TagIndex,
    TagSummary,
};
use crate::domain::FileTags;
use crate::error::Result;
use crate::infrastructure::FileRepository;

/// Result of one search, ready for presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Files(Vec<String>),
    Tags {
        summaries: Vec<TagSummary>,
        /// Number of untagged files, when the hint should be shown
        untagged_hint: Option<usize>,
    },
    Untagged(Vec<String>),
    Similar(Vec<SimilarTags>),
}

/// Files whose tags satisfy `filter`, in path order
pub fn matching_files<'a>(report: &'a ScanReport, filter: &TagFilter) -> Vec<&'a FileTags> {
    report
        .files
        .iter()
        .filter(|file| filter.matches(&file.tags))
        .collect()
}

/// Tag listing over the files matching `filter`
pub fn list_tags(
    report: &ScanReport,
    filter: &TagFilter,
    sort: SortMode,
    grouped: bool,
) -> Vec<TagSummary> {
    let index = TagIndex::build(matching_files(report, filter));
    TagAggregator::aggregate(&index, sort, grouped)
}

/// Paths of files without any tag
pub fn untagged_files(report: &ScanReport) -> Vec<&str> {
    report
        .files
        .iter()
        .filter(|file| file.is_untagged())
        .map(|file| file.path.as_str())
        .collect()
}

/// Near-duplicate tags among the files matching `filter`
pub fn similar_tags(report: &ScanReport, filter: &TagFilter) -> Vec<SimilarTags> {
    let index = TagIndex::build(matching_files(report, filter));
    find_similar(index.iter().map(|(tag, _)| tag))
}

/// Log required tags that no scanned file carries.
///
/// Under ALL semantics such a tag rules out every file; this is only
/// informational.
fn report_missing_required(report: &ScanReport, filter: &TagFilter) {
    if filter.mode() != FilterMode::All {
        return;
    }
    for tag in filter.missing_required(&report.files) {
        tracing::info!("no file is tagged @{}, so no file can match", tag);
    }
}

/// Service running a full search against a repository
pub struct SearchService<R: FileRepository> {
    scanner: ScanService<R>,
}

impl<R: FileRepository + Sync> SearchService<R> {
    /// Create a new search service.
    pub fn new(repository: R) -> Self {
        SearchService {
            scanner: ScanService::new(repository),
        }
    }

    /// Execute the search described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A query term is empty (e.g. a bare `!`)
    /// - The file list cannot be produced
    pub fn execute(&self, config: &RunConfig) -> Result<SearchOutcome> {
        // Compile before touching the disk so a bad query fails fast
        let filter = TagFilter::compile(&config.query)?;
        let report = self.scanner.execute(&config.extensions)?;

        report_missing_required(&report, &filter);

        let outcome = match config.action {
            Action::Files => SearchOutcome::Files(
                matching_files(&report, &filter)
                    .into_iter()
                    .map(|file| file.path.clone())
                    .collect(),
            ),
            Action::List | Action::Summarise => {
                let grouped = config.action == Action::Summarise;
                let untagged_hint = config
                    .untagged_hint
                    .then(|| untagged_files(&report).len())
                    .filter(|&count| count > 0);
                SearchOutcome::Tags {
                    summaries: list_tags(&report, &filter, config.sort, grouped),
                    untagged_hint,
                }
            }
            Action::Untagged => SearchOutcome::Untagged(
                untagged_files(&report)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            ),
            Action::Similar => SearchOutcome::Similar(similar_tags(&report, &filter)),
        };

        Ok(outcome)
    }
}
