//! Scan use case
//!
//! Reads every candidate file and extracts its tags. Extraction runs in
//! parallel; results are sorted by path before anything downstream sees them.

use crate::domain::tags::TagParser;
use crate::domain::FileTags;
use crate::error::Result;
use crate::infrastructure::FileRepository;
use rayon::prelude::*;

/// A file that could not be read during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableFile {
    pub path: String,
    pub message: String,
}

/// Tags for every scanned file, in path order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub files: Vec<FileTags>,
    pub unreadable: Vec<UnreadableFile>,
}

impl ScanReport {
    /// Assemble a report, sorting files by path
    pub fn new(mut files: Vec<FileTags>, unreadable: Vec<UnreadableFile>) -> Self {
        files.sort_by(|a, b| a.path.cmp(&b.path));
        ScanReport { files, unreadable }
    }
}

/// Service for extracting tags from all files under a repository
pub struct ScanService<R: FileRepository> {
    repository: R,
}

impl<R: FileRepository + Sync> ScanService<R> {
    /// Create a new scan service.
    pub fn new(repository: R) -> Self {
        ScanService { repository }
    }

    /// List files with the given extensions and extract their tags.
    ///
    /// An unreadable file contributes an empty tag set and is recorded in
    /// [`ScanReport::unreadable`]; it never fails the scan.
    pub fn execute(&self, extensions: &[String]) -> Result<ScanReport> {
        let paths = self.repository.list_files(extensions)?;

        let results: Vec<(FileTags, Option<UnreadableFile>)> = paths
            .par_iter()
            .map(|path| {
                let shown = self.repository.display_path(path);
                match self.repository.read_file(path) {
                    Ok(content) => (FileTags::new(shown, TagParser::extract(&content)), None),
                    Err(e) => {
                        tracing::warn!("{}: {}", shown, e);
                        let unreadable = UnreadableFile {
                            path: shown.clone(),
                            message: e.to_string(),
                        };
                        (FileTags::new(shown, Default::default()), Some(unreadable))
                    }
                }
            })
            .collect();

        let mut files = Vec::with_capacity(results.len());
        let mut unreadable = Vec::new();
        for (file, failure) in results {
            files.push(file);
            unreadable.extend(failure);
        }

        tracing::debug!(
            files = files.len(),
            unreadable = unreadable.len(),
            "scan complete"
        );
        Ok(ScanReport::new(files, unreadable))
    }
}
