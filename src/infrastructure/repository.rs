//! File system access for the search root

use crate::error::{Result, TagsearchError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Source of files to scan
pub trait FileRepository {
    /// Root directory that display paths are relative to
    fn root(&self) -> &Path;

    /// All candidate files, sorted by path
    fn list_files(&self, extensions: &[String]) -> Result<Vec<PathBuf>>;

    /// Raw content of one file
    fn read_file(&self, path: &Path) -> std::io::Result<Vec<u8>>;

    /// Path as shown to the user: relative to root, `/`-separated
    fn display_path(&self, path: &Path) -> String {
        let rel = path.strip_prefix(self.root()).unwrap_or(path);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// File system implementation of FileRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Open a root directory, failing if it does not exist
    pub fn open(root: PathBuf) -> Result<Self> {
        if !root.is_dir() {
            return Err(TagsearchError::DirectoryNotFound(root));
        }
        Ok(FileSystemRepository::new(root))
    }

    fn has_extension(path: &Path, extensions: &[String]) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

impl FileRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list_files(&self, extensions: &[String]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping unreadable directory entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if Self::has_extension(entry.path(), extensions) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        tracing::debug!(count = files.len(), root = %self.root.display(), "listed files");
        Ok(files)
    }

    fn read_file(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        fs::read(path)
    }
}
