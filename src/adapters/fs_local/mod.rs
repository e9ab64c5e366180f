// Local filesystem adapter - Input discovery and output directory handling

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use walkdir::WalkDir;

use crate::domain::errors::*;
use crate::domain::model::DirectoryListing;
use crate::ports::*;

/// Local filesystem adapter
#[derive(Debug, Default, Clone)]
pub struct FsLocalAdapter;

impl FsLocalAdapter {
    /// Create new filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FsPort for FsLocalAdapter {
    async fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    async fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    async fn list_files(&self, dir: &Path, recursive: bool) -> DirectoryListing {
        let max_depth = if recursive { usize::MAX } else { 1 };
        let mut listing = DirectoryListing::default();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(true)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) if entry.file_type().is_file() => listing.files.push(entry.into_path()),
                Ok(_) => {}
                Err(e) => {
                    let path = e.path().unwrap_or(dir);
                    listing
                        .unreadable
                        .push(format!("'{}': {}", path.display(), e));
                }
            }
        }

        listing
    }

    async fn prepare_output_dir(&self, dir: &Path) -> Result<(), DomainError> {
        if !dir.exists() {
            return fs::create_dir_all(dir).map_err(|e| {
                DomainError::FsFail(format!(
                    "Failed to create output directory '{}': {}",
                    dir.display(),
                    e
                ))
            });
        }

        if !dir.is_dir() {
            return Err(DomainError::NotADirectory(dir.display().to_string()));
        }

        let mut entries = fs::read_dir(dir).map_err(|e| {
            DomainError::FsFail(format!("Failed to read '{}': {}", dir.display(), e))
        })?;
        if entries.next().is_some() {
            return Err(DomainError::OutputDirNotEmpty(dir.display().to_string()));
        }

        Ok(())
    }
}
