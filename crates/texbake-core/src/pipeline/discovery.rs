//! File discovery for finding source textures in the input directory.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::NamingConfig;
use crate::error::SetupError;

/// Discovers source textures directly inside a directory.
pub struct FileDiscovery {
    suffix: String,
}

/// Information about a discovered file.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File name within the input directory
    pub file_name: String,
    /// File size in bytes
    pub size: u64,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: &NamingConfig) -> Self {
        Self {
            suffix: format!(".{}", config.source_extension.to_lowercase()),
        }
    }

    /// List the source textures in `dir`, sorted by file name.
    ///
    /// Only the top level is scanned. Entries that are not regular files or
    /// whose names are not valid UTF-8 are skipped.
    pub fn discover(&self, dir: &Path) -> Result<Vec<DiscoveredFile>, SetupError> {
        let mut files = Vec::new();

        let walker = WalkDir::new(dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1);
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(SetupError::InputDirUnreadable {
                        path: dir.to_path_buf(),
                        message: e.to_string(),
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                    continue;
                }
            };

            let Some(file_name) = entry.file_name().to_str() else {
                tracing::warn!("Skipping non UTF-8 file name: {:?}", entry.path());
                continue;
            };
            if !self.is_supported(file_name) || !entry.file_type().is_file() {
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            files.push(DiscoveredFile {
                path: entry.path().to_path_buf(),
                file_name: file_name.to_string(),
                size,
            });
        }

        // Directory order is OS dependent
        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(files)
    }

    /// Lower-cased source extension with its leading dot.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Check if a file name carries the source extension, ignoring case.
    fn is_supported(&self, file_name: &str) -> bool {
        file_name.to_lowercase().ends_with(&self.suffix)
    }

    /// Get total size of all discovered files.
    pub fn total_size(files: &[DiscoveredFile]) -> u64 {
        files.iter().map(|f| f.size).sum()
    }
}
