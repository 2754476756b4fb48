//! File discovery for finding detector responses in directories.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::InputConfig;

/// Discovers detector response files.
pub struct FileDiscovery {
    extensions: Vec<String>,
}

/// Information about a discovered file.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: &InputConfig) -> Self {
        Self {
            extensions: config
                .extensions
                .iter()
                .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
        }
    }

    /// Discover all response files at a path.
    ///
    /// A file path is returned as-is regardless of extension, since the caller
    /// named it explicitly. A directory is walked recursively and filtered by
    /// extension. Results are sorted by path.
    pub fn discover(&self, path: &Path) -> Vec<DiscoveredFile> {
        if path.is_file() {
            return std::fs::metadata(path)
                .map(|meta| {
                    vec![DiscoveredFile {
                        path: path.to_path_buf(),
                        size: meta.len(),
                    }]
                })
                .unwrap_or_default();
        }

        let mut files: Vec<DiscoveredFile> = WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file() && self.is_supported(entry.path()))
            .filter_map(|entry| {
                entry.metadata().ok().map(|meta| DiscoveredFile {
                    path: entry.path().to_path_buf(),
                    size: meta.len(),
                })
            })
            .collect();

        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }

    /// Check if a file has a supported extension.
    fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext_lower = ext.to_lowercase();
                self.extensions.iter().any(|supported| *supported == ext_lower)
            })
            .unwrap_or(false)
    }

    /// Get total size of all discovered files.
    pub fn total_size(files: &[DiscoveredFile]) -> u64 {
        files.iter().map(|f| f.size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported() {
        let discovery = FileDiscovery::new(&InputConfig::default());

        assert!(discovery.is_supported(Path::new("shirt.json")));
        assert!(discovery.is_supported(Path::new("shirt.JSON")));
        assert!(!discovery.is_supported(Path::new("shirt.jpg")));
        assert!(!discovery.is_supported(Path::new("README")));
    }

    #[test]
    fn test_extensions_are_normalized() {
        let config = InputConfig {
            extensions: vec![".NDJSON".to_string(), " ".to_string()],
            ..InputConfig::default()
        };
        let discovery = FileDiscovery::new(&config);
        assert!(discovery.is_supported(Path::new("batch.ndjson")));
        assert!(!discovery.is_supported(Path::new("batch.json")));
    }

    #[test]
    fn test_discover_directory_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("b.json"), "{}").unwrap();
        std::fs::write(dir.path().join("nested").join("a.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "skip me").unwrap();

        let files = FileDiscovery::new(&InputConfig::default()).discover(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files[0].path.ends_with("b.json"));
        assert!(files[1].path.ends_with("nested/a.json"));
    }

    #[test]
    fn test_discover_explicit_file_ignores_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.txt");
        std::fs::write(&path, "{}").unwrap();

        let files = FileDiscovery::new(&InputConfig::default()).discover(&path);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].size, 2);
    }

    #[test]
    fn test_discover_missing_path_is_empty() {
        let files =
            FileDiscovery::new(&InputConfig::default()).discover(Path::new("/no/such/dir"));
        assert!(files.is_empty());
    }

    #[test]
    fn test_total_size() {
        let files = vec![
            DiscoveredFile {
                path: PathBuf::from("a.json"),
                size: 100,
            },
            DiscoveredFile {
                path: PathBuf::from("b.json"),
                size: 200,
            },
        ];

        assert_eq!(FileDiscovery::total_size(&files), 300);
    }
}
