//! File discovery for finding source images in the input directory.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::BatchConfig;

/// Discovers image files directly inside a directory.
pub struct FileDiscovery {
    supported_formats: Vec<String>,
}

/// Information about a discovered file.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

impl DiscoveredFile {
    /// The file name used for ordering.
    pub fn file_name(&self) -> &std::ffi::OsStr {
        self.path.file_name().unwrap_or_default()
    }
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: &BatchConfig) -> Self {
        Self {
            supported_formats: config
                .supported_formats
                .iter()
                .map(|f| format!(".{}", f.trim_start_matches('.').to_lowercase()))
                .collect(),
        }
    }

    /// Discover supported image files directly inside `dir`.
    ///
    /// Subdirectories are not descended into. Symlinks are followed. The
    /// result is sorted by file name so repeated runs assign output names
    /// identically.
    pub fn discover(&self, dir: &Path) -> Vec<DiscoveredFile> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::debug!("Skipping unreadable entry: {}", err);
                    None
                }
            })
        {
            let entry_path = entry.path();
            if entry.file_type().is_file() && self.is_supported(entry_path) {
                if let Ok(meta) = entry.metadata() {
                    files.push(DiscoveredFile {
                        path: entry_path.to_path_buf(),
                        size: meta.len(),
                    });
                }
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(b.file_name()));
        files
    }

    /// Check if a file name ends in a supported extension.
    ///
    /// Matches on the lowercased name rather than `Path::extension`, so a
    /// file called just `.png` counts too.
    fn is_supported(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| {
                let name_lower = name.to_lowercase();
                self.supported_formats
                    .iter()
                    .any(|suffix| name_lower.ends_with(suffix.as_str()))
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discovery() -> FileDiscovery {
        FileDiscovery::new(&BatchConfig::default())
    }

    #[test]
    fn test_is_supported() {
        let discovery = discovery();

        assert!(discovery.is_supported(Path::new("test.jpg")));
        assert!(discovery.is_supported(Path::new("test.JPG")));
        assert!(discovery.is_supported(Path::new("test.jpeg")));
        assert!(discovery.is_supported(Path::new("test.png")));
        assert!(discovery.is_supported(Path::new("test.TIF")));
        assert!(discovery.is_supported(Path::new("test.tiff")));
        assert!(discovery.is_supported(Path::new("test.bmp")));
        assert!(!discovery.is_supported(Path::new("test.webp")));
        assert!(!discovery.is_supported(Path::new("test.txt")));
        assert!(!discovery.is_supported(Path::new("jpg")));
    }

    #[test]
    fn test_configured_formats_accept_leading_dot() {
        let config = BatchConfig {
            supported_formats: vec![".PNG".to_string()],
            ..BatchConfig::default()
        };
        let discovery = FileDiscovery::new(&config);
        assert!(discovery.is_supported(Path::new("a.png")));
        assert!(!discovery.is_supported(Path::new("a.jpg")));
    }

    #[test]
    fn test_discover_is_sorted_and_flat() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.JPG", "b.tif", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("0.png"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("folder.png")).unwrap();

        let files = discovery().discover(dir.path());
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.tif", "c.png"]);
    }

    #[test]
    fn test_discover_missing_dir_is_empty() {
        assert!(discovery()
            .discover(Path::new("/nonexistent/patterns"))
            .is_empty());
    }

    #[test]
    fn test_bare_extension_name_is_supported() {
        let discovery = discovery();
        assert!(discovery.is_supported(Path::new(".png")));
        assert!(discovery.is_supported(Path::new("raw/.JPEG")));
        assert!(!discovery.is_supported(Path::new("png")));
        assert!(!discovery.is_supported(Path::new("scan.png.txt")));
    }
}
