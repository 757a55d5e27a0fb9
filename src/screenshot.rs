/// Screenshot file records.
///
/// A `ScreenshotFile` is a lightweight handle to a file found during discovery.
/// Size and creation time are read from the filesystem when asked for, so a record
/// can go stale once the underlying file is moved or deleted.
use chrono::{DateTime, Local};
use std::fs;
use std::path::PathBuf;

/// Filename prefix used by the macOS screenshot tool.
pub const SCREENSHOT_PREFIX: &str = "Screenshot";
/// Filename suffix used by the macOS screenshot tool.
pub const SCREENSHOT_SUFFIX: &str = ".png";

/// Returns true if `name` follows the macOS screenshot naming convention.
///
/// The match is case-sensitive: the name must start with `Screenshot` and end
/// with `.png`.
///
/// # Examples
///
/// ```
/// use shotsort::screenshot::is_screenshot_name;
///
/// assert!(is_screenshot_name("Screenshot 2024-03-01 at 10.15.22.png"));
/// assert!(!is_screenshot_name("screenshot1.png"));
/// assert!(!is_screenshot_name("Screenshot.jpg"));
/// ```
pub fn is_screenshot_name(name: &str) -> bool {
    name.len() >= SCREENSHOT_PREFIX.len() + SCREENSHOT_SUFFIX.len()
        && name.starts_with(SCREENSHOT_PREFIX)
        && name.ends_with(SCREENSHOT_SUFFIX)
}

/// Metadata for a screenshot could not be read.
#[derive(Debug)]
pub struct MetadataError {
    /// The file whose metadata was requested.
    pub path: PathBuf,
    /// The underlying I/O error.
    pub source: std::io::Error,
}

impl std::fmt::Display for MetadataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to read metadata for {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for MetadataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A screenshot found in one of the search locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotFile {
    /// The full path to the file.
    pub path: PathBuf,
    /// The base filename.
    pub name: String,
}

impl ScreenshotFile {
    /// Creates a record for `path`, or `None` if the path has no file name.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let name = path.file_name()?.to_string_lossy().to_string();
        Some(Self { path, name })
    }

    /// Returns the extension with its leading dot (e.g. `.png`), or an empty
    /// string when the file has none.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }

    /// Reads the current size of the file in bytes.
    pub fn size(&self) -> Result<u64, MetadataError> {
        self.metadata().map(|meta| meta.len())
    }

    /// Reads the creation time of the file.
    ///
    /// Falls back to the modification time on filesystems that do not record
    /// a birth time.
    pub fn created(&self) -> Result<DateTime<Local>, MetadataError> {
        let meta = self.metadata()?;
        let time = match meta.created() {
            Ok(time) => time,
            Err(e) => {
                log::debug!(
                    "No creation time for {} ({}), using modification time",
                    self.path.display(),
                    e
                );
                meta.modified().map_err(|source| MetadataError {
                    path: self.path.clone(),
                    source,
                })?
            }
        };
        Ok(DateTime::<Local>::from(time))
    }

    fn metadata(&self) -> Result<fs::Metadata, MetadataError> {
        fs::metadata(&self.path).map_err(|source| MetadataError {
            path: self.path.clone(),
            source,
        })
    }
}
