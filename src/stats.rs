//! Size and extension statistics for a set of screenshots.

use crate::screenshot::{MetadataError, ScreenshotFile};
use std::collections::HashSet;

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Totals computed over a screenshot set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    /// Sum of all file sizes in bytes.
    pub total_size: u64,
    /// Distinct extensions, each with a leading dot.
    pub extensions: HashSet<String>,
}

impl Aggregate {
    /// Returns the extensions in sorted order for display.
    pub fn sorted_extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        extensions.sort_unstable();
        extensions
    }
}

/// Sums the sizes of `files` and collects their extensions.
///
/// Sizes are read from the filesystem now, so a file that vanished since
/// discovery produces an error.
pub fn aggregate(files: &[ScreenshotFile]) -> Result<Aggregate, MetadataError> {
    files.iter().try_fold(Aggregate::default(), |mut acc, file| {
        acc.total_size += file.size()?;
        acc.extensions.insert(file.extension());
        Ok(acc)
    })
}

/// Formats a byte count with two decimals and a unit, from B up to GB.
///
/// Values are never scaled past GB.
///
/// # Examples
///
/// ```
/// use shotsort::stats::human_size;
///
/// assert_eq!(human_size(0), "0.00 B");
/// assert_eq!(human_size(1536), "1.50 KB");
/// assert_eq!(human_size(1048576), "1.00 MB");
/// ```
pub fn human_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = UNITS[0];

    for next in UNITS[1..].iter().copied() {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = next;
    }

    format!("{:.2} {}", size, unit)
}
