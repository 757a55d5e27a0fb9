//! Screenshot discovery.
//!
//! Lists the direct entries of each search location and keeps the files whose
//! names follow the screenshot convention. Symlinks are followed, so a link to
//! a screenshot counts; directories never do. Locations are not searched
//! recursively.

use crate::screenshot::{ScreenshotFile, is_screenshot_name};
use std::fs;
use std::path::{Path, PathBuf};

/// Finds screenshots in `locations`, in location order.
///
/// Missing locations are skipped. A location that exists but cannot be read is
/// logged and skipped as well, so discovery itself never fails.
pub fn find_screenshots(locations: &[PathBuf]) -> Vec<ScreenshotFile> {
    let mut screenshots = Vec::new();

    for location in locations {
        if !location.is_dir() {
            log::debug!("Skipping missing location {}", location.display());
            continue;
        }

        let found = scan_location(location);
        log::debug!("Found {} screenshots in {}", found.len(), location.display());
        screenshots.extend(found);
    }

    screenshots
}

fn scan_location(location: &Path) -> Vec<ScreenshotFile> {
    let entries = match fs::read_dir(location) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Cannot read {}: {}", location.display(), e);
            return Vec::new();
        }
    };

    entries
        .flatten()
        .filter(|entry| entry.path().is_file())
        .filter(|entry| is_screenshot_name(&entry.file_name().to_string_lossy()))
        .filter_map(|entry| ScreenshotFile::from_path(entry.path()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"png").expect("Failed to write test file");
    }

    fn names(files: &[ScreenshotFile]) -> Vec<String> {
        let mut names: Vec<String> = files.iter().map(|f| f.name.clone()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_only_screenshot_pngs_are_found() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path();
        touch(dir, "Screenshot 2024-01-01 at 10.00.00.png");
        touch(dir, "Screenshot.png");
        touch(dir, "screenshot1.png");
        touch(dir, "Screenshot.jpg");
        touch(dir, "holiday.png");

        let found = find_screenshots(&[dir.to_path_buf()]);

        assert_eq!(
            names(&found),
            vec!["Screenshot 2024-01-01 at 10.00.00.png", "Screenshot.png"]
        );
    }

    #[test]
    fn test_directories_are_not_matched() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path();
        fs::create_dir(dir.join("Screenshot folder.png")).expect("Failed to create dir");
        touch(dir, "Screenshot real.png");

        let found = find_screenshots(&[dir.to_path_buf()]);

        assert_eq!(names(&found), vec!["Screenshot real.png"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_screenshot_is_found() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let target_dir = temp_dir.path().join("elsewhere");
        let desktop = temp_dir.path().join("Desktop");
        fs::create_dir(&target_dir).expect("Failed to create dir");
        fs::create_dir(&desktop).expect("Failed to create dir");
        touch(&target_dir, "real.png");
        std::os::unix::fs::symlink(
            target_dir.join("real.png"),
            desktop.join("Screenshot link.png"),
        )
        .expect("Failed to create symlink");
        std::os::unix::fs::symlink(
            target_dir.join("missing.png"),
            desktop.join("Screenshot dangling.png"),
        )
        .expect("Failed to create symlink");

        let found = find_screenshots(&[desktop.clone()]);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, desktop.join("Screenshot link.png"));
        assert_eq!(found[0].size().expect("link target readable"), 3);
    }

    #[test]
    fn test_search_is_not_recursive() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("nested");
        fs::create_dir(&nested).expect("Failed to create dir");
        touch(&nested, "Screenshot hidden.png");

        let found = find_screenshots(&[temp_dir.path().to_path_buf()]);

        assert!(found.is_empty());
    }

    #[test]
    fn test_missing_location_is_skipped() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let first = temp_dir.path().join("first");
        let missing = temp_dir.path().join("missing");
        let last = temp_dir.path().join("last");
        fs::create_dir(&first).expect("Failed to create dir");
        fs::create_dir(&last).expect("Failed to create dir");
        touch(&first, "Screenshot one.png");
        touch(&last, "Screenshot two.png");

        let found = find_screenshots(&[first.clone(), missing, last.clone()]);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].path, first.join("Screenshot one.png"));
        assert_eq!(found[1].path, last.join("Screenshot two.png"));
    }

    #[test]
    fn test_no_locations_yields_empty_set() {
        assert!(find_screenshots(&[]).is_empty());
    }
}
