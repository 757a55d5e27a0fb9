//! Runtime settings for shotsort.
//!
//! There is no configuration file. Every location the tool touches is derived
//! from the current user's home directory:
//!
//! - search locations: `~/Desktop`, `~/Downloads`, `~/Pictures` (in that order)
//! - destination root: `~/Pictures/Screenshots`

use std::path::{Path, PathBuf};

/// Subdirectories of the home directory searched for screenshots, in order.
pub const SEARCH_SUBDIRS: [&str; 3] = ["Desktop", "Downloads", "Pictures"];

/// Path of the destination root, relative to the home directory.
pub const DESTINATION_SUBDIR: [&str; 2] = ["Pictures", "Screenshots"];

/// Errors that can occur while resolving settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The current user's home directory could not be determined.
    HomeNotFound,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::HomeNotFound => {
                write!(f, "Could not determine the home directory")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Locations used by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directories searched for screenshots, in search order.
    pub search_locations: Vec<PathBuf>,
    /// Root folder that month folders are created under.
    pub destination_root: PathBuf,
}

impl Settings {
    /// Resolves settings for the current user.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HomeNotFound` if no home directory is available.
    pub fn detect() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        log::debug!("Using home directory {}", home.display());
        Ok(Self::for_home(home))
    }

    /// Builds settings rooted at an explicit home directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use shotsort::config::Settings;
    /// use std::path::Path;
    ///
    /// let settings = Settings::for_home("/Users/me");
    /// assert_eq!(settings.search_locations[0], Path::new("/Users/me/Desktop"));
    /// assert_eq!(settings.destination_root, Path::new("/Users/me/Pictures/Screenshots"));
    /// ```
    pub fn for_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let search_locations = SEARCH_SUBDIRS.iter().map(|dir| home.join(dir)).collect();
        let destination_root = DESTINATION_SUBDIR
            .iter()
            .fold(home, |path, part| path.join(part));

        Self {
            search_locations,
            destination_root,
        }
    }

    /// Returns the destination root as a path.
    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }
}
