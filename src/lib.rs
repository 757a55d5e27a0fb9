//! shotsort - tidy up macOS screenshots
//!
//! This library finds screenshots in the usual macOS locations (Desktop,
//! Downloads, Pictures), summarizes them, and moves them into month folders,
//! deletes them, or lists them, depending on the user's choice.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod file_organizer;
pub mod menu;
pub mod output;
pub mod screenshot;
pub mod stats;

pub use config::{ConfigError, Settings};
pub use discovery::find_screenshots;
pub use file_organizer::{BatchReport, FileOperation, FileOrganizer, FileOutcome, OrganizeError};
pub use output::Reporter;
pub use screenshot::ScreenshotFile;
pub use stats::{aggregate, human_size};

pub use cli::{CliError, organize, run_cli, run_with_settings};
