/// Per-file operations on screenshots.
///
/// This module moves screenshots into month folders and deletes them. Each
/// operation works on a single file and returns a `FileOutcome`, so one failure
/// never stops the rest of a batch.
use crate::screenshot::{MetadataError, ScreenshotFile};
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while organizing screenshots.
#[derive(Debug)]
pub enum OrganizeError {
    /// Failed to create the destination root or a month folder.
    DirectoryCreationFailed { path: PathBuf, source: io::Error },
    /// The creation time of a file could not be read.
    TimestampUnavailable(MetadataError),
    /// A file with the same name is already in the month folder.
    DestinationExists { path: PathBuf },
    /// Failed to move a file into its month folder.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: io::Error,
    },
    /// Failed to delete a file.
    FileDeleteFailure { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::TimestampUnavailable(err) => write!(f, "{}", err),
            Self::DestinationExists { path } => {
                write!(f, "Destination already exists: {}", path.display())
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
            Self::FileDeleteFailure { path, source } => {
                write!(f, "Failed to delete {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// Result type for screenshot organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// The per-file operation an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Move,
    Delete,
}

impl FileOperation {
    /// Present participle used in error lines, e.g. "Error moving ...".
    pub fn verb(self) -> &'static str {
        match self {
            FileOperation::Move => "moving",
            FileOperation::Delete => "deleting",
        }
    }
}

/// What happened to a single file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was moved into `destination`, its month folder.
    Moved { name: String, destination: PathBuf },
    /// The file was deleted.
    Deleted { name: String },
    /// `operation` failed and the file was left where it was.
    Failed {
        name: String,
        operation: FileOperation,
        error: OrganizeError,
    },
}

impl FileOutcome {
    /// Returns true unless the operation failed.
    pub fn is_success(&self) -> bool {
        !matches!(self, FileOutcome::Failed { .. })
    }
}

/// Outcomes of a batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one file.
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of files the operation succeeded on.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// The failed files, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &OrganizeError)> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Failed { name, error, .. } => Some((name.as_str(), error)),
            _ => None,
        })
    }

    /// Returns true if every file was processed successfully.
    pub fn is_complete_success(&self) -> bool {
        self.outcomes.iter().all(FileOutcome::is_success)
    }
}

/// Moves and deletes screenshots.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Returns the `YYYY-MM` folder name for a timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Local, TimeZone};
    /// use shotsort::file_organizer::FileOrganizer;
    ///
    /// let ts = Local.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
    /// assert_eq!(FileOrganizer::month_folder_name(&ts), "2024-03");
    /// ```
    pub fn month_folder_name(timestamp: &DateTime<Local>) -> String {
        timestamp.format("%Y-%m").to_string()
    }

    /// Creates the destination root and any missing parents.
    pub fn prepare_destination(root: &Path) -> OrganizeResult<()> {
        fs::create_dir_all(root).map_err(|e| OrganizeError::DirectoryCreationFailed {
            path: root.to_path_buf(),
            source: e,
        })
    }

    /// Moves `file` into the month folder under `root` given by `timestamp`.
    ///
    /// The month folder is created if missing. The file keeps its name; an
    /// existing file with that name in the month folder is never replaced.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use shotsort::file_organizer::{FileOrganizer, FileOutcome};
    /// use shotsort::screenshot::ScreenshotFile;
    /// use std::path::Path;
    ///
    /// let file = ScreenshotFile::from_path("/Users/me/Desktop/Screenshot 1.png").unwrap();
    /// let root = Path::new("/Users/me/Pictures/Screenshots");
    ///
    /// match FileOrganizer::move_by_date(root, &file, ScreenshotFile::created) {
    ///     FileOutcome::Moved { destination, .. } => println!("-> {}", destination.display()),
    ///     other => eprintln!("{:?}", other),
    /// }
    /// ```
    pub fn move_by_date<T>(root: &Path, file: &ScreenshotFile, timestamp: T) -> FileOutcome
    where
        T: FnOnce(&ScreenshotFile) -> Result<DateTime<Local>, MetadataError>,
    {
        match Self::try_move_by_date(root, file, timestamp) {
            Ok(destination) => {
                log::debug!("Moved {} to {}", file.path.display(), destination.display());
                FileOutcome::Moved {
                    name: file.name.clone(),
                    destination,
                }
            }
            Err(error) => {
                log::warn!("Could not move {}: {}", file.path.display(), error);
                FileOutcome::Failed {
                    name: file.name.clone(),
                    operation: FileOperation::Move,
                    error,
                }
            }
        }
    }

    /// Deletes `file`.
    pub fn delete(file: &ScreenshotFile) -> FileOutcome {
        match fs::remove_file(&file.path) {
            Ok(()) => {
                log::debug!("Deleted {}", file.path.display());
                FileOutcome::Deleted {
                    name: file.name.clone(),
                }
            }
            Err(e) => {
                log::warn!("Could not delete {}: {}", file.path.display(), e);
                FileOutcome::Failed {
                    name: file.name.clone(),
                    operation: FileOperation::Delete,
                    error: OrganizeError::FileDeleteFailure {
                        path: file.path.clone(),
                        source: e,
                    },
                }
            }
        }
    }

    fn try_move_by_date<T>(
        root: &Path,
        file: &ScreenshotFile,
        timestamp: T,
    ) -> OrganizeResult<PathBuf>
    where
        T: FnOnce(&ScreenshotFile) -> Result<DateTime<Local>, MetadataError>,
    {
        let created = timestamp(file).map_err(OrganizeError::TimestampUnavailable)?;
        let month_dir = root.join(Self::month_folder_name(&created));

        if !month_dir.is_dir() {
            fs::create_dir_all(&month_dir).map_err(|e| OrganizeError::DirectoryCreationFailed {
                path: month_dir.clone(),
                source: e,
            })?;
        }

        let destination_path = month_dir.join(&file.name);
        if destination_path.exists() {
            return Err(OrganizeError::DestinationExists {
                path: destination_path,
            });
        }

        move_file(&file.path, &destination_path).map_err(|e| OrganizeError::FileMoveFailure {
            source: file.path.clone(),
            destination: destination_path.clone(),
            source_error: e,
        })?;

        Ok(month_dir)
    }
}

/// Renames `from` to `to`, copying and removing when they are on different
/// filesystems.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!("{} crosses devices, copying instead", from.display());
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
        result => result,
    }
}
