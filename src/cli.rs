//! Command-line workflow for shotsort.
//!
//! This module drives a whole run:
//! - Settings resolution
//! - Screenshot discovery
//! - Summary statistics
//! - The interactive action menu
//! - Moving, deleting or listing the screenshots

use crate::config::{ConfigError, Settings};
use crate::discovery::find_screenshots;
use crate::file_organizer::{BatchReport, FileOrganizer, OrganizeError};
use crate::menu::{Action, MenuState};
use crate::output::Reporter;
use crate::screenshot::{MetadataError, ScreenshotFile};
use crate::stats::{aggregate, human_size};
use std::io::{self, BufRead, Write};
use std::path::Path;

const MENU: &str = "\nChoose action:\n\
                    1. Move to organized folders by date\n\
                    2. Delete all found screenshots\n\
                    3. List all screenshots\n\
                    4. Cancel\n\
                    Enter choice (1-4): ";

/// Errors that end a run.
#[derive(Debug)]
pub enum CliError {
    /// Settings could not be resolved.
    Config(ConfigError),
    /// A screenshot's metadata could not be read outside a per-file operation.
    Metadata(MetadataError),
    /// An action failed before it could process individual files.
    Organize(OrganizeError),
    /// Reading input or writing output failed.
    Io(io::Error),
    /// Input ended while an answer was expected.
    InputClosed,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "{}", e),
            CliError::Metadata(e) => write!(f, "{}", e),
            CliError::Organize(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "{}", e),
            CliError::InputClosed => write!(f, "input stream closed"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<MetadataError> for CliError {
    fn from(e: MetadataError) -> Self {
        CliError::Metadata(e)
    }
}

impl From<OrganizeError> for CliError {
    fn from(e: OrganizeError) -> Self {
        CliError::Organize(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

/// Runs shotsort for the current user.
///
/// # Examples
///
/// ```no_run
/// use shotsort::cli::run_cli;
/// use shotsort::output::Reporter;
/// use std::io;
///
/// let stdin = io::stdin();
/// let mut reporter = Reporter::new(io::stdout());
/// if let Err(e) = run_cli(&mut stdin.lock(), &mut reporter) {
///     eprintln!("Error: {}", e);
/// }
/// ```
pub fn run_cli<R: BufRead, W: Write>(
    input: &mut R,
    reporter: &mut Reporter<W>,
) -> Result<(), CliError> {
    let settings = Settings::detect()?;
    run_with_settings(&settings, input, reporter)
}

/// Discovers screenshots in the configured locations and runs the menu.
pub fn run_with_settings<R: BufRead, W: Write>(
    settings: &Settings,
    input: &mut R,
    reporter: &mut Reporter<W>,
) -> Result<(), CliError> {
    let files = find_screenshots(&settings.search_locations);
    log::info!("Discovered {} screenshots", files.len());
    organize(&files, settings.destination_root(), input, reporter)
}

/// Shows the summary and menu for `files` and runs the chosen action.
///
/// Each menu state prints on entry; prompting states then read one line from
/// `input`. Month folders are created under `destination_root`.
pub fn organize<R: BufRead, W: Write>(
    files: &[ScreenshotFile],
    destination_root: &Path,
    input: &mut R,
    reporter: &mut Reporter<W>,
) -> Result<(), CliError> {
    let mut state = MenuState::initial(files.len());

    loop {
        log::debug!("Menu state: {:?}", state);
        match state {
            MenuState::Empty => reporter.plain("No screenshot files found")?,
            MenuState::Summary => print_summary(files, reporter)?,
            MenuState::Prompt => reporter.prompt(MENU)?,
            MenuState::ConfirmDelete => reporter.prompt(&format!(
                "\nAre you sure you want to delete {} screenshots? (yes/no): ",
                files.len()
            ))?,
            MenuState::Execute(action) => execute(action, files, destination_root, reporter)?,
            MenuState::Cancelled => reporter.warning("Operation cancelled")?,
            MenuState::Done => {}
        }

        if state.is_terminal() {
            return Ok(());
        }

        let line = if state.needs_input() {
            Some(read_answer(input)?)
        } else {
            None
        };
        state = state.next(line.as_deref());
    }
}

fn print_summary<W: Write>(
    files: &[ScreenshotFile],
    reporter: &mut Reporter<W>,
) -> Result<(), CliError> {
    let stats = aggregate(files)?;

    reporter.header(&format!(
        "Found {} {}",
        files.len(),
        if files.len() == 1 {
            "screenshot"
        } else {
            "screenshots"
        }
    ))?;
    reporter.plain(&format!("Total size: {}", human_size(stats.total_size)))?;
    reporter.plain(&format!(
        "File types: {}",
        stats.sorted_extensions().join(", ")
    ))?;
    Ok(())
}

fn execute<W: Write>(
    action: Action,
    files: &[ScreenshotFile],
    destination_root: &Path,
    reporter: &mut Reporter<W>,
) -> Result<(), CliError> {
    match action {
        Action::MoveByDate => move_screenshots(files, destination_root, reporter),
        Action::Delete => delete_screenshots(files, reporter),
        Action::List => list_screenshots(files, reporter),
    }
}

/// Moves every screenshot into its month folder, reporting each file as it goes.
fn move_screenshots<W: Write>(
    files: &[ScreenshotFile],
    destination_root: &Path,
    reporter: &mut Reporter<W>,
) -> Result<(), CliError> {
    FileOrganizer::prepare_destination(destination_root)?;

    let pb = reporter.progress_bar(files.len());
    let mut report = BatchReport::new();

    for file in files {
        let outcome =
            FileOrganizer::move_by_date(destination_root, file, ScreenshotFile::created);
        pb.suspend(|| reporter.outcome(&outcome))?;
        pb.inc(1);
        report.push(outcome);
    }
    pb.finish_and_clear();

    finish_batch(&report, "Moved", files.len(), reporter)
}

/// Deletes every screenshot, reporting each file as it goes.
fn delete_screenshots<W: Write>(
    files: &[ScreenshotFile],
    reporter: &mut Reporter<W>,
) -> Result<(), CliError> {
    let pb = reporter.progress_bar(files.len());
    let mut report = BatchReport::new();

    for file in files {
        let outcome = FileOrganizer::delete(file);
        pb.suspend(|| reporter.outcome(&outcome))?;
        pb.inc(1);
        report.push(outcome);
    }
    pb.finish_and_clear();

    finish_batch(&report, "Deleted", files.len(), reporter)
}

fn list_screenshots<W: Write>(
    files: &[ScreenshotFile],
    reporter: &mut Reporter<W>,
) -> Result<(), CliError> {
    reporter.header("Found screenshots:")?;
    for file in files {
        reporter.plain(&format!("{} ({})", file.name, human_size(file.size()?)))?;
    }
    Ok(())
}

fn finish_batch<W: Write>(
    report: &BatchReport,
    verb: &str,
    total: usize,
    reporter: &mut Reporter<W>,
) -> Result<(), CliError> {
    reporter.info(&format!(
        "\n{} {} of {} screenshots",
        verb,
        report.succeeded(),
        total
    ))?;

    if !report.is_complete_success() {
        let failed = report.failures().count();
        log::warn!("{} of {} screenshots failed", failed, total);
        reporter.warning(&format!(
            "{} {} could not be processed. Please review errors above.",
            failed,
            if failed == 1 { "file" } else { "files" }
        ))?;
    }
    Ok(())
}

/// Reads one line of input, without its line terminator.
fn read_answer<R: BufRead>(input: &mut R) -> Result<String, CliError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::InputClosed);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(files: &[ScreenshotFile], root: &Path, answers: &str) -> (Result<(), CliError>, String) {
        colored::control::set_override(false);
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut reporter = Reporter::new(Vec::new());
        let result = organize(files, root, &mut input, &mut reporter);
        let output = String::from_utf8(reporter.into_inner()).expect("output is utf-8");
        (result, output)
    }

    fn screenshot(dir: &Path, name: &str, len: usize) -> ScreenshotFile {
        let path = dir.join(name);
        fs::write(&path, vec![0u8; len]).expect("Failed to write test file");
        ScreenshotFile::from_path(path).expect("path has a file name")
    }

    #[test]
    fn test_empty_set_prints_not_found_without_menu() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().join("Screenshots");

        let (result, output) = run(&[], &root, "1\n");

        assert!(result.is_ok());
        assert!(output.contains("No screenshot files found"));
        assert!(!output.contains("Choose action"));
        assert!(!root.exists());
    }

    #[test]
    fn test_summary_lists_count_size_and_types() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let files = vec![
            screenshot(temp_dir.path(), "Screenshot a.png", 1024),
            screenshot(temp_dir.path(), "Screenshot b.png", 512),
        ];

        let (result, output) = run(&files, &temp_dir.path().join("Screenshots"), "4\n");

        assert!(result.is_ok());
        assert!(output.contains("Found 2 screenshots"));
        assert!(output.contains("Total size: 1.50 KB"));
        assert!(output.contains("File types: .png"));
        assert!(output.contains("Enter choice (1-4): "));
        assert!(output.contains("Operation cancelled"));
    }

    #[test]
    fn test_unknown_choice_cancels() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let files = vec![screenshot(temp_dir.path(), "Screenshot a.png", 4)];

        let (result, output) = run(&files, &temp_dir.path().join("Screenshots"), "\n");

        assert!(result.is_ok());
        assert!(output.contains("Operation cancelled"));
        assert!(files[0].path.exists());
    }

    #[test]
    fn test_list_prints_each_file_with_size() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let files = vec![
            screenshot(temp_dir.path(), "Screenshot a.png", 10),
            screenshot(temp_dir.path(), "Screenshot b.png", 2048),
        ];

        let (result, output) = run(&files, &temp_dir.path().join("Screenshots"), "3\n");

        assert!(result.is_ok());
        assert!(output.contains("Found screenshots:"));
        assert!(output.contains("Screenshot a.png (10.00 B)"));
        assert!(output.contains("Screenshot b.png (2.00 KB)"));
        assert!(files.iter().all(|f| f.path.exists()));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let files = vec![screenshot(temp_dir.path(), "Screenshot a.png", 4)];

        let (result, _) = run(&files, &temp_dir.path().join("Screenshots"), "");

        assert!(matches!(result, Err(CliError::InputClosed)));
        assert!(files[0].path.exists());
    }

    #[test]
    fn test_vanished_file_fails_summary() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = screenshot(temp_dir.path(), "Screenshot a.png", 4);
        fs::remove_file(&file.path).expect("Failed to remove file");

        let (result, output) = run(&[file], &temp_dir.path().join("Screenshots"), "3\n");

        assert!(matches!(result, Err(CliError::Metadata(_))));
        assert!(!output.contains("Choose action"));
    }

    #[test]
    fn test_delete_declined_keeps_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let files = vec![screenshot(temp_dir.path(), "Screenshot a.png", 4)];

        let (result, output) = run(&files, &temp_dir.path().join("Screenshots"), "2\nno\n");

        assert!(result.is_ok());
        assert!(output.contains("Are you sure you want to delete 1 screenshots? (yes/no): "));
        assert!(output.contains("Operation cancelled"));
        assert!(files[0].path.exists());
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_output_failure_ends_run_with_io_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let mut input = Cursor::new(b"1\n".to_vec());
        let mut reporter = Reporter::new(ClosedPipe);

        let result = organize(&[], &temp_dir.path().join("Screenshots"), &mut input, &mut reporter);

        match result {
            Err(CliError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
