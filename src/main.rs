use clap::Parser;
use shotsort::cli::run_cli;
use shotsort::output::Reporter;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

/// Find screenshots on the Desktop, in Downloads and in Pictures, then move
/// them into month folders, delete them, or list them.
#[derive(Parser, Debug)]
#[command(name = "shotsort", version, about)]
struct Args {}

fn main() -> ExitCode {
    if !cfg!(target_os = "macos") {
        eprintln!(
            "{} is not supported - this tool is for macOS only",
            std::env::consts::OS
        );
        return ExitCode::FAILURE;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let _args = Args::parse();

    if let Err(e) = ctrlc::set_handler(|| {
        println!("\nOperation cancelled by user");
        std::process::exit(1);
    }) {
        log::warn!("Could not install Ctrl-C handler: {}", e);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut reporter = Reporter::new(io::stdout()).with_progress(io::stderr().is_terminal());

    match run_cli(&mut input, &mut reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = reporter.error(&format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
