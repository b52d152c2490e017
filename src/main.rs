//! spaceclearer - Find the largest files under a directory and clear them out.
//!
//! Usage:
//!   spc [PATH]               Launch interactive TUI
//!   spc list [PATH]          Print the largest files, one page at a time
//!   spc --help               Show help

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, bail};
use serde::Serialize;

use spaceclearer_core::{FileEntry, FileList, PAGE_SIZE, PageCursor};
use spaceclearer_scan::{DirectoryScanner, ScanConfig};
use spaceclearer_tui::{format_size, truncate_start};

#[derive(Parser)]
#[command(
    name = "spaceclearer",
    version,
    about = "Find the largest files under a directory and recycle or delete them",
    long_about = "spaceclearer lists every file under a directory from largest to \
                  smallest, five at a time.\n\n\
                  Run `spc [PATH]` for the interactive TUI, or `spc list [PATH]` \
                  to print the listing."
)]
struct Cli {
    /// Directory to list (prompts for one when omitted)
    path: Option<PathBuf>,

    #[command(flatten)]
    walk: WalkArgs,

    /// Increase log verbosity for `list` (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Options shared by the TUI and `list`, accepted before or after the subcommand.
#[derive(Args, Clone, Copy)]
struct WalkArgs {
    /// Skip hidden files and directories
    #[arg(long = "no-hidden", action = clap::ArgAction::SetFalse, global = true)]
    hidden: bool,

    /// Follow symbolic links while walking
    #[arg(long, global = true)]
    follow_symlinks: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a directory and print its largest files
    List {
        /// Directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Page to print (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Entries per page
        #[arg(long, default_value_t = PAGE_SIZE)]
        page_size: usize,

        /// Print every entry instead of one page
        #[arg(short, long)]
        all: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One page of the listing as printed by `list`.
#[derive(Debug, Serialize)]
struct PageReport<'a> {
    root: &'a Path,
    page: usize,
    page_count: usize,
    total_files: usize,
    total_size: u64,
    entries: &'a [FileEntry],
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Command::List {
            path,
            page,
            page_size,
            all,
            format,
        }) => {
            setup_logging(cli.verbose, cli.quiet);
            run_list(&path, cli.walk, page, page_size, all, format)?;
        }
        None => {
            // Launch TUI. A bad path is reported inside the TUI, which
            // then asks for another directory.
            let config = spaceclearer_tui::TuiConfig::new().with_scan(walk_config(cli.walk, "."));
            spaceclearer_tui::run_with_config(cli.path, config)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over the flags.
fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn walk_config(walk: WalkArgs, root: impl Into<PathBuf>) -> ScanConfig {
    let mut config = ScanConfig::new(root);
    config.include_hidden = walk.hidden;
    config.follow_symlinks = walk.follow_symlinks;
    config
}

/// Scan a directory and print one page (or all) of its files.
fn run_list(
    path: &Path,
    walk: WalkArgs,
    page: usize,
    page_size: usize,
    all: bool,
    format: OutputFormat,
) -> Result<()> {
    let path = path.canonicalize().context("Invalid path")?;
    if page == 0 {
        bail!("Pages are numbered from 1");
    }

    tracing::info!(path = %path.display(), "scanning");
    let files = DirectoryScanner::new()
        .scan_sorted(&walk_config(walk, &path))
        .context("Scan failed")?;

    let (cursor, entries) = if all {
        let cursor = PageCursor::with_page_size(files.len().max(1));
        (cursor, files.as_slice())
    } else {
        let cursor = cursor_at(page, page_size, files.len());
        (cursor, files.slice(cursor.visible_range(files.len())))
    };

    let report = PageReport {
        root: &path,
        page: cursor.page_number(),
        page_count: cursor.page_count(files.len()),
        total_files: files.len(),
        total_size: files.total_size(),
        entries,
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => print_report(&report, &files),
    }

    Ok(())
}

/// Walk the cursor forward to `page`, stopping at the last one.
fn cursor_at(page: usize, page_size: usize, total: usize) -> PageCursor {
    let mut cursor = PageCursor::with_page_size(page_size);
    for _ in 1..page {
        if !cursor.has_next(total) {
            break;
        }
        cursor.advance(total);
    }
    cursor
}

fn print_report(report: &PageReport<'_>, files: &FileList) {
    println!();
    println!("{}", "─".repeat(60));
    println!(
        " {} - {}",
        report.root.display(),
        format_size(report.total_size)
    );
    println!(
        " {} files, page {} of {}",
        report.total_files, report.page, report.page_count
    );
    println!("{}", "─".repeat(60));

    if report.entries.is_empty() {
        println!(" Directory is empty");
        return;
    }

    for entry in report.entries {
        let ratio = if files.total_size() > 0 {
            entry.size as f64 / files.total_size() as f64
        } else {
            0.0
        };
        let display = entry
            .path
            .strip_prefix(report.root)
            .unwrap_or(&entry.path)
            .display()
            .to_string();

        println!(
            " {:>10}  {:>5.1}%  {}",
            format_size(entry.size),
            ratio * 100.0,
            truncate_start(&display, 60)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_at_stops_on_last_page() {
        let cursor = cursor_at(1, 5, 12);
        assert_eq!(cursor.visible_range(12), 0..5);

        let cursor = cursor_at(3, 5, 12);
        assert_eq!(cursor.visible_range(12), 10..12);

        let cursor = cursor_at(9, 5, 12);
        assert_eq!(cursor.page_number(), 3);
    }

    #[test]
    fn test_cli_parses_list_flags() {
        let cli = Cli::try_parse_from([
            "spc",
            "list",
            "/tmp",
            "--page",
            "2",
            "--no-hidden",
            "--format",
            "json",
        ])
        .unwrap();

        assert!(!cli.walk.hidden);
        match cli.command {
            Some(Command::List { page, format, .. }) => {
                assert_eq!(page, 2);
                assert!(matches!(format, OutputFormat::Json));
            }
            None => panic!("expected list command"),
        }
    }

    #[test]
    fn test_walk_flags_before_subcommand_apply_to_list() {
        let cli = Cli::try_parse_from(["spc", "--no-hidden", "--follow-symlinks", "list", "/tmp"])
            .unwrap();

        assert!(matches!(cli.command, Some(Command::List { .. })));
        assert!(!cli.walk.hidden);
        assert!(cli.walk.follow_symlinks);
    }

    #[test]
    fn test_missing_tui_path_is_passed_through() {
        let cli = Cli::try_parse_from(["spc", "/definitely/not/here"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("/definitely/not/here")));
    }

    #[test]
    fn test_cli_path_is_optional() {
        let cli = Cli::try_parse_from(["spc"]).unwrap();
        assert!(cli.path.is_none());
        assert!(cli.walk.hidden);
    }
}
