//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::app::RunOptions;
use crate::nav::Route;

/// Page to open on startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StartPage {
    /// Landing page.
    Home,
    /// JavaScript guide table of contents.
    Guide,
    /// JavaScript API methods.
    Methods,
    /// TypeScript utility types.
    UtilityTypes,
}

impl From<StartPage> for Route {
    fn from(page: StartPage) -> Self {
        match page {
            StartPage::Home => Self::Home,
            StartPage::Guide => Self::Guide,
            StartPage::Methods => Self::Methods,
            StartPage::UtilityTypes => Self::UtilityTypes,
        }
    }
}

/// refdeck - a keyboard-driven terminal reference for JavaScript and TypeScript
#[derive(Parser, Debug)]
#[command(name = "refdeck")]
#[command(version)]
#[command(about = "A keyboard-driven terminal reference for JavaScript and TypeScript", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Page to open on startup
    #[arg(long, value_enum, default_value_t = StartPage::Home)]
    pub page: StartPage,

    /// Content pack (.json or .toml) replacing the JavaScript method catalog
    #[arg(short, long, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Print entries whose name contains QUERY and exit
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Print the category filters of every page and exit
    #[arg(long)]
    pub list_categories: bool,
}

/// What: Process command-line arguments and handle early-exit flags.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Options for the interactive runtime.
///
/// Details:
/// - `--search` and `--list-categories` print to stdout and exit without starting the TUI.
#[must_use]
pub fn process_args(args: &Args) -> RunOptions {
    if let Some(query) = &args.search {
        super::search::handle_search(query, args.content.as_deref());
    }
    if args.list_categories {
        super::list::handle_list_categories(args.content.as_deref());
    }
    RunOptions {
        start: args.page.into(),
        content: args.content.clone(),
        search: None,
    }
}
