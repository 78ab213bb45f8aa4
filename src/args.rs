//! Code to parse the command line using `clap`, and definitions of the
//! parsed result

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

use crate::report::Detail;
use crate::style::ColorChoice;
use crate::subsets::DEFAULT_SEPARATOR;

/// Returns the parsed command line.
#[must_use]
pub fn parsed() -> Args {
    Args::from(CliArgs::parse())
}

/// The settings a run of `piecalc` needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// What to do
    pub mode: Mode,
    /// Placed between set names in combination keys
    pub separator: String,
    /// When to color the output
    pub color: ColorChoice,
    /// How much of each evaluation to show
    pub detail: Detail,
    /// The most verbose log level to write to stderr
    pub log_level: LevelFilter,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
/// What `piecalc` should do
pub enum Mode {
    /// Run the interactive menu
    Menu,
    /// Print the predefined library example and exit
    Library,
}

#[derive(Debug, Parser)]
#[command(name = "piecalc", version, about)]
/// `CliArgs` contains the parsed command line.
struct CliArgs {
    #[arg(value_enum, default_value_t = CliMode::Menu)]
    /// What to do
    mode: CliMode,
    #[arg(
        long,
        default_value = DEFAULT_SEPARATOR,
        value_parser = NonEmptyStringValueParser::new()
    )]
    /// Separator placed between set names in intersection keys
    separator: String,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    /// When to color titles and warnings
    color: ColorChoice,
    #[arg(short, long, conflicts_with = "by_order")]
    /// Print only final answers, not the steps leading to them
    quiet: bool,
    #[arg(long)]
    /// After the steps, print a subtotal for each intersection order
    by_order: bool,
    #[arg(short, long, action = ArgAction::Count)]
    /// Log to stderr: -v for progress, -vv for every step, -vvv for everything
    verbose: u8,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, ValueEnum)]
/// Name of the requested mode
enum CliMode {
    /// Run the interactive menu
    Menu,
    /// Print the predefined library example and exit
    Library,
}

impl From<CliArgs> for Args {
    fn from(parsed: CliArgs) -> Self {
        let mode = match parsed.mode {
            CliMode::Menu => Mode::Menu,
            CliMode::Library => Mode::Library,
        };
        let detail = if parsed.quiet {
            Detail::Quiet
        } else if parsed.by_order {
            Detail::ByOrder
        } else {
            Detail::Steps
        };
        let log_level = match parsed.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Args { mode, separator: parsed.separator, color: parsed.color, detail, log_level }
    }
}
