use clap::Parser;
use std::path::PathBuf;

/// Find every word of a list that can be traced through a letter grid.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Grid letters in row-major order, e.g. "brpgejkke"
    #[arg(short, long, value_name = "LETTERS")]
    pub grid: Option<String>,

    /// Number of columns
    #[arg(short = 'W', long, value_name = "NUM")]
    pub width: Option<usize>,

    /// Number of rows
    #[arg(short = 'H', long, value_name = "NUM")]
    pub height: Option<usize>,

    /// Allow traces to step diagonally
    #[arg(short, long)]
    pub diagonals: bool,

    /// Word list with one word per line; "-" reads stdin, http(s) URLs are downloaded
    #[arg(short, long, value_name = "PATH|URL")]
    pub words: Option<String>,

    /// JSON puzzle file; flags given on the command line take precedence
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report each matched word once
    #[arg(long)]
    pub dedup: bool,

    /// Search words one after another instead of on the thread pool
    #[arg(long)]
    pub sequential: bool,

    /// Fill the grid with random letters instead of reading --grid
    #[arg(long, conflicts_with = "grid")]
    pub random: bool,

    /// Seed for --random
    #[arg(long, requires = "random", value_name = "NUM")]
    pub seed: Option<u64>,

    /// Read grids from stdin in a loop, solving each against the word list
    #[arg(short, long, conflicts_with_all = ["grid", "random"])]
    pub interactive: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Include one path per matched word in the report
    #[arg(long)]
    pub paths: bool,

    /// Also write the JSON report to this file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a file in addition to stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Number of worker threads. Defaults to the number of logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,
}
