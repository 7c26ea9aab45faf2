use std::time::Instant;

use clap::Parser;
use gridwords::utils::serialization;
use gridwords::wordgrid::vocab::{LineInput, PerLineWords, WordSource};
use gridwords::{LetterGrid, SolveOptions, Solver};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info, warn};
#[macro_use]
extern crate text_io;

use crate::cli::Cli;
use crate::config::PuzzleConfig;
use crate::error::{CliError, Result};
use crate::report::SolveReport;

mod cli;
mod config;
mod error;
mod logging;
mod report;

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!("Setting rayon global thread pool to {} threads", num_threads);
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()?;
    }

    let config = match &cli.config {
        Some(path) => PuzzleConfig::load(path)?,
        None => PuzzleConfig::default(),
    }
    .merge_cli(&cli);

    let source = PerLineWords::from_arg(config.words_path()?);
    if cli.interactive && source.input() == &LineInput::Stdin {
        return Err(CliError::Config(
            "interactive mode reads grids from stdin, so the word list must come from a file"
                .into(),
        ));
    }
    let words = source.words()?;

    let options = config.options(!cli.sequential);
    if cli.interactive {
        return interactive(&config, options, &words, &cli);
    }

    let start = Instant::now();
    let solver = if cli.random {
        let (width, height) = config.shape()?;
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = LetterGrid::random(width, height, &mut rng)?;
        info!("Generated random grid:\n{}", grid);
        Solver::from_grid(grid, options)
    } else {
        let grid = config
            .grid
            .as_deref()
            .ok_or_else(|| CliError::Config("no grid given (--grid or --random)".into()))?;
        let (width, height) = config.shape_for(grid)?;
        Solver::new(grid, width, height, options)?
    };
    let found = solver.solve(&words);
    let report = SolveReport::new(&solver, words.len(), found, start.elapsed(), cli.paths);
    emit(&report, &cli)
}

/// Prompts for grids until stdin runs dry or an empty line is entered
fn interactive(
    config: &PuzzleConfig,
    options: SolveOptions,
    words: &[String],
    cli: &Cli,
) -> Result<()> {
    loop {
        println!("Enter grid (empty line to quit):");
        let grid: String = match try_read!("{}\n") {
            Ok(grid) => grid,
            Err(_) => break,
        };
        let grid = grid.trim().to_string();
        if grid.is_empty() {
            break;
        }

        let prompted = if config.width.is_some() || config.height.is_some() {
            None
        } else {
            println!("Enter width:");
            let width: std::result::Result<usize, _> = try_read!("{}\n");
            match width {
                Ok(width) if width > 0 => Some(width),
                _ => {
                    println!("Width must be a positive number");
                    continue;
                }
            }
        };

        match interactive_round(config, &grid, prompted, options, words, cli.paths) {
            Ok(report) => emit(&report, cli)?,
            Err(e) => {
                warn!("Rejected grid {:?}: {}", grid, e);
                println!("{}", e);
            }
        }
        println!();
    }
    Ok(())
}

/// Solves one grid typed at the prompt. `width` is the prompted width, `None` when the config
/// fixes the shape.
fn interactive_round(
    config: &PuzzleConfig,
    grid: &str,
    width: Option<usize>,
    options: SolveOptions,
    words: &[String],
    with_paths: bool,
) -> Result<SolveReport> {
    let (width, height) = match width {
        Some(width) => (width, grid.chars().count() / width),
        None => config.shape_for(grid)?,
    };
    let start = Instant::now();
    let solver = Solver::new(grid, width, height, options)?;
    let found = solver.solve(words);
    Ok(SolveReport::new(
        &solver,
        words.len(),
        found,
        start.elapsed(),
        with_paths,
    ))
}

fn emit(report: &SolveReport, cli: &Cli) -> Result<()> {
    if cli.json {
        println!("{}", serialization::to_json_string(report, true)?);
    } else {
        print!("{}", report);
    }
    if let Some(path) = &cli.output {
        serialization::save_to_disk(report, path)?;
        info!("Report written to {}", path.display());
    }
    Ok(())
}
