use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use gridwords::wordgrid::Position;
use gridwords::Solver;
use serde::Serialize;

/// What one solve produced, ready to print or serialize
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub grid: String,
    pub width: usize,
    pub height: usize,
    pub diagonals: bool,
    pub candidates: usize,
    pub found: usize,
    pub elapsed_ms: f64,
    pub words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<BTreeMap<String, Vec<Position>>>,
}

impl SolveReport {
    pub fn new(
        solver: &Solver,
        candidates: usize,
        words: Vec<String>,
        elapsed: Duration,
        with_paths: bool,
    ) -> Self {
        let paths = with_paths.then(|| {
            words
                .iter()
                .filter_map(|w| solver.find_path(w).map(|p| (w.clone(), p)))
                .collect()
        });
        let grid = solver.grid();
        Self {
            grid: grid.as_flat_string(),
            width: grid.width(),
            height: grid.height(),
            diagonals: solver.options().diagonals,
            candidates,
            found: words.len(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            words,
            paths,
        }
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Found: {} words in {:.3} ms",
            self.found, self.elapsed_ms
        )?;
        match &self.paths {
            Some(paths) => {
                for word in &self.words {
                    let trace = paths
                        .get(word)
                        .map(|p| {
                            p.iter()
                                .map(|pos| pos.to_string())
                                .collect::<Vec<_>>()
                                .join(" ")
                        })
                        .unwrap_or_default();
                    writeln!(f, "{}\t{}", word, trace)?;
                }
            }
            None => {
                for word in &self.words {
                    writeln!(f, "{}", word)?;
                }
            }
        }
        Ok(())
    }
}
