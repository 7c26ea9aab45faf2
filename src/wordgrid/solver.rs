use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, warn};

use super::adjacency::AdjacencyGraph;
use super::board::LetterGrid;
use super::error::GridError;
use super::search::PathSearcher;
use super::util::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    /// Let traces step diagonally as well as orthogonally
    pub diagonals: bool,
    /// Report each matched word once, keeping its first occurrence. Off by default so the
    /// output mirrors the multiplicity of the input list.
    pub dedup: bool,
    /// Spread the word list over the rayon pool
    pub parallel: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            diagonals: false,
            dedup: false,
            parallel: true,
        }
    }
}

impl SolveOptions {
    pub fn with_diagonals(diagonals: bool) -> Self {
        Self {
            diagonals,
            ..Self::default()
        }
    }
}

/// Grid plus adjacency, built once and then queried with any number of word lists.
#[derive(Debug, Clone)]
pub struct Solver {
    grid: LetterGrid,
    graph: AdjacencyGraph,
    options: SolveOptions,
}

impl Solver {
    /// Validates the grid and precomputes every cell's neighbourhood. Fails before any word is
    /// looked at.
    pub fn new(
        grid: &str,
        width: usize,
        height: usize,
        options: SolveOptions,
    ) -> Result<Self, GridError> {
        let grid = LetterGrid::build(grid, width, height)?;
        Ok(Self::from_grid(grid, options))
    }

    pub fn from_grid(grid: LetterGrid, options: SolveOptions) -> Self {
        let graph = AdjacencyGraph::build(&grid, options.diagonals);
        debug!(
            width = grid.width(),
            height = grid.height(),
            diagonals = options.diagonals,
            "built adjacency graph"
        );
        Self {
            grid,
            graph,
            options,
        }
    }

    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    pub fn options(&self) -> SolveOptions {
        self.options
    }

    /// Cheap rejections that never change the outcome: a trace cannot be longer than the grid,
    /// and cannot use a letter the grid does not hold.
    fn could_match(&self, word: &[u8]) -> bool {
        !word.is_empty()
            && word.len() <= self.grid.cell_count()
            && self.grid.alphabet().covers(word)
    }

    fn check(&self, searcher: &mut PathSearcher, word: &str) -> bool {
        let word = word.as_bytes();
        self.could_match(word) && searcher.can_trace_anywhere(word)
    }

    pub fn contains_word(&self, word: &str) -> bool {
        let mut searcher = PathSearcher::new(&self.graph);
        self.check(&mut searcher, word)
    }

    /// First path spelling `word`, trying start cells in row-major order
    pub fn find_path(&self, word: &str) -> Option<Vec<Position>> {
        let bytes = word.as_bytes();
        if !self.could_match(bytes) {
            return None;
        }
        PathSearcher::new(&self.graph).trace_anywhere(bytes)
    }

    /// Lazily yields the matched words in input order. Dropping the iterator stops the search
    /// between two words; nothing is left half-updated.
    pub fn matches<'s, I>(&'s self, words: I) -> Matches<'s, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Matches {
            solver: self,
            searcher: PathSearcher::new(&self.graph),
            words: words.into_iter(),
        }
    }

    /// Every word of `words` that can be traced in the grid, in input order
    pub fn solve<S>(&self, words: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        if words.is_empty() {
            warn!("solving against an empty word list");
        }

        let found: Vec<String> = if self.options.parallel {
            words
                .par_iter()
                .map_init(
                    || PathSearcher::new(&self.graph),
                    |searcher, word| {
                        let word = word.as_ref();
                        if self.check(searcher, word) {
                            Some(word.to_string())
                        } else {
                            None
                        }
                    },
                )
                .flatten()
                .collect()
        } else {
            self.matches(words.iter())
                .map(|w| w.as_ref().to_string())
                .collect()
        };

        let found = if self.options.dedup {
            let mut seen = HashSet::new();
            found.into_iter().filter(|w| seen.insert(w.clone())).collect()
        } else {
            found
        };

        debug!(
            candidates = words.len(),
            matched = found.len(),
            parallel = self.options.parallel,
            "solved word list"
        );
        found
    }
}

pub struct Matches<'s, I> {
    solver: &'s Solver,
    searcher: PathSearcher<'s>,
    words: I,
}

impl<'s, I> Iterator for Matches<'s, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for word in self.words.by_ref() {
            if self.solver.check(&mut self.searcher, word.as_ref()) {
                return Some(word);
            }
        }
        None
    }
}

/// One-shot facade: build the grid, then filter `words` down to the traceable ones
pub fn solve<S>(
    grid: &str,
    width: usize,
    height: usize,
    words: &[S],
    diagonals: bool,
) -> Result<Vec<String>, GridError>
where
    S: AsRef<str> + Sync,
{
    let solver = Solver::new(grid, width, height, SolveOptions::with_diagonals(diagonals))?;
    Ok(solver.solve(words))
}
