use super::adjacency::AdjacencyGraph;
use super::util::Position;

/*
    Depth-first path search over the adjacency graph.

    Rather than carrying a growing exclusion list down a recursion, the searcher keeps an
    explicit stack of frames plus one visited marker per cell. A marker is set when a cell is
    pushed and cleared when it is popped, so sibling branches never see each other's cells.
    The scratch buffers are reused between calls; one searcher per worker thread.
*/

#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Arena index of the cell matched at this depth
    cell: usize,
    /// Next neighbour slot to try from this cell
    slot: usize,
}

#[derive(Debug, Clone)]
pub struct PathSearcher<'a> {
    graph: &'a AdjacencyGraph,
    visited: Vec<bool>,
    stack: Vec<Frame>,
}

impl<'a> PathSearcher<'a> {
    pub fn new(graph: &'a AdjacencyGraph) -> Self {
        Self {
            graph,
            visited: vec![false; graph.len()],
            stack: Vec::new(),
        }
    }

    /// Whether `word` can be spelled starting at cell `start` without reusing a cell
    pub fn can_trace(&mut self, word: &[u8], start: usize) -> bool {
        let found = self.search(word, start);
        self.reset();
        found
    }

    /// Like `can_trace`, but hands back the first path found in neighbour order
    pub fn trace(&mut self, word: &[u8], start: usize) -> Option<Vec<Position>> {
        let path = if self.search(word, start) {
            Some(
                self.stack
                    .iter()
                    .map(|f| self.graph.cell(f.cell).pos)
                    .collect(),
            )
        } else {
            None
        };
        self.reset();
        path
    }

    /// Tries every cell in row-major order as a starting point
    pub fn trace_anywhere(&mut self, word: &[u8]) -> Option<Vec<Position>> {
        (0..self.graph.len()).find_map(|start| self.trace(word, start))
    }

    pub fn can_trace_anywhere(&mut self, word: &[u8]) -> bool {
        (0..self.graph.len()).any(|start| self.can_trace(word, start))
    }

    /// Runs the search. On success the stack holds the full path, one frame per letter.
    fn search(&mut self, word: &[u8], start: usize) -> bool {
        let graph = self.graph;
        // An empty word has no first letter to anchor on
        let first = match word.first() {
            Some(&c) => c,
            None => return false,
        };
        if start >= graph.len() || graph.cell(start).letter != first {
            return false;
        }

        self.visited[start] = true;
        self.stack.push(Frame {
            cell: start,
            slot: 0,
        });

        loop {
            let depth = self.stack.len();
            let frame = match self.stack.last_mut() {
                Some(frame) => frame,
                None => return false,
            };
            if depth == word.len() {
                return true;
            }

            let cell = graph.cell(frame.cell);
            let mut advanced = None;
            while frame.slot < 8 {
                let slot = frame.slot;
                frame.slot += 1;
                if let Some(next) = cell.slot(slot) {
                    if !self.visited[next] && graph.cell(next).letter == word[depth] {
                        advanced = Some(next);
                        break;
                    }
                }
            }

            match advanced {
                Some(next) => {
                    self.visited[next] = true;
                    self.stack.push(Frame {
                        cell: next,
                        slot: 0,
                    });
                }
                None => {
                    // Dead end: give the cell back to the other branches
                    let done = frame.cell;
                    self.visited[done] = false;
                    self.stack.pop();
                }
            }
        }
    }

    fn reset(&mut self) {
        for frame in self.stack.drain(..) {
            self.visited[frame.cell] = false;
        }
    }
}
