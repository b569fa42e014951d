use std::fmt;

/// A single automaton cell.
///
/// Neighbors are stored as indices into the owning board's cell vector, so a
/// cell can only be evaluated against the slice it was built for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    alive_next: bool,
    neighbors: Vec<usize>,
}

impl Cell {
    pub(crate) fn with_neighbors(neighbors: Vec<usize>) -> Self {
        Self {
            neighbors,
            ..Self::default()
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive
    }

    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// counts the neighbors that are alive in the current generation.
    pub fn live_neighbors(&self, cells: &[Cell]) -> usize {
        self.neighbors
            .iter()
            .filter(|&&index| cells[index].alive)
            .count()
    }

    /// computes the next state without touching the current one.
    pub fn determine_next_state(&mut self, live_neighbors: usize) {
        self.alive_next = match (self.alive, live_neighbors) {
            (true, count) if count < 2 => false, // isolation
            (true, count) if count > 3 => false, // overcrowding
            (true, _) => true,                   // stasis
            (false, 3) => true,                  // birth
            _ => false,
        };
    }

    /// commits the state computed by `determine_next_state`.
    pub fn advance(&mut self) {
        self.alive = self.alive_next
    }

    pub fn render(&self) -> char {
        if self.alive {
            'X'
        } else {
            '-'
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

pub use board::{Board, Topology};
mod board;
