use std::{fmt, hash::Hasher};

use log::{debug, trace};
use metrohash::MetroHash64;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{pos, BoardError, Cell, Pattern, Pos};

/// Moore neighborhood, in the order neighbors are stored.
const NEIGHBOR_OFFSETS: [Pos; 8] = [
    pos!(-1, -1),
    pos!(0, -1),
    pos!(1, -1),
    pos!(-1, 0),
    pos!(1, 0),
    pos!(-1, 1),
    pos!(0, 1),
    pos!(1, 1),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Topology {
    /// opposite edges are adjacent.
    #[default]
    Toroidal,
    /// cells beyond the edges do not exist.
    Bounded,
}

/// A fixed-size grid of cells.
///
/// Cells live in a single row-major vector and refer to each other by index,
/// the adjacency is built once and never changes afterward.
#[derive(Debug, Clone)]
pub struct Board<R = StdRng> {
    cells: Vec<Cell>,
    columns: usize,
    rows: usize,
    cell_size: usize,
    topology: Topology,
    rng: R,
}

impl Board<StdRng> {
    pub fn new(width: usize, height: usize, cell_size: usize) -> Result<Self, BoardError> {
        Self::with_topology(width, height, cell_size, Topology::default())
    }

    pub fn with_topology(
        width: usize,
        height: usize,
        cell_size: usize,
        topology: Topology,
    ) -> Result<Self, BoardError> {
        Self::with_rng(width, height, cell_size, topology, StdRng::from_entropy())
    }

    pub fn seeded(
        width: usize,
        height: usize,
        cell_size: usize,
        topology: Topology,
        seed: u64,
    ) -> Result<Self, BoardError> {
        Self::with_rng(width, height, cell_size, topology, StdRng::seed_from_u64(seed))
    }
}

impl<R> Board<R> {
    pub fn with_rng(
        width: usize,
        height: usize,
        cell_size: usize,
        topology: Topology,
        rng: R,
    ) -> Result<Self, BoardError> {
        let invalid = BoardError::InvalidDimensions {
            width,
            height,
            cell_size,
        };
        if cell_size == 0 {
            return Err(invalid);
        }
        let (columns, rows) = (width / cell_size, height / cell_size);
        if columns == 0 || rows == 0 || i32::try_from(columns.max(rows)).is_err() {
            return Err(invalid);
        }

        let cells = (0..rows)
            .flat_map(|y| (0..columns).map(move |x| pos!(x as i32, y as i32)))
            .map(|pos| {
                let neighbors = neighbor_positions(pos, columns, rows, topology)
                    .map(|p| p.y as usize * columns + p.x as usize)
                    .collect();
                Cell::with_neighbors(neighbors)
            })
            .collect();

        debug!("built {topology:?} board of {columns}x{rows} cells");
        Ok(Self {
            cells,
            columns,
            rows,
            cell_size,
            topology,
            rng,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn width(&self) -> usize {
        self.columns * self.cell_size
    }

    pub fn height(&self) -> usize {
        self.rows * self.cell_size
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        pos.is_within(self.columns, self.rows)
            .then(|| pos.y as usize * self.columns + pos.x as usize)
    }

    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        self.index(pos).map(|index| &self.cells[index])
    }

    /// whether the cell at `pos` is alive, positions off the board are dead.
    pub fn get(&self, pos: Pos) -> bool {
        self.cell(pos).map(Cell::is_alive).unwrap_or(false)
    }

    /// sets a single cell, returns false when `pos` is off the board.
    pub fn set(&mut self, pos: Pos, alive: bool) -> bool {
        match self.index(pos) {
            Some(index) => {
                self.cells[index].set_alive(alive);
                true
            }
            None => false,
        }
    }

    pub fn neighbor_count(&self, pos: Pos) -> Option<usize> {
        self.cell(pos).map(|cell| cell.neighbors().len())
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Moves the board one generation forward.
    ///
    /// Every next state is computed from the current generation before any
    /// cell commits, so traversal order has no effect on the result.
    pub fn advance(&mut self) {
        for index in 0..self.cells.len() {
            let live = self.cells[index].live_neighbors(&self.cells);
            self.cells[index].determine_next_state(live);
        }
        for cell in self.cells.iter_mut() {
            cell.advance();
        }
        trace!("advanced, population {}", self.population());
    }

    /// Parses `pattern` and writes it centered on the board.
    ///
    /// Cells outside the pattern keep their state, call `clear` first for a
    /// blank slate.
    pub fn reset(&mut self, pattern: &str) -> Result<(), BoardError> {
        let pattern = Pattern::parse(pattern)?;
        self.place(&pattern)
    }

    pub fn place(&mut self, pattern: &Pattern) -> Result<(), BoardError> {
        if pattern.width() > self.columns || pattern.height() > self.rows {
            return Err(BoardError::OutOfBounds {
                pattern_width: pattern.width(),
                pattern_height: pattern.height(),
                columns: self.columns,
                rows: self.rows,
            });
        }
        let x_offset = (self.columns - pattern.width()) / 2;
        let y_offset = (self.rows - pattern.height()) / 2;
        for (x, y, alive) in pattern.cells() {
            let index = (y + y_offset) * self.columns + x + x_offset;
            self.cells[index].set_alive(alive);
        }
        debug!(
            "placed {}x{} pattern at ({x_offset}, {y_offset})",
            pattern.width(),
            pattern.height()
        );
        Ok(())
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_alive(false);
        }
    }

    pub fn render(&self) -> String {
        self.cells
            .chunks(self.columns)
            .map(|row| row.iter().map(Cell::render).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// hash of the current generation, equal boards hash equally.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = MetroHash64::new();
        hasher.write_usize(self.columns);
        hasher.write_usize(self.rows);
        for chunk in self.cells.chunks(64) {
            let word = chunk
                .iter()
                .enumerate()
                .fold(0u64, |word, (bit, cell)| word | (cell.is_alive() as u64) << bit);
            hasher.write_u64(word);
        }
        hasher.finish()
    }
}

impl<R: Rng> Board<R> {
    /// Sets every cell alive with probability `density`.
    pub fn randomize(&mut self, density: f64) -> Result<(), BoardError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(BoardError::InvalidDensity(density));
        }
        for cell in self.cells.iter_mut() {
            cell.set_alive(self.rng.gen::<f64>() < density);
        }
        debug!("randomized with density {density}");
        Ok(())
    }
}

impl<R> fmt::Display for Board<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Positions adjacent to `pos`. A cell is never its own neighbor, which only
/// matters for toroidal boards one cell wide or tall.
fn neighbor_positions(
    pos: Pos,
    columns: usize,
    rows: usize,
    topology: Topology,
) -> impl Iterator<Item = Pos> {
    NEIGHBOR_OFFSETS
        .into_iter()
        .map(move |offset| pos + offset)
        .filter_map(move |p| match topology {
            Topology::Toroidal => Some(p.wrap(columns, rows)),
            Topology::Bounded => p.is_within(columns, rows).then_some(p),
        })
        .filter(move |&p| p != pos)
}
