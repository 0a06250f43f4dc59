use crate::grid::CellState::{Off, On};
use crate::{Error, Result};
use rand::Rng;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CellState {
    Off,
    On,
}

impl CellState {
    pub fn is_on(self) -> bool {
        self == On
    }

    pub fn toggled(self) -> Self {
        match self {
            On => Off,
            Off => On,
        }
    }
}

/// What a renderer paints for a cell. Always derived from the state, never stored.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::Light => [255, 255, 255],
            Color::Dark => [0, 0, 0],
        }
    }
}

/// Colour of the separator lines drawn between cells.
pub const GRID_LINE_RGB: [u8; 3] = [128, 128, 128];

pub fn color_for(state: CellState) -> Color {
    match state {
        On => Color::Light,
        Off => Color::Dark,
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    row: usize,
    col: usize,
    state: CellState,
}

impl Cell {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn color(&self) -> Color {
        color_for(self.state)
    }
}

/// Square board of cells plus the orthogonal neighbour list of every cell.
///
/// The neighbour lists are computed once, after every cell exists, and never
/// change afterwards. Only cell states mutate.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
    neighbours: Vec<Vec<(usize, usize)>>,
}

impl Grid {
    /// Build a `size` x `size` board where every cell is lit with probability one half.
    pub fn new<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        Self::from_fn(size, |_, _| if rng.random_bool(0.5) { On } else { Off })
    }

    /// Build a board from a known pattern. Cells are visited in row-major order.
    pub fn from_fn<F>(size: usize, state: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> CellState,
    {
        if size == 0 {
            return Err(Error::InvalidDimension(size));
        }
        Ok(Self::build(size, state))
    }

    /// Callers must have checked `size` already.
    pub(crate) fn build<F>(size: usize, mut state: F) -> Self
    where
        F: FnMut(usize, usize) -> CellState,
    {
        let mut cells = Vec::with_capacity(size);
        for row in 0..size {
            let mut cell_row = Vec::with_capacity(size);
            for col in 0..size {
                cell_row.push(Cell {
                    row,
                    col,
                    state: state(row, col),
                });
            }
            cells.push(cell_row);
        }

        let mut grid = Grid {
            size,
            cells,
            neighbours: Vec::new(),
        };
        let neighbours = (0..size * size)
            .map(|index| grid.discover_neighbours(index / size, index % size))
            .collect();
        grid.neighbours = neighbours;
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn state_at(&self, row: usize, col: usize) -> Result<CellState> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col].state)
    }

    /// Overwrite a single cell. Neighbours are left alone.
    pub(crate) fn set_state(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        self.check_bounds(row, col)?;
        self.cells[row][col].state = state;
        Ok(())
    }

    /// Neighbours in discovery order: down, up, right, left.
    pub fn neighbors_of(&self, row: usize, col: usize) -> Result<&[(usize, usize)]> {
        self.check_bounds(row, col)?;
        Ok(&self.neighbours[row * self.size + col])
    }

    pub fn all_off(&self) -> bool {
        self.cells().all(|cell| !cell.state.is_on())
    }

    pub fn on_count(&self) -> usize {
        self.cells().filter(|cell| cell.state.is_on()).count()
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.size || col >= self.size {
            return Err(Error::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(())
    }

    fn discover_neighbours(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let mut found = Vec::with_capacity(4);
        if row + 1 < self.size {
            found.push((row + 1, col)); // Down
        }
        if row > 0 {
            found.push((row - 1, col)); // Up
        }
        if col + 1 < self.size {
            found.push((row, col + 1)); // Right
        }
        if col > 0 {
            found.push((row, col - 1)); // Left
        }
        found
    }
}
