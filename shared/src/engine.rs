use crate::grid::CellState::{Off, On};
use crate::grid::Grid;
use crate::{Error, Result};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EngineState {
    Running,
    Terminated,
}

/// Outcome of a single [`ToggleEngine::select`] call.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Selection {
    pub state: EngineState,
    pub selections: u64,
}

/// Applies selections to a grid and tracks the hit counter.
///
/// `Terminated` is absorbing: once every cell is dark no further selection is accepted.
#[derive(Debug, Clone)]
pub struct ToggleEngine {
    grid: Grid,
    selections: u64,
    state: EngineState,
}

impl ToggleEngine {
    pub fn new(grid: Grid) -> Self {
        let state = if grid.all_off() {
            EngineState::Terminated
        } else {
            EngineState::Running
        };
        ToggleEngine {
            grid,
            selections: 0,
            state,
        }
    }

    /// Select the cell at `(row, col)`.
    ///
    /// A lit cell is switched off and each of its neighbours inverted, costing one hit.
    /// A dark cell is left as is and does not count.
    pub fn select(&mut self, row: usize, col: usize) -> Result<Selection> {
        if self.state == EngineState::Terminated {
            return Err(Error::GameAlreadyTerminated {
                selections: self.selections,
            });
        }

        if self.grid.state_at(row, col)? == On {
            self.selections += 1;
            self.grid.set_state(row, col, Off)?;
            let neighbours = self.grid.neighbors_of(row, col)?.to_vec();
            for (n_row, n_col) in neighbours {
                let flipped = self.grid.state_at(n_row, n_col)?.toggled();
                self.grid.set_state(n_row, n_col, flipped)?;
            }
            log::trace!("hit ({row}, {col}), {} cells lit", self.grid.on_count());
        }

        if self.grid.all_off() {
            self.state = EngineState::Terminated;
            log::debug!("grid cleared after {} selections", self.selections);
        }

        Ok(self.selection())
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == EngineState::Terminated
    }

    pub fn selections(&self) -> u64 {
        self.selections
    }

    pub fn selection(&self) -> Selection {
        Selection {
            state: self.state,
            selections: self.selections,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
