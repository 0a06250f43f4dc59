/**
* Selecting a lit cell switches it off and inverts each orthogonal neighbour.
* Selecting a dark cell does nothing and is not counted as a hit.
* The game is over once every cell on the board is dark.
*/

pub mod engine;
mod error;
pub mod grid;
pub mod layout;
pub mod selector;

pub use engine::{EngineState, Selection, ToggleEngine};
pub use error::{Error, Result};
pub use grid::{color_for, Cell, CellState, Color, Grid};
pub use layout::CellLayout;
pub use selector::{run_batch, BatchSummary, RandomSelector, Trial, Trials};
