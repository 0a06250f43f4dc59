use crate::engine::ToggleEngine;
use crate::grid::CellState::{Off, On};
use crate::grid::Grid;
use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Plays whole games by picking cells uniformly at random until the board is dark.
///
/// There is no cap on the number of picks in a game. Termination is almost sure on
/// a finite board but not bounded, so a single game can in principle run for a long time.
#[derive(Debug, Clone, Copy)]
pub struct RandomSelector {
    size: usize,
    seed: u64,
}

/// Result of one game.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Trial {
    pub index: u64,
    pub seed: u64,
    /// Picks that landed on a lit cell.
    pub selections: u64,
    /// Every pick, free misses included.
    pub attempts: u64,
}

impl RandomSelector {
    pub fn new(size: usize) -> Result<Self> {
        Self::with_seed(size, rand::random())
    }

    pub fn with_seed(size: usize, seed: u64) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidDimension(size));
        }
        Ok(RandomSelector { size, seed })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn trial_seed(&self, index: u64) -> u64 {
        self.seed.wrapping_add(index)
    }

    /// Play game number `index`. The same selector and index always replay the same game.
    pub fn run_trial(&self, index: u64) -> Trial {
        let seed = self.trial_seed(index);
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::build(self.size, |_, _| if rng.random_bool(0.5) { On } else { Off });
        let mut engine = ToggleEngine::new(grid);

        let mut attempts = 0;
        while !engine.is_terminated() {
            let row = rng.random_range(0..self.size);
            let col = rng.random_range(0..self.size);
            attempts += 1;
            if let Err(err) = engine.select(row, col) {
                log::error!("trial {index}: {err}");
                break;
            }
        }

        Trial {
            index,
            seed,
            selections: engine.selections(),
            attempts,
        }
    }

    /// Lazily play `count` games. The iterator is `Clone`, so it can be replayed.
    pub fn trials(&self, count: u64) -> Trials {
        Trials {
            selector: *self,
            next: 0,
            count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Trials {
    selector: RandomSelector,
    next: u64,
    count: u64,
}

impl Iterator for Trials {
    type Item = Trial;

    fn next(&mut self) -> Option<Trial> {
        if self.next >= self.count {
            return None;
        }
        let trial = self.selector.run_trial(self.next);
        self.next += 1;
        Some(trial)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Play `trial_count` independent games on `rows` x `rows` boards, yielding the hit count of each.
pub fn run_batch(rows: usize, trial_count: u64) -> Result<impl Iterator<Item = u64> + Clone> {
    let selector = RandomSelector::new(rows)?;
    Ok(selector.trials(trial_count).map(|trial| trial.selections))
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct BatchSummary {
    pub trials: usize,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
}

impl BatchSummary {
    pub fn from_counts(counts: &[u64]) -> Option<Self> {
        let min = *counts.iter().min()?;
        let max = *counts.iter().max()?;
        let total: u64 = counts.iter().sum();
        Some(BatchSummary {
            trials: counts.len(),
            min,
            max,
            mean: total as f64 / counts.len() as f64,
        })
    }
}
