use anyhow::{Context, Result};
use clap::Parser;
use elimination::{BatchSummary, RandomSelector};

#[derive(Parser, Debug)]
#[command(
    name = "elimination-batch",
    version,
    about = "Play elimination games with random picks and count the hits each one takes"
)]
struct Cli {
    /// Rows (and columns) of the board.
    #[arg(long, default_value_t = 3)]
    rows: usize,

    /// Number of independent games to play.
    #[arg(long, default_value_t = 10)]
    trials: u64,

    /// Base seed; game `i` is seeded with `seed + i`. Drawn at random when omitted.
    #[arg(long, env = "ELIMINATION_SEED")]
    seed: Option<u64>,

    /// Print min, max and mean hits after the last game.
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let selector = match cli.seed {
        Some(seed) => RandomSelector::with_seed(cli.rows, seed),
        None => RandomSelector::new(cli.rows),
    }
    .with_context(|| format!("setting up a {0}x{0} board", cli.rows))?;
    log::info!(
        "playing {} games on a {}x{} board, base seed {}",
        cli.trials,
        cli.rows,
        cli.rows,
        selector.seed()
    );

    let mut counts = Vec::new();
    for trial in selector.trials(cli.trials) {
        log::debug!("game {} used {} picks", trial.index, trial.attempts);
        println!("Game number: {} took {} hits!", trial.index, trial.selections);
        counts.push(trial.selections);
    }

    if cli.summary {
        if let Some(summary) = BatchSummary::from_counts(&counts) {
            println!(
                "{} games: min {} max {} mean {:.2}",
                summary.trials, summary.min, summary.max, summary.mean
            );
        }
    }
    Ok(())
}
