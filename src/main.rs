// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver for the queens beam search.
//!
//! ```bash
//! # Run to completion with a fixed seed
//! queens --seed 42
//!
//! # Five single steps from a given first member, with move logging
//! queens --initial 0,1,2,3,4,5 --steps 5 -v
//! ```

use clap::Parser;
use tracing::Level;

use queens_beam::board::{DEFAULT_BEAM_WIDTH, DEFAULT_SWEEP_LIMIT, QUEEN_COUNT};
use queens_beam::{BeamEngine, EngineConfig, Result, Snapshot, State};

#[derive(Parser, Debug)]
#[command(name = "queens")]
#[command(about = "Local beam search for non-attacking queens")]
struct Args {
    /// Number of states tracked in parallel
    #[arg(long, default_value_t = DEFAULT_BEAM_WIDTH)]
    beam_width: usize,

    /// Random seed (drawn from the OS when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of full beam sweeps when running to completion
    #[arg(long, default_value_t = DEFAULT_SWEEP_LIMIT)]
    sweep_limit: usize,

    /// Rows of the first beam member, one per column (e.g. 1,3,5,0,2,4)
    #[arg(long, value_delimiter = ',')]
    initial: Option<Vec<usize>>,

    /// Take this many single steps instead of running to completion
    #[arg(long)]
    steps: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = EngineConfig::default()
        .with_beam_width(args.beam_width)
        .with_sweep_limit(Some(args.sweep_limit));
    config.seed = args.seed;

    let seed_states = match &args.initial {
        Some(rows) => vec![State::from_slice(rows)?],
        None => Vec::new(),
    };

    let mut engine = BeamEngine::initialize(config, &seed_states)?;
    println!("Initial:");
    print_snapshot(&engine.snapshot());

    let snapshot = match args.steps {
        Some(steps) => {
            let mut snapshot = engine.snapshot();
            for _ in 0..steps {
                if snapshot.is_solved() {
                    break;
                }
                snapshot = engine.step();
            }
            snapshot
        }
        None => {
            let report = engine.run_to_completion(None)?;
            println!(
                "Sweeps: {} ({})",
                report.sweeps,
                if report.solved {
                    "solved"
                } else if report.stalled {
                    "stalled"
                } else {
                    "sweep limit reached"
                }
            );
            report.snapshot
        }
    };

    println!("Final:");
    print_snapshot(&snapshot);
    Ok(())
}

fn print_snapshot(snapshot: &Snapshot) {
    println!("Attacking pairs: {}", snapshot.best_conflicts());
    println!("Moves: {}", snapshot.step_count);
    println!(
        "Possible moves (H={}): {}",
        snapshot.best_score(),
        snapshot.best_candidates().len()
    );
    match snapshot.best_selected() {
        Some(mv) => println!("Selected move: {}", mv),
        None => println!("Selected move: none"),
    }
    for (k, state) in snapshot.beam.iter().enumerate() {
        let marker = if k == snapshot.best_index { '*' } else { ' ' };
        println!("{} {} {} conflicts", marker, state, snapshot.conflicts[k]);
    }
    print!("{}", render_board(snapshot.best_state()));
}

/// Text board, row 0 at the top, `Q` for each queen.
fn render_board(state: &State) -> String {
    let mut out = String::with_capacity(QUEEN_COUNT * (2 * QUEEN_COUNT + 1));
    for row in 0..QUEEN_COUNT {
        for column in 0..QUEEN_COUNT {
            out.push(if state[column] == row { 'Q' } else { '.' });
            out.push(if column + 1 < QUEEN_COUNT { ' ' } else { '\n' });
        }
    }
    out
}
