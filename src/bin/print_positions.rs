use clap::Parser;
use nim::{Evaluator, Rules};
use std::process::ExitCode;

/// Print which pile sizes are losing for the player to move.
#[derive(Parser, Debug)]
#[command(name = "print_positions", version, about)]
struct Args {
    /// Largest pile size to classify
    #[arg(long, default_value_t = nim::rules::N_COINS)]
    upto: usize,

    /// Maximum coins taken per turn
    #[arg(long, default_value_t = nim::rules::MAX_MOVE)]
    max_move: usize,

    /// Emit the table as JSON
    #[arg(long)]
    json: bool,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let rules = Rules::new(args.upto.max(2), args.max_move)?;
    let eval = Evaluator::new(rules);
    let analysis = eval.analyse(args.upto)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }
    for (pile, good_move) in &analysis.good_moves {
        match good_move {
            Some(taken) => println!("{pile:>6}  winning, take {taken}"),
            None => println!("{pile:>6}  losing"),
        }
    }
    println!(
        "{} losing positions, {} piles cached",
        analysis.losing_positions.len(),
        eval.cache_size()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
