use clap::Parser;
use dialoguer::Input;
use nim::{instructions, Computer, Evaluator, Game, Player, Result, Rules, Side};
use std::process::ExitCode;

/// Play nim against the computer. The player who takes the last coin loses.
#[derive(Parser, Debug)]
#[command(name = "play_nim", version, about)]
struct Args {
    /// Coins on the table at the start
    #[arg(long, default_value_t = nim::rules::N_COINS)]
    coins: usize,

    /// Maximum coins taken per turn
    #[arg(long, default_value_t = nim::rules::MAX_MOVE)]
    max_move: usize,

    /// Let the computer make the first move
    #[arg(long)]
    computer_first: bool,
}

struct Human;

impl Player for Human {
    fn take(&mut self, game: &Game) -> Result<usize> {
        let rules = *game.rules();
        let pile = game.pile();
        let taken = Input::<usize>::new()
            .with_prompt("How many would you like?")
            .validate_with(|taken: &usize| -> std::result::Result<(), String> {
                match rules.is_legal_move(*taken, pile) {
                    true => Ok(()),
                    false => Err(format!(
                        "That's cheating! Please choose a number between 1 and {}\n\
                         There are {} coins in the pile.",
                        rules.move_limit(pile),
                        pile
                    )),
                }
            })
            .interact_text()?;
        Ok(taken)
    }
}

/// Echoes the computer's choice the way a human opponent would announce it.
struct Announced(Computer);

impl Player for Announced {
    fn take(&mut self, game: &Game) -> Result<usize> {
        let taken = self.0.take(game)?;
        println!("I'll take {taken}.");
        Ok(taken)
    }
}

struct Narrated<P>(P);

impl<P: Player> Player for Narrated<P> {
    fn take(&mut self, game: &Game) -> Result<usize> {
        println!("There are {} coins in the pile.", game.pile());
        self.0.take(game)
    }
}

fn run(args: Args) -> Result<()> {
    let rules = Rules::new(args.coins, args.max_move)?;
    println!("{}", instructions(&rules));

    let first = match args.computer_first {
        true => Side::Computer,
        false => Side::Human,
    };
    let mut game = Game::new(rules, first);
    let mut human = Narrated(Human);
    let mut computer = Narrated(Announced(Computer::new(Evaluator::new(rules))));
    let outcome = game.play(&mut human, &mut computer)?;
    println!("{outcome}");
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
