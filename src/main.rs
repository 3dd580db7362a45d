use std::io;

use clap::Parser;
use sea_battle::ui::ConsoleObserver;
use sea_battle::{
    init_logging, match_rng, Combatant, ConsoleTargeting, GeneratorLimits, Match, MatchError,
    RandomTargeting,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle on a 6x6 grid against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Show the computer's ships on its board")]
    reveal: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match_rng(cli.seed);
    let limits = GeneratorLimits::default();
    let player = Combatant::with_random_fleet(
        "You",
        Box::new(ConsoleTargeting::stdin()),
        &mut rng,
        &limits,
    )?;
    let computer = Combatant::with_random_fleet(
        "Computer",
        Box::new(RandomTargeting::new()),
        &mut rng,
        &limits,
    )?;

    let mut game = Match::new(player, computer, rng);
    let mut observer = ConsoleObserver::new(io::stdout(), cli.reveal);
    match game.run(&mut observer) {
        Ok(_) => Ok(()),
        Err(MatchError::Withdrew { .. }) => {
            println!("\nInput closed, leaving the game.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
