use clap::Parser;
use sea_battle::{init_logging, match_rng, Combatant, GeneratorLimits, Match, RandomTargeting};

/// Computer-vs-computer match; prints the outcome as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut rng = match_rng(args.seed);
    let limits = GeneratorLimits::default();
    let first =
        Combatant::with_random_fleet("Computer 1", Box::new(RandomTargeting::new()), &mut rng, &limits)?;
    let second =
        Combatant::with_random_fleet("Computer 2", Box::new(RandomTargeting::new()), &mut rng, &limits)?;

    let mut game = Match::new(first, second, rng);
    let outcome = game.run(&mut ())?;
    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}
