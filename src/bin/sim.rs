use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, Game, RandomAi, Side, SideId};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let side_a = Side::with_random_fleet(&mut rng, RandomAi::new());
    let side_b = Side::with_random_fleet(&mut rng, RandomAi::new());
    let mut game = Game::new(side_a, side_b, rng);

    let mut rejected = 0;
    let winner = game.run_with(|_, report| rejected += report.rejected)?;

    let result = json!({
        "seed": seed,
        "winner": winner,
        "turns": game.turns(),
        "rejected_moves": rejected,
        "side_a": {
            "hits_scored_against": game.board(SideId::A).hits_scored_against(),
            "cells_hit": game.board(SideId::A).cells_hit(),
        },
        "side_b": {
            "hits_scored_against": game.board(SideId::B).hits_scored_against(),
            "cells_hit": game.board(SideId::B).cells_hit(),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
