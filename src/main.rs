use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, ui, CliPlayer, Game, GameError, GameStatus, RandomAi, Side, SideId, TurnReport,
    BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Show the computer's ships")]
        reveal_enemy: bool,
    },
    /// Watch two computer players fight it out.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn greet() {
    println!("-------------------");
    println!("  Welcome to the   ");
    println!("    sea battle!    ");
    println!("-------------------");
    println!(" input format: x, y");
    println!(" x - row number    ");
    println!(" y - column number ");
    println!(" both from 1 to {}  ", BOARD_SIZE);
    println!("-------------------");
}

fn print_boards(game: &Game, reveal_enemy: bool) {
    let view = ui::format_side_by_side(
        ("Your board:", ui::format_board(game.board(SideId::A), true)),
        (
            "Computer's board:",
            ui::format_board(game.board(SideId::B), reveal_enemy),
        ),
    );
    println!("\n{}", view);
}

fn print_report(report: &TurnReport) {
    let who = match report.side {
        SideId::A => "Player 1",
        SideId::B => "Player 2",
    };
    println!(
        "{} fires at {}, {}: {}",
        who,
        report.target.x + 1,
        report.target.y + 1,
        report.outcome
    );
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, reveal_enemy } => {
            greet();
            let mut rng = make_rng(seed);
            let human = Side::with_random_fleet(&mut rng, CliPlayer::stdio());
            let computer = Side::with_random_fleet(&mut rng, RandomAi::new());
            let mut game = Game::new(human, computer, rng);

            loop {
                if game.status() == GameStatus::WaitingForSideA {
                    print_boards(&game, reveal_enemy);
                    println!("Your move!");
                }
                match game.play_turn() {
                    Ok(report) if report.winner.is_some() => break,
                    Ok(_) => {}
                    Err(GameError::MoveSourceClosed(_)) => {
                        println!("\nInput closed, leaving the game.");
                        return Ok(());
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            print_boards(&game, true);
            match game.winner() {
                Some(SideId::A) => println!("\nYou won!"),
                Some(SideId::B) => println!("\nThe computer won!"),
                None => {}
            }
        }
        Commands::Auto { seed } => {
            let mut rng = make_rng(seed);
            let first = Side::with_random_fleet(&mut rng, RandomAi::new());
            let second = Side::with_random_fleet(&mut rng, RandomAi::new());
            let mut game = Game::new(first, second, rng);

            let winner = game.run_with(|_, report| print_report(report))?;
            println!(
                "\nBoard of player 1:\n{}\n\nBoard of player 2:\n{}",
                ui::format_board(game.board(SideId::A), true),
                ui::format_board(game.board(SideId::B), true)
            );
            println!("\n{} won after {} turns", winner, game.turns());
        }
    }
    Ok(())
}
