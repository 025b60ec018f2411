use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use reach_core::Square;
use reach_engine::{board_from_pieces, starting_board, starting_pieces, TargetSet};

#[derive(Parser)]
#[command(name = "reach")]
#[command(about = "Legal-target explorer for the standard starting position")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the starting position
    Board,
    /// Print the legal targets of the piece on a square
    Targets {
        /// Square in algebraic notation (e.g. "b1")
        square: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Board => {
            println!("{}", starting_board());
        }
        Commands::Targets { square } => {
            let square: Square = square
                .parse()
                .with_context(|| format!("invalid square '{}'", square))?;
            print_targets(square)?;
        }
    }

    Ok(())
}

fn print_targets(square: Square) -> Result<()> {
    let mut pieces = starting_pieces();
    let board = board_from_pieces(&pieces)?;
    let Some(piece) = pieces.iter_mut().find(|p| p.position() == Some(square)) else {
        bail!("no piece on {}", square);
    };

    let targets = piece.update_legal_targets(&board).clone();
    println!("{}: {} legal targets", piece, targets.count());
    match &targets {
        TargetSet::Leaper(squares) => {
            let mut sorted = squares.clone();
            sorted.sort();
            println!("  {}", format_squares(&sorted));
        }
        TargetSet::Slider(groups) => {
            for (direction, squares) in groups {
                println!("  {}: {}", direction, format_squares(squares));
            }
        }
        TargetSet::Pawn(groups) => {
            for (direction, squares) in groups {
                println!("  {}: {}", direction, format_squares(squares));
            }
        }
    }
    Ok(())
}

fn format_squares(squares: &[Square]) -> String {
    if squares.is_empty() {
        return "(none)".to_string();
    }
    squares
        .iter()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
