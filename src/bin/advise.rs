//! Table-side advisor binary.
//!
//! Evaluates made hands, estimates equity, and prints strategy advice
//! as pretty JSON for piping into other tools.

use clap::Parser;
use railbird::cards::hand::Hand;
use railbird::strategy::context::GameContext;
use railbird::strategy::context::Position;
use railbird::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Advise {
    #[command(about = "Rank the made hand from hole and board cards", alias = "eval")]
    Evaluate {
        #[arg(required = true)]
        hole: String,
        board: Option<String>,
    },
    #[command(about = "Estimate equity against one random opponent", alias = "eq")]
    Equity {
        #[arg(required = true)]
        hole: String,
        board: Option<String>,
        #[arg(long)]
        iterations: Option<u32>,
        #[arg(long)]
        full: bool,
    },
    #[command(about = "Synthesize a mixed strategy for the spot", alias = "gto")]
    Strategy {
        #[arg(required = true)]
        hole: String,
        board: Option<String>,
        #[arg(long, default_value_t = 100.)]
        pot: f32,
        #[arg(long, default_value_t = 1000.)]
        stack: f32,
        #[arg(long, default_value = "middle")]
        position: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    let engine = Engine::new();
    match Advise::parse() {
        Advise::Evaluate { hole, board } => {
            let hole = Hand::try_from(hole.as_str())?;
            let board = Hand::try_from(board.as_deref().unwrap_or(""))?;
            let evaluation = engine.evaluate_hand(hole, board)?;
            println!("{}", serde_json::to_string_pretty(&evaluation)?);
        }
        Advise::Equity {
            hole,
            board,
            iterations,
            full,
        } => {
            let hole = Hand::try_from(hole.as_str())?;
            let board = Hand::try_from(board.as_deref().unwrap_or(""))?;
            let trials = match full {
                true => Some(EQUITY_ITERATIONS_FULL),
                false => iterations,
            };
            let equity = engine.calculate_equity(hole, board, trials).await?;
            println!("{}", serde_json::to_string_pretty(&equity)?);
        }
        Advise::Strategy {
            hole,
            board,
            pot,
            stack,
            position,
        } => {
            let hole = Hand::try_from(hole.as_str())?;
            let board = Hand::try_from(board.as_deref().unwrap_or(""))?;
            let position = match position.as_str() {
                "early" => Position::Early,
                "middle" => Position::Middle,
                "late" => Position::Late,
                other => anyhow::bail!("unknown position: {}", other),
            };
            let context = GameContext {
                pot,
                stack,
                position,
            };
            let strategy = engine.calculate_gto_strategy(hole, board, context).await?;
            println!("{}", serde_json::to_string_pretty(&strategy)?);
        }
    }
    Ok(())
}
