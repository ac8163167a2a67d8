use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chess_rules::board::SpecialMove;
use chess_rules::{create_board, Board, Coord, EngineConfig, MoveRecord};

/// Replay a list of moves from the starting position.
#[derive(Parser)]
#[command(name = "replay", version, about = "Apply moves to a fresh board and report each outcome")]
struct Cli {
    /// JSON engine config (defaults to $CHESS_RULES_CONFIG, then built-in defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject moves made out of turn.
    #[arg(long)]
    strict: bool,

    /// Print the move log as JSON at the end.
    #[arg(long)]
    json: bool,

    /// Moves as origin and destination squares, e.g. `e2e4`.
    moves: Vec<String>,
}

fn parse_move(text: &str) -> Option<(Coord, Coord)> {
    if text.len() != 4 || !text.is_ascii() {
        return None;
    }
    let from = text[..2].parse().ok()?;
    let to = text[2..].parse().ok()?;
    Some((from, to))
}

fn describe(record: &MoveRecord) -> String {
    let mut s = format!(
        "{:?} {:?} {} -> {}",
        record.piece.color, record.piece.kind, record.origin, record.destination
    );
    if let Some(c) = record.captured {
        s.push_str(&format!(", captures {:?}", c.kind));
    }
    match record.special {
        Some(SpecialMove::EnPassant { captured_at }) => {
            s.push_str(&format!(" (en passant on {captured_at})"));
        }
        Some(SpecialMove::Castle { side, rook_to, .. }) => {
            s.push_str(&format!(" ({side:?}, rook to {rook_to})"));
        }
        None => {}
    }
    s
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path),
        None => EngineConfig::from_env(),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };
    let config = if cli.strict {
        config.with_enforce_turn_order(true)
    } else {
        config
    };

    let mut board: Board = create_board().with_config(config);
    let mut rejected = 0usize;

    for text in &cli.moves {
        let Some((from, to)) = parse_move(text) else {
            error!("cannot read move {text:?}; expected two squares such as e2e4");
            return ExitCode::from(2);
        };
        match board.apply_move(from, to) {
            Ok(record) => {
                println!("{text}: {}", describe(&record));
                for color in [chess_rules::Color::White, chess_rules::Color::Black] {
                    if board.is_in_check(color) {
                        println!("  {color} king is in check");
                    }
                }
            }
            Err(reason) => {
                rejected += 1;
                println!("{text}: rejected: {reason}");
            }
        }
    }

    info!(
        moves = board.move_log().len(),
        rejected,
        white_material = board.material(chess_rules::Color::White),
        black_material = board.material(chess_rules::Color::Black),
        "replay finished"
    );

    if cli.json {
        match serde_json::to_string_pretty(board.move_log()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("failed to serialize move log: {e}");
                return ExitCode::from(1);
            }
        }
    }

    if rejected > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
