//! Star Battle CLI - load a puzzle, place stars and dots, inspect the result.
//!
//! ```text
//! main() -> load config -> build Board (dims, shapes, mode) -> apply placements
//!                                                               |
//!                                  show: grid + counts | field: JSON | check: solution
//! ```
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`), so stdout
//! stays clean for piping the field export.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use starbattle_config::{PuzzleDefinition, StarBattleConfig};
use starbattle_core::{Board, BoardDimensions, BoardMode, Cascade, Coordinate};

#[derive(Parser)]
#[command(name = "starbattle")]
#[command(about = "Inspect Star Battle boards")]
struct Cli {
    /// Config file to use instead of ~/.starbattle/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the grid, status counts and rule violations
    Show {
        /// Puzzle definition (JSON). Without one the board has no shapes.
        puzzle: Option<PathBuf>,
        #[command(flatten)]
        placements: Placements,
        /// Star the puzzle's bundled solution before other placements
        #[arg(long)]
        solution: bool,
        /// Build a probabilistic board
        #[arg(long)]
        probabilistic: bool,
    },
    /// Print the probability field of a probabilistic board as JSON
    Field {
        puzzle: Option<PathBuf>,
        #[command(flatten)]
        placements: Placements,
    },
    /// Verify that a puzzle's bundled solution completes the board (exit 1 if not)
    Check { puzzle: PathBuf },
}

#[derive(Args)]
struct Placements {
    /// Place a star and dot its neighbours. Repeatable. Applied before dots.
    #[arg(long = "star", value_name = "X,Y", value_parser = parse_coord)]
    stars: Vec<Coordinate>,
    /// Place a dot. Repeatable.
    #[arg(long = "dot", value_name = "X,Y", value_parser = parse_coord)]
    dots: Vec<Coordinate>,
}

impl Placements {
    fn apply(&self, board: &mut Board) -> Result<()> {
        for &coord in &self.stars {
            board
                .star(coord, Cascade::DotAdjacents)
                .with_context(|| format!("placing star at {coord}"))?;
        }
        for &coord in &self.dots {
            board
                .dot(coord)
                .with_context(|| format!("placing dot at {coord}"))?;
        }
        Ok(())
    }
}

fn parse_coord(raw: &str) -> Result<Coordinate, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y (got {raw:?})"))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid x in {raw:?}: {e}"))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid y in {raw:?}: {e}"))?;
    Ok(Coordinate::new(x, y))
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<StarBattleConfig> {
    match path {
        Some(path) => StarBattleConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display())),
        // A broken default config is logged by the loader and otherwise ignored.
        None => Ok(StarBattleConfig::load().ok().flatten().unwrap_or_default()),
    }
}

fn load_puzzle(path: Option<&Path>, dims: BoardDimensions) -> Result<Option<PuzzleDefinition>> {
    path.map(|path| {
        PuzzleDefinition::load(path, dims)
            .with_context(|| format!("loading puzzle {}", path.display()))
    })
    .transpose()
}

fn build_board(dims: BoardDimensions, puzzle: Option<&PuzzleDefinition>, mode: BoardMode) -> Board {
    let shapes = puzzle
        .map(|puzzle| puzzle.shapes().to_vec())
        .unwrap_or_default();
    Board::new(dims, shapes, mode)
}

fn star_solution(board: &mut Board, puzzle: &PuzzleDefinition) -> Result<()> {
    let Some(solution) = puzzle.solution() else {
        bail!("puzzle has no bundled solution");
    };
    // Every star goes down before any dot, so touching stars surface as
    // violations instead of a blocked placement.
    for &coord in solution {
        board
            .star(coord, Cascade::Skip)
            .with_context(|| format!("starring solution cell {coord}"))?;
    }
    for &coord in solution {
        board
            .dot_adjacents(coord)
            .with_context(|| format!("dotting around solution cell {coord}"))?;
    }
    Ok(())
}

fn print_summary(board: &Board) {
    print!("{board}");
    println!(
        "stars: {}  dots: {}  blanks: {}",
        board.num_stars(),
        board.num_dots(),
        board.num_blanks()
    );
    let violations = board.violations();
    if violations.is_empty() {
        let state = if board.is_complete() {
            "complete"
        } else {
            "valid"
        };
        println!("{state}");
    } else {
        for violation in violations {
            println!("violation: {violation}");
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;
    let dims = config.board_dimensions()?;

    match cli.command {
        Commands::Show {
            puzzle,
            placements,
            solution,
            probabilistic,
        } => {
            let puzzle = load_puzzle(puzzle.as_deref(), dims)?;
            let mode = if probabilistic || config.probabilistic() {
                BoardMode::Probabilistic
            } else {
                BoardMode::Deterministic
            };
            let mut board = build_board(dims, puzzle.as_ref(), mode);
            if solution {
                let Some(puzzle) = &puzzle else {
                    bail!("--solution needs a puzzle file");
                };
                star_solution(&mut board, puzzle)?;
            }
            placements.apply(&mut board)?;
            print_summary(&board);
        }
        Commands::Field { puzzle, placements } => {
            let puzzle = load_puzzle(puzzle.as_deref(), dims)?;
            let mut board = build_board(dims, puzzle.as_ref(), BoardMode::Probabilistic);
            placements.apply(&mut board)?;
            let field = board.probability_field()?;
            let json = if config.pretty_export() {
                serde_json::to_string_pretty(&field)?
            } else {
                serde_json::to_string(&field)?
            };
            println!("{json}");
        }
        Commands::Check { puzzle } => {
            let Some(puzzle) = load_puzzle(Some(puzzle.as_path()), dims)? else {
                bail!("no puzzle loaded");
            };
            let mut board = build_board(dims, Some(&puzzle), BoardMode::Deterministic);
            star_solution(&mut board, &puzzle)?;
            if board.is_complete() {
                println!("complete");
            } else {
                for violation in board.violations() {
                    println!("violation: {violation}");
                }
                println!("incomplete");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
