//! rf-payline — payline evaluator CLI
//!
//! Usage:
//!   rf-payline line   --config demos/classic_5x3.yaml --line 1,0,1,3,2          - Evaluate one payline
//!   rf-payline spin   --config demos/classic_5x3.yaml --matrix demos/spin.json - Evaluate a spin, print the ticket
//!   rf-payline decode B-3-0-02-1                                              - Decode a result code

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;

use rf_payline::{GameConfig, ResultCode, SymbolId};

#[derive(Parser)]
#[command(name = "rf-payline", about = "Slot payline evaluator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single payline
    Line {
        /// Game definition (.json, .yaml, .yml)
        #[arg(short, long)]
        config: PathBuf,
        /// Comma-separated symbol IDs, left to right
        #[arg(short, long, value_delimiter = ',', required = true)]
        line: Vec<SymbolId>,
        /// Winline ID reported in the result
        #[arg(long, default_value_t = 1)]
        id: u32,
    },
    /// Evaluate all paylines of a spin matrix and print the ticket
    Spin {
        /// Game definition (.json, .yaml, .yml)
        #[arg(short, long)]
        config: PathBuf,
        /// JSON file with the matrix as reels of rows, e.g. [[0,1,2],[1,0,3],...]
        #[arg(short, long)]
        matrix: PathBuf,
        /// Trigger type written into the ticket
        #[arg(short, long, default_value = "normal")]
        trigger: String,
    },
    /// Decode a result code
    Decode {
        /// e.g. B-3-0-02-1
        code: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Line { config, line, id } => {
            let game = load_game(&config)?;
            let result = game.evaluator().evaluate_line(id, &line);
            print_json(&result, cli.pretty)
        }
        Commands::Spin { config, matrix, trigger } => {
            let game = load_game(&config)?;
            let matrix = load_matrix(&matrix)?;
            let outcome = game.evaluator().evaluate_spin(&matrix, &game.paylines);
            if !outcome.skipped_lines.is_empty() {
                log::warn!("Skipped paylines: {:?}", outcome.skipped_lines);
            }
            print_json(&outcome.into_ticket(&trigger, &matrix), cli.pretty)
        }
        Commands::Decode { code } => {
            let decoded = ResultCode::parse(&code)?;
            print_json(&decoded, cli.pretty)
        }
    }
}

fn load_game(path: &Path) -> Result<GameConfig> {
    GameConfig::from_path(path).with_context(|| format!("Failed to load game config {}", path.display()))
}

fn load_matrix(path: &Path) -> Result<Vec<Vec<SymbolId>>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_matrix(&text).with_context(|| format!("Invalid matrix in {}", path.display()))
}

fn parse_matrix(text: &str) -> Result<Vec<Vec<SymbolId>>> {
    let matrix: Vec<Vec<SymbolId>> = serde_json::from_str(text)?;
    if matrix.is_empty() {
        bail!("matrix has no reels");
    }
    log::info!("Matrix: {} reels", matrix.len());
    Ok(matrix)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
