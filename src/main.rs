//! # Snack Run Main Entry Point
//!
//! Parses the CLI, initializes logging, loads the generation config, and
//! runs the macroquad event loop: poll one input, apply it to the state
//! machine, project, draw.

use clap::Parser;
use log::info;
use macroquad::prelude::*;
use snackrun::{
    config::TILE_SIZE, project, GameState, GenerationConfig, InputHandler, MacroquadDisplay,
    PlayerInput, SnackrunResult,
};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Command line arguments for Snack Run.
#[derive(Parser, Debug)]
#[command(name = "snackrun")]
#[command(about = "A tile-based arcade game about grabbing the good snacks")]
#[command(version)]
struct Args {
    /// Random seed for item placement (defaults to wall-clock seconds)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Path to a JSON generation config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main("Snack Run")]
async fn main() -> SnackrunResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);
    info!("Starting Snack Run v{}", snackrun::VERSION);

    let config = load_config(&args)?;
    info!(
        "board {}x{}, {} items per level, seed {}",
        config.map_width, config.map_height, config.items_per_level, config.seed
    );

    run_game(config).await
}

/// Sets up env_logger at the requested level (unknown names fall back to
/// info).
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();
}

/// Builds the generation config from the CLI: an optional JSON file, with
/// `--seed` overriding whatever the file (or the clock) chose.
fn load_config(args: &Args) -> SnackrunResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw)?
        }
        None => GenerationConfig::new(fallback_seed()),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn fallback_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Runs the main game loop.
async fn run_game(config: GenerationConfig) -> SnackrunResult<()> {
    let grid = config.grid();
    request_new_screen_size(
        grid.width() as f32 * TILE_SIZE,
        grid.height() as f32 * TILE_SIZE,
    );

    // Validates the config before any level starts
    let mut state = GameState::new(config)?;

    let input_handler = InputHandler::new();
    let display = MacroquadDisplay::new();

    loop {
        if let Some(input) = input_handler.get_input() {
            match input {
                PlayerInput::Quit => {
                    info!("player quit");
                    break;
                }
                other => {
                    if let Some(command) = other.to_command() {
                        state = state.apply(command)?;
                    }
                }
            }
        }

        display.render(&project(&state, display.anim_frame()));
        next_frame().await;
    }

    Ok(())
}
