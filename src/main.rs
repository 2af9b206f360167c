//! # Maze Explorer Main Entry Point
//!
//! Parses the command line, sets up logging, and runs the macroquad scene loop.

use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;
use maze_explorer::{GameConfig, InputHandler, MazeError, MazeResult, SceneManager};
use std::path::PathBuf;
#[cfg(feature = "dev-tools")]
use tracing::Level;

/// Command line arguments for the maze explorer.
#[derive(Parser, Debug)]
#[command(name = "maze_explorer")]
#[command(about = "Find your way through a random maze, or let A* do it for you")]
#[command(version)]
struct Args {
    /// Random seed for maze generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maze height in cells (odd, at least 3)
    #[arg(long)]
    rows: Option<usize>,

    /// Maze width in cells (odd, at least 3)
    #[arg(long)]
    cols: Option<usize>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "AI Maze Explorer".to_string(),
        window_width: maze_explorer::config::WINDOW_WIDTH as i32,
        window_height: maze_explorer::config::WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> MazeResult<()> {
    let args = Args::parse();

    // Initialize logging
    initialize_logging(&args.log_level)?;

    info!("Starting Maze Explorer v{}", maze_explorer::VERSION);

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e);
        }
    };
    info!(
        "Maze size {}x{}, {} ticks per second",
        config.rows, config.cols, config.ticks_per_second
    );

    let mut scenes = SceneManager::new(config, InputHandler::new());
    scenes.run().await
}

/// Merges the config file (if any) with command line overrides.
fn build_config(args: &Args) -> MazeResult<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            GameConfig::load_from_file(path)?
        }
        None => GameConfig::default(),
    };

    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    config.validate()?;
    Ok(config)
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> MazeResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init()
            .map_err(|e| MazeError::Configuration(format!("logging setup failed: {}", e)))?;
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .try_init()
            .map_err(|e| MazeError::Configuration(format!("logging setup failed: {}", e)))?;
    }

    Ok(())
}
