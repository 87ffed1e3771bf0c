#![warn(non_snake_case)]
//! # Room Map Maker
//!
//! A grid-based room map editor for text adventures. Size a grid, click a
//! tile to edit its room, drag between tiles to connect rooms. The map is
//! written as JSON when the editor closes.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use room_map_maker::config::EditorSettings;
use room_map_maker::document::Document;
use room_map_maker::editor::Editor;
use room_map_maker::ui::run_main_window;

#[derive(Parser)]
#[command(name = "room-map-maker")]
#[command(about = "Author grid-based room maps for text adventures")]
#[command(version)]
struct Cli {
    /// Grid width; with --height, skips the size prompt
    #[arg(long)]
    width: Option<usize>,

    /// Grid height; with --width, skips the size prompt
    #[arg(long)]
    height: Option<usize>,

    /// Where to write the map on exit (default: map1.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Start from an existing map file instead of a blank grid
    #[arg(long, conflicts_with_all = ["width", "height"])]
    open: Option<PathBuf>,

    /// Editor settings file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Room Map Maker starting...");

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => EditorSettings::load(path)?,
        None => EditorSettings::default(),
    };
    if let Some(output) = cli.output {
        settings.output_path = output;
    }

    let editor = match (&cli.open, cli.width, cli.height) {
        (Some(path), _, _) => Editor::with_document(Document::load_from_path(path)?, settings),
        (None, Some(width), Some(height)) => {
            let mut editor = Editor::new(settings);
            editor.create_map(width, height)?;
            editor
        }
        (None, width, height) => {
            if width.is_some() || height.is_some() {
                warn!("Both --width and --height are needed to skip the size prompt");
            }
            Editor::new(settings)
        }
    };

    run_main_window(editor)?;
    info!("Room Map Maker exiting.");
    Ok(())
}
