mod app;
mod command;
mod config;
mod engine;
mod entry;
mod error;
mod input;
mod io;
mod layout;
mod state;
mod style;
mod view;
mod view_state;

use app::{Launch, TwinCmd};
use clap::Parser;
use eframe::egui;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Keyboard-driven dual-pane file manager
#[derive(Parser, Debug)]
#[command(name = "twincmd", version, about)]
struct Cli {
    /// Directory for the left pane (defaults to the current directory)
    path: Option<PathBuf>,

    /// Directory for the right pane (defaults to the left one)
    #[arg(long)]
    right: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn start_dir() -> PathBuf {
    env::current_dir()
        .ok()
        .or_else(|| directories::UserDirs::new().map(|ud| ud.home_dir().to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("/"))
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let left = cli.path.unwrap_or_else(start_dir);
    let right = cli.right.unwrap_or_else(|| left.clone());
    let launch = Launch {
        left,
        right,
        config_path: cli.config,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(layout::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(layout::MIN_WINDOW_SIZE)
            .with_title("twincmd"),
        ..Default::default()
    };

    eframe::run_native(
        "twincmd",
        options,
        Box::new(|cc| Ok(Box::new(TwinCmd::new(cc, launch)))),
    )
}
