#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod layouts;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use bizcard_core::config::{default_data_dir, instance_data_dir};
use bizcard_core::AppConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Config loaded at startup, before the window opens
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the startup config (defaults if it was never loaded)
pub fn get_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

/// BizCard - digital business cards
#[derive(Parser, Debug)]
#[command(name = "bizcard-desktop")]
#[command(about = "BizCard - create, customize and share digital business cards")]
struct Args {
    /// Data directory for preferences and config (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: bizcard-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Config file (default: <data-dir>/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn setup_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

fn main() {
    let args = Args::parse();

    // Determine data directory and display name
    let (data_dir, display_name) = if let Some(dir) = args.data_dir {
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("custom")
            .to_string();
        (dir, name)
    } else if let Some(ref name) = args.name {
        (instance_data_dir(name), name.clone())
    } else {
        (default_data_dir(), String::new())
    };

    let config_path = args
        .config
        .unwrap_or_else(|| AppConfig::path_in(&data_dir));
    let (config, config_error) = match AppConfig::load_or_create(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    setup_logging(&config.log_level);
    if let Some(e) = config_error {
        tracing::warn!(path = %config_path.display(), "Using default config: {}", e);
    }

    // Store globals before the first component mounts
    let _ = DATA_DIR.set(data_dir.clone());
    let _ = APP_CONFIG.set(config);

    let title = if !display_name.is_empty() {
        format!("BizCard - {}", display_name)
    } else {
        "BizCard".to_string()
    };

    tracing::info!("Starting '{}' with data dir: {:?}", title, data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
