#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use shoreline_core::logging::LoggingBuilder;
use shoreline_core::{ConfigOverrides, ViewConfig};

/// Global view configuration, set from the command line
static VIEW_CONFIG: OnceLock<ViewConfig> = OnceLock::new();

/// Get the view configuration (set from command line or default)
pub fn get_view_config() -> ViewConfig {
    VIEW_CONFIG.get().cloned().unwrap_or_default()
}

/// Shoreline - Portfolio landing page
#[derive(Parser, Debug)]
#[command(name = "shoreline-desktop")]
#[command(about = "Shoreline - animated portfolio landing page")]
struct Args {
    /// JSON config file (default: <config dir>/shoreline/config.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for decoration placement (reproducible layouts)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pin the local hour (0-23)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    hour: Option<u32>,

    /// Pin the local month (1-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Override the OS colour scheme preference
    #[arg(long)]
    prefers_dark: Option<bool>,

    /// Role rotation period in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    rotation_ms: Option<u64>,

    /// Log filter directive (e.g. "shoreline=debug"); RUST_LOG is used otherwise
    #[arg(long)]
    log_filter: Option<String>,

    /// Also write JSON-lines logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Suppress console logging
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            seed: self.seed,
            fixed_hour: self.hour,
            fixed_month: self.month,
            prefers_dark: self.prefers_dark,
            rotation_period_ms: self.rotation_ms,
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("shoreline").join("config.json");
    path.exists().then_some(path)
}

/// Load the config file (explicit or default), falling back to defaults on
/// any error, then apply command line overrides.
fn resolve_config(args: &Args) -> ViewConfig {
    let file_config = match args.config.clone().or_else(default_config_path) {
        Some(path) => match ViewConfig::load(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config {:?}: {}", path, e);
                ViewConfig::default()
            }
        },
        None => ViewConfig::default(),
    };

    let config = file_config.overlay(args.overrides());
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            tracing::warn!("Invalid view config, using defaults: {}", e);
            ViewConfig::default()
        }
    }
}

fn logging_for(args: &Args) -> LoggingBuilder {
    let mut logging = LoggingBuilder::new();
    if let Some(ref filter) = args.log_filter {
        logging = logging.with_filter(filter.clone());
    }
    if let Some(ref path) = args.log_file {
        logging = logging.with_json_file(path.clone());
    }
    if args.quiet {
        logging = logging.no_console();
    }
    logging
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging_for(&args).init() {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let config = resolve_config(&args);
    tracing::info!(
        seed = ?config.seed,
        hour = ?config.fixed_hour,
        month = ?config.fixed_month,
        prefers_dark = ?config.prefers_dark,
        "Starting Shoreline"
    );

    // Store config globally
    let _ = VIEW_CONFIG.set(config);

    let window_width = 1280.0;
    let window_height = 800.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Shoreline")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_defaults() {
        let args = Args::parse_from([
            "shoreline-desktop",
            "--seed",
            "7",
            "--hour",
            "22",
            "--month",
            "12",
            "--prefers-dark",
            "false",
            "--config",
            "/nonexistent/shoreline.json",
        ]);
        let config = resolve_config(&args);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.fixed_hour, Some(22));
        assert_eq!(config.fixed_month, Some(12));
        assert_eq!(config.prefers_dark, Some(false));
        assert_eq!(config.rotation_period_ms, 2000);
    }

    #[test]
    fn quiet_flag_disables_console_logging() {
        let args = Args::parse_from(["shoreline-desktop", "--quiet", "--log-file", "/tmp/view.jsonl"]);
        let logging = logging_for(&args);
        assert!(!logging.console_enabled());
        assert_eq!(logging.json_file(), Some(std::path::Path::new("/tmp/view.jsonl")));

        let args = Args::parse_from(["shoreline-desktop"]);
        assert!(logging_for(&args).console_enabled());
    }

    #[test]
    fn out_of_range_flags_are_rejected() {
        assert!(Args::try_parse_from(["shoreline-desktop", "--hour", "24"]).is_err());
        assert!(Args::try_parse_from(["shoreline-desktop", "--month", "0"]).is_err());
        assert!(Args::try_parse_from(["shoreline-desktop", "--rotation-ms", "0"]).is_err());
    }
}
