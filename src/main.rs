//! listbind - Entry Point

use clap::Parser;
use listbind::catalog::{catalog_constructor, read_catalog};
use listbind::config::ResolvedConfig;
use listbind::controller::ListController;
use listbind::model::AppError;
use listbind::source::ListSource;
use listbind::view::{ColorConfig, ViewOptions};
use std::path::PathBuf;
use tracing::info;

/// listbind - browse a JSONL catalog as a sectioned list
#[derive(Parser, Debug)]
#[command(name = "listbind")]
#[command(version)]
#[command(about = "Terminal viewer for sectioned lists bound to a JSONL catalog")]
pub struct Args {
    /// Path to JSONL catalog (falls back to catalog_path from the config file)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Assert on stale coordinates (debug builds)
    #[arg(long, conflicts_with = "lenient")]
    pub strict: bool,

    /// Only log stale coordinates, never assert
    #[arg(long)]
    pub lenient: bool,

    /// Hide section footers
    #[arg(long)]
    pub no_footers: bool,
}

impl Args {
    /// Fail-fast override, `None` when neither flag was given.
    fn fail_fast_override(&self) -> Option<bool> {
        match (self.strict, self.lenient) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Resolve configuration with the full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = listbind::config::load_config_with_precedence(args.config.clone())?;
    let merged = listbind::config::merge_config(config_file);
    let with_env = listbind::config::apply_env_overrides(merged);

    let hide_footers_override = args.no_footers.then_some(true);
    Ok(listbind::config::apply_cli_overrides(
        with_env,
        args.file.clone(),
        args.fail_fast_override(),
        hide_footers_override,
    ))
}

fn run(args: Args) -> Result<(), AppError> {
    // Set NO_COLOR env var if --no-color flag is passed
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let config = resolve_config(&args)?;

    listbind::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let catalog_path = config.catalog_path.clone().ok_or(AppError::NoCatalog)?;

    // Fail before touching the terminal if the catalog is unusable
    let entries = read_catalog(&catalog_path)?;
    info!(path = %catalog_path.display(), entries = entries.len(), "Catalog opened");

    let mut source = ListSource::from_config(&config);
    source.set_constructor(catalog_constructor(catalog_path));
    let controller = ListController::new(source);

    let options = ViewOptions::new(
        config.show_footers,
        ColorConfig::from_env_and_args(args.no_color),
    );
    listbind::view::run_with_controller(controller, options)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())?;
    Ok(())
}
