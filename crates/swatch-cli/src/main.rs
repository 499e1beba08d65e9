mod commands;
mod source;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use swatch_core::{AppConfig, Environment};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "swatch")]
#[command(about = "Resolve product variation selections")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Where to read the catalog from.
#[derive(Debug, Args)]
struct CatalogArgs {
    /// Catalog file; defaults to `SWATCH_CATALOG_PATH`
    path: Option<PathBuf>,

    /// Read a WooCommerce variable-product JSON document instead of a catalog file
    #[arg(long)]
    woo: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load a catalog and report whether it is valid
    Validate {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Apply a selection and print the resolved state and display payload as JSON
    Resolve {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Choose an option, as `axis=slug`; repeatable, applied in order
        #[arg(long = "select", value_name = "AXIS=SLUG", value_parser = parse_choice)]
        select: Vec<(String, String)>,

        /// Start from an empty selection instead of the default attributes
        #[arg(long)]
        no_defaults: bool,
    },
    /// Print every axis option and whether it is still selectable
    Options {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Choose an option, as `axis=slug`; repeatable, applied in order
        #[arg(long = "select", value_name = "AXIS=SLUG", value_parser = parse_choice)]
        select: Vec<(String, String)>,

        /// Start from an empty selection instead of the default attributes
        #[arg(long)]
        no_defaults: bool,
    },
}

/// Parses `axis=slug`. An empty slug (`axis=`) clears the axis.
fn parse_choice(raw: &str) -> Result<(String, String), String> {
    let (axis, slug) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected AXIS=SLUG, got '{raw}'"))?;
    let axis = axis.trim();
    if axis.is_empty() {
        return Err(format!("missing axis name in '{raw}'"));
    }
    Ok((axis.to_string(), slug.trim().to_string()))
}

/// How log lines are laid out on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogStyle {
    /// Source file and line on every event.
    Verbose,
    /// One short line per event, no colour.
    Compact,
}

fn log_style(env: &Environment) -> LogStyle {
    match env {
        Environment::Development => LogStyle::Verbose,
        Environment::Test | Environment::Production => LogStyle::Compact,
    }
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    match log_style(&config.env) {
        LogStyle::Verbose => builder.with_file(true).with_line_number(true).init(),
        LogStyle::Compact => builder.compact().with_ansi(false).init(),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = swatch_core::load_app_config_from_env()?;
    init_tracing(&config)?;
    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Some(Commands::Validate { catalog }) => commands::run_validate(&config, &catalog),
        Some(Commands::Resolve {
            catalog,
            select,
            no_defaults,
        }) => commands::run_resolve(&config, &catalog, &select, no_defaults),
        Some(Commands::Options {
            catalog,
            select,
            no_defaults,
        }) => commands::run_options(&config, &catalog, &select, no_defaults),
        None => {
            println!("swatch: run with --help to list commands");
            Ok(())
        }
    }
}
