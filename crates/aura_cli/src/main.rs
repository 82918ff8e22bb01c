//! Aura theme CLI
//!
//! List, render, audit and select themes from the terminal.

mod commands;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use aura_theme::{AuraConfig, FileStore, ThemeRegistry, ThemeState, ThemeVariables};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::OutputFormat;

#[derive(Parser)]
#[command(name = "aura", version, about = "Derive, inspect and select Aura themes")]
struct Cli {
    /// Path to aura.toml (or a directory containing it)
    #[arg(short, long, global = true, default_value = "aura.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available themes
    List,

    /// Print a theme's resolved tokens
    Show {
        /// Theme name
        name: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Report WCAG contrast; fails if any theme misses AA for body text
    Check {
        /// Theme name (all themes when omitted)
        name: Option<String>,
    },

    /// Derive a theme from seed variables without registering it
    Generate {
        #[arg(long, default_value = "custom")]
        name: String,
        #[arg(long)]
        primary: String,
        #[arg(long)]
        secondary: String,
        #[arg(long)]
        base: String,
        #[arg(long)]
        text: String,
        #[arg(long, default_value_t = 0.05)]
        glass: f64,
        #[arg(long, default_value_t = 0.3)]
        mystical: f64,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Persist the selected theme
    Select {
        /// Theme name
        name: String,
    },

    /// Print the selected theme name
    Current,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Registry and persisted selection described by the config file
fn load_state(config_path: &Path) -> Result<ThemeState> {
    let config = AuraConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    let registry = config
        .build_registry()
        .with_context(|| format!("Invalid theme configuration in {}", config_path.display()))?;

    let config_dir = if config_path.is_dir() {
        config_path
    } else {
        config_path.parent().unwrap_or_else(|| Path::new("."))
    };
    let store = FileStore::new(config.storage_path(config_dir));
    tracing::debug!("Theme selection stored in {}", store.path().display());

    Ok(ThemeState::new(Arc::new(registry), Box::new(store)))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List => {
            let state = load_state(&cli.config)?;
            print!("{}", commands::render_list(&state));
        }
        Commands::Show { name, format } => {
            let state = load_state(&cli.config)?;
            let theme = state
                .registry()
                .get(&name)
                .with_context(|| format!("Unknown theme `{name}`. Run `aura list` to see available themes."))?;
            println!("{}", commands::render_theme(&theme, format)?);
        }
        Commands::Check { name } => {
            let state = load_state(&cli.config)?;
            let registry: &ThemeRegistry = state.registry();
            let themes = match name {
                Some(name) => vec![registry
                    .get(&name)
                    .with_context(|| format!("Unknown theme `{name}`"))?],
                None => registry.iter().cloned().collect(),
            };

            let mut all_pass = true;
            for theme in &themes {
                print!("{}", commands::render_report(theme));
                all_pass &= theme.contrast.passes_aa();
            }
            if !all_pass {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Generate {
            name,
            primary,
            secondary,
            base,
            text,
            glass,
            mystical,
            format,
        } => {
            let variables = ThemeVariables::new(primary, secondary, base, text, glass, mystical);
            variables.validate().context("Invalid theme variables")?;
            let theme = aura_theme::generate_theme(&name, &variables);
            if !theme.contrast.passes_aa() {
                tracing::warn!(
                    "{} misses WCAG AA for body text (min ratio {:.2})",
                    name,
                    theme.contrast.min_text_ratio()
                );
            }
            println!("{}", commands::render_theme(&theme, format)?);
        }
        Commands::Select { name } => {
            let state = load_state(&cli.config)?;
            state
                .set_theme(&name)
                .with_context(|| format!("Failed to select `{name}`"))?;
            println!("Selected {name}");
        }
        Commands::Current => {
            let state = load_state(&cli.config)?;
            println!("{}", state.theme_name());
        }
    }

    Ok(ExitCode::SUCCESS)
}
