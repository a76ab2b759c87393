use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use bodyscale::cli::{Cli, Commands};
use bodyscale::commands::{self, EvaluateConfig};
use bodyscale::config::{self, BodyscaleConfig};
use bodyscale::formatting::FormattingConfig;
use bodyscale::observability::{init_tracing, install_panic_hook};

fn main() -> Result<()> {
    init_tracing();
    install_panic_hook();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Form) {
        Commands::Form => commands::run_form(&settings),
        Commands::Evaluate {
            height,
            weight,
            format,
            plain,
        } => {
            let config = EvaluateConfig {
                height,
                weight,
                format,
                formatting: create_formatting_config(plain),
            };
            commands::evaluate_once(&config, &settings, &mut io::stdout(), &mut io::stderr())
        }
        Commands::Legend { format, plain } => {
            commands::print_legend(format, create_formatting_config(plain), &mut io::stdout())
        }
        Commands::Init { force } => {
            let dir = std::env::current_dir().context("Failed to get current directory")?;
            commands::init_config(&dir, force)
        }
    }
}

// An explicit --config must load; discovery falls back to defaults
fn load_settings(path: Option<&std::path::Path>) -> Result<BodyscaleConfig> {
    match path {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(config::load_config()),
    }
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
