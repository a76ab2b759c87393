use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "bodyscale")]
#[command(about = "Body-mass index form with validation and banding", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .bodyscale.toml)
    #[arg(long, global = true, env = "BODYSCALE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive form (default)
    Form,

    /// Evaluate one height/weight pair and print the result
    Evaluate {
        /// Height in centimeters
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Weight in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// Print the category bands
    Legend {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// Write a default .bodyscale.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
