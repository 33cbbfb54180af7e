//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "texcv")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show progress and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory containing data/ and template/
    #[arg(short, long, global = true, default_value = ".")]
    pub project: PathBuf,

    /// Configuration file (default: <project>/texcv.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render and compile résumés to PDF
    Build {
        /// Language codes to build (default: configured default_language)
        languages: Vec<String>,

        /// Output directory (default: $TEXCV_OUTPUT_DIR, then <project>/output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep auxiliary files and copied template support files
        #[arg(long)]
        keep_intermediates: bool,
    },

    /// Render the LaTeX source without compiling
    Render {
        /// Language code (default: configured default_language)
        language: Option<String>,

        /// Output directory (default: $TEXCV_OUTPUT_DIR, then <project>/output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the document instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Check configuration, data, template and compiler
    Doctor {
        #[arg(long)]
        json: bool,
    },
}
