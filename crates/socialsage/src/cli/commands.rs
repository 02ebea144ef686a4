//! CLI command definitions.

use clap::{Parser, Subcommand};
use socialsage::Tone;
use std::path::PathBuf;

/// SocialSage - draft social posts and images from a single idea
#[derive(Parser, Debug)]
#[command(name = "socialsage")]
#[command(about = "Draft Facebook, Twitter / X and Instagram posts with matching images", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draft posts for every platform and render their images
    Generate {
        /// Product or campaign idea to write about
        #[arg(long)]
        idea: String,

        /// Tone of voice (professional, witty, urgent, friendly, luxury)
        #[arg(long, default_value_t = Tone::Professional)]
        tone: Tone,

        /// Directory to save images to (defaults to the configured output directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Regenerate each failed image once before finishing
        #[arg(long)]
        retry_failed: bool,

        /// Print the final state as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the available tones
    Tones,
}
