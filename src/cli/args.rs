//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Asset manifest generator for bundler build reports
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: assetmap.toml)
    #[arg(short = 'C', long, default_value = "assetmap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute the manifest for a recorded build report
    #[command(visible_alias = "b")]
    Build {
        /// Build report (JSON) to replay
        #[arg(value_hint = clap::ValueHint::FilePath)]
        report: PathBuf,

        /// Write the manifest into the output directory instead of stdout
        #[arg(short, long)]
        write: bool,

        #[command(flatten)]
        args: ManifestArgs,
    },

    /// Recompute and write the manifest whenever the report changes
    #[command(visible_alias = "w")]
    Watch {
        /// Build report (JSON) to watch
        #[arg(value_hint = clap::ValueHint::FilePath)]
        report: PathBuf,

        #[command(flatten)]
        args: ManifestArgs,
    },
}

/// Overrides shared by Build and Watch
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ManifestArgs {
    /// Manifest file name, relative to the output directory
    #[arg(short = 'o', long = "file-name")]
    pub file_name: Option<String>,

    /// Prefix for every manifest value (overrides config and report)
    #[arg(short, long = "public-path")]
    pub public_path: Option<String>,

    /// Prefix for every manifest key
    #[arg(short, long = "base-path")]
    pub base_path: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    pub const fn manifest_args(&self) -> &ManifestArgs {
        match &self.command {
            Commands::Build { args, .. } | Commands::Watch { args, .. } => args,
        }
    }

    pub const fn is_watch(&self) -> bool {
        matches!(self.command, Commands::Watch { .. })
    }
}
