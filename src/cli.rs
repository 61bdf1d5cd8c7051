//! Command-line interface definition.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI entry point for hyprkeys.
#[derive(Parser, Debug)]
#[command(
    name = "hyprkeys",
    about = "Parse, inspect and regenerate Hyprland configuration blocks",
    version
)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every command
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Hyprland config file to read (default: ~/.config/hypr/hyprland.conf)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Read the bundled test configuration instead of the user's
    #[arg(short, long, global = true, conflicts_with = "config")]
    pub test: bool,

    /// Settings file (default: ~/.config/hyprkeys/settings.toml)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the parsed block tree as JSON
    Blocks(BlocksOpts),
    /// Re-serialize the configuration from its parsed blocks
    Generate(GenerateOpts),
    /// Validate brace nesting and round-trip fidelity
    Check,
    /// List top-level `$variable` declarations
    Variables,
    /// Print version information
    Version,
}

/// Options for the `blocks` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct BlocksOpts {
    /// Emit single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Options for the `generate` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct GenerateOpts {
    /// Output file (default: hyprland-generated.conf next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Spaces per nesting level, 0 to 16 (overrides settings)
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(0..=16))]
    pub indent: Option<usize>,

    /// Write to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}
