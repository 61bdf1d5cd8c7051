//! `hyprkeys` command-line entry point.
use anyhow::Result;
use clap::Parser;

use hyprkeys::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();
    let mut out = std::io::stdout().lock();

    match args.command {
        cli::Command::Blocks(opts) => commands::blocks::run(&args.global, &opts, &log, &mut out),
        cli::Command::Generate(opts) => {
            commands::generate::run(&args.global, &opts, &log, &mut out)
        }
        cli::Command::Check => commands::check::run(&args.global, &log, &mut out),
        cli::Command::Variables => commands::variables::run(&args.global, &log, &mut out),
        cli::Command::Version => commands::version::run(&mut out),
    }
}
