mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::partition;

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Partition(args) => partition::run(&cli, args),
    }
}

/// Route library tracing to stderr; `-v` flags raise the default level,
/// RUST_LOG overrides it entirely.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn main() -> anyhow::Result<()> { run() }
