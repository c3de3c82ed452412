mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compress {
            policy,
            input,
            output,
            api_key,
            model,
            offline,
        } => commands::compress::run(
            policy,
            input.as_deref(),
            output.as_deref(),
            api_key,
            model,
            offline,
        ),
        Commands::Decompress {
            policy,
            input,
            output,
            api_key,
            model,
        } => commands::decompress::run(policy, input.as_deref(), output.as_deref(), api_key, model),
        Commands::Stats { input } => commands::stats::run(&input),
        Commands::Version => commands::version::run(),
    }
}
