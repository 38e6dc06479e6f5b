use clap::{Parser, Subcommand};
use tracing::debug;
use zutil_dns_domain::{CliOverrides, PointerMode};

mod bootstrap;
mod commands;

#[derive(Parser)]
#[command(name = "zutil-dns")]
#[command(version)]
#[command(about = "Decode captured DNS messages and encode queries")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Compression pointer handling (offset, cached, resolve)
    #[arg(long, global = true)]
    pointer_mode: Option<PointerMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode one message from hex, a file or stdin
    Decode(commands::DecodeArgs),
    /// Encode a standard query and print it as hex
    Query(commands::QueryArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        pointer_mode: cli.pointer_mode,
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);
    debug!(
        pointer_mode = %config.codec.pointer_mode,
        overflow_policy = %config.codec.overflow_policy,
        "Configuration loaded"
    );

    let output = match &cli.command {
        Command::Decode(args) => commands::decode(args, &config.codec)?,
        Command::Query(args) => commands::query(args, &config.codec)?,
    };
    println!("{}", output);
    Ok(())
}
