//! qwhash CLI
//!
//! Quantum-walk hash command-line tool.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::{check_mode, hash_inputs, resolve_config, ModeArg, OutputFormat, PolicyArg};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "qwhash")]
#[command(about = "Experimental hash built on a simulated discrete-time quantum walk", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (`-` reads stdin)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Hash this string instead of files
    #[arg(short, long, conflicts_with = "files")]
    text: Option<String>,

    /// Digest output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
    format: OutputFormat,

    /// Print elapsed time per input to stderr
    #[arg(long)]
    timing: bool,

    #[command(flatten)]
    hash: HashArgs,
}

/// Options shared by hashing and checking.
#[derive(Args, Debug, Default)]
pub struct HashArgs {
    /// JSON file with a `HashConfig`
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Hash construction
    #[arg(short, long, global = true, value_enum)]
    mode: Option<ModeArg>,

    /// Angle selection policy (standard angle set)
    #[arg(short, long, global = true, value_enum)]
    policy: Option<PolicyArg>,

    /// Block length for `--mode block`
    #[arg(short, long, global = true)]
    block_size: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.hash.verbose);

    let config = resolve_config(&cli.hash)?;

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file, &config)?,
        None => {
            if cli.files.is_empty() && cli.text.is_none() {
                eprintln!("Error: No input specified");
                eprintln!("Usage: qwhash [FILE]... | qwhash --text STRING | qwhash --help");
                std::process::exit(1);
            }

            hash_inputs(
                &cli.files,
                cli.text.as_deref(),
                &config,
                cli.format,
                cli.timing,
            )?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "qwhash=debug,warn",
        _ => "qwhash=trace,debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
