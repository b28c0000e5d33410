//! Treegen CLI - random filesystem command streams
//!
//! Usage:
//!   treegen -n 1000 -w 16 -d 8 > input.txt   # Random create/create_dir script
//!   treegen -n 1000 -o > expected.txt        # Matching "ok" lines
//!   treegen --seed 7 --stats                 # Reproducible, summary on stderr

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufWriter, Write};
use std::process::ExitCode;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;
use treegen::{DEFAULT_DEPTH, DEFAULT_FILES, DEFAULT_MAX_NAME_LEN, DEFAULT_WIDTH, GenConfig};

/// Generate a random list of create/create_dir commands with random
/// alphanumeric file names. The generated output can be used as test input
/// for a filesystem implementation, which should result in exactly N "ok"
/// lines as output.
#[derive(Parser, Debug)]
#[command(name = "treegen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Generate expected result instead of random input; this outputs N "ok"
    /// lines and every option except -n is ignored
    #[arg(short = 'o')]
    companion: bool,

    /// Number of files to be created
    #[arg(short = 'n', default_value_t = DEFAULT_FILES, value_parser = positive::<u64>)]
    files: u64,

    /// Maximum file name length
    #[arg(short = 'f', default_value_t = DEFAULT_MAX_NAME_LEN, value_parser = positive::<usize>)]
    max_name_len: usize,

    /// Use F as the exact length, not maximum
    #[arg(short = 'e')]
    exact_length: bool,

    /// Maximum number of children per directory
    #[arg(short = 'w', default_value_t = DEFAULT_WIDTH, value_parser = positive::<usize>)]
    width: usize,

    /// Maximum filesystem depth
    #[arg(short = 'd', default_value_t = DEFAULT_DEPTH, value_parser = positive::<usize>)]
    depth: usize,

    /// Seed the random generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON summary of the generated tree to stderr
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> GenConfig {
        let config = GenConfig::new()
            .files(self.files)
            .max_name_len(self.max_name_len)
            .exact_length(self.exact_length)
            .width(self.width)
            .depth(self.depth)
            .companion(self.companion);
        match self.seed {
            Some(seed) => config.seed(seed),
            None => config,
        }
    }
}

fn positive<T>(value: &str) -> std::result::Result<T, String>
where
    T: FromStr + Default + PartialEq,
{
    match value.parse::<T>() {
        Ok(n) if n != T::default() => Ok(n),
        _ => Err(format!("{} is an invalid positive integer", value)),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("treegen={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.config();

    // Validate up front so a failure leaves stdout untouched and the
    // warning precedes any output.
    let feasibility = treegen::feasibility::check(&config)?;
    if let Some(msg) = feasibility.warning() {
        eprintln!("warning: {}", msg);
    }

    tracing::info!(
        files = config.files,
        width = config.width,
        depth = config.depth,
        seed = ?config.seed,
        companion = config.companion,
        "generating"
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let report = treegen::generate_checked(&config, &feasibility, &mut out)
        .context("Failed to write command stream")?;
    out.flush().context("Failed to flush output")?;

    if args.stats {
        let json = serde_json::to_string_pretty(&report)?;
        eprintln!("{}", json);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
