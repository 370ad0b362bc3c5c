//! CLI entry point for hydrate

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use hydrate::{Console, HydrateError, RunConfig, run_traversal};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "HYDRATE_LOG";

#[derive(Parser, Debug)]
#[command(name = "hydrate")]
#[command(about = "Force a cloud-sync client to download files by reading the start of each one")]
#[command(version)]
struct Args {
    /// Directory to hydrate
    #[arg(value_name = "root-directory-path")]
    path: PathBuf,

    /// Pass the literal word `debug` to print each file as it is opened
    #[arg(value_name = "debug")]
    mode: Option<OsString>,

    /// Number of worker threads
    /// (0 = auto-detect from available parallelism)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Descend only N levels deep (1 = the root directory's own files)
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,
}

impl Args {
    fn debug(&self) -> bool {
        self.mode.as_deref() == Some(OsStr::new("debug"))
    }
}

fn setup_logging(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("hydrate=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        if !e.use_stderr() {
            // --help / --version
            e.exit();
        }
        eprintln!("hydrate: argument parsing error: {}", e);
        process::exit(1);
    });

    let debug = args.debug();
    setup_logging(debug);

    let config = RunConfig {
        debug,
        workers: args.jobs,
        max_depth: args.level,
    };

    let console = Console::stdio();
    if let Err(e) = run_traversal(&args.path, &config, &console) {
        let message = match &e {
            HydrateError::InvalidRoot { .. } => e.to_string(),
            HydrateError::Walk(walk) => format!("Filesystem error: {}", walk),
            _ => format!("Error: {}", e),
        };
        console.err_line(&message);
        process::exit(1);
    }
}
