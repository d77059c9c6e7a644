//! Command line front end for domain-checker.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_checker::{run, run_blocklist, ReadOptions, Result, RunSummary};

/// Domain checker CLI arguments.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "domain-checker",
    version,
    about = "Classify domains as Bad or Good against a forbidden-domain list"
)]
struct Args {
    /// Block list file (one domain per line, `#` comments). Queries are then
    /// read from stdin until EOF instead of the counted format.
    #[arg(short, long)]
    blocklist: Option<PathBuf>,

    /// Reject entries that are not well-formed host names.
    #[arg(long)]
    strict: bool,

    /// Keep domain case as read instead of lowercasing.
    #[arg(long)]
    keep_case: bool,

    /// Log level (overridden by RUST_LOG).
    #[arg(long, env = "DOMAIN_CHECKER_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Verdicts go to stdout, so logs stay on stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn execute(args: &Args) -> Result<RunSummary> {
    let opts = ReadOptions::default()
        .with_lowercase(!args.keep_case)
        .with_validate(args.strict);

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    match &args.blocklist {
        Some(path) => run_blocklist(path, stdin, stdout, &opts),
        None => run(stdin, stdout, &opts),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match execute(&args) {
        Ok(summary) => {
            debug!(
                forbidden = summary.forbidden,
                retained = summary.retained,
                queries = summary.queries,
                blocked = summary.blocked,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("domain-checker: {e}");
            ExitCode::FAILURE
        }
    }
}
