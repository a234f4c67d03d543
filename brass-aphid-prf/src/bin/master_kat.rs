//! Check master secret derivation against a known-answer vector corpus.
//!
//! ```bash
//! master-kat resources/masterdata.txt
//! MASTER_KAT_VECTORS=/path/to/vectors.txt master-kat --json
//! RUST_LOG=debug master-kat --strict --log-file kat.log
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use brass_aphid_prf::vectors::{run_file, RecordMode};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "master-kat")]
#[command(about = "Known-answer tests for TLS master secret derivation")]
#[command(version)]
struct Args {
    /// Vector corpus to check
    #[arg(env = "MASTER_KAT_VECTORS", default_value = "resources/masterdata.txt")]
    vectors: PathBuf,

    /// Start every record empty instead of carrying fields over from the
    /// previous one
    #[arg(long)]
    strict: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Logs go to stderr, or to `log_file`, so that stdout only carries the result.
fn init_logging(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let Some(path) = log_file else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("--log-file {} is not a file", path.display()))?;
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    registry
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();
    Ok(Some(guard))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_logging(args.log_file.as_deref())?;

    let mode = if args.strict {
        RecordMode::Strict
    } else {
        RecordMode::Carry
    };

    let summary = match run_file(&args.vectors, mode) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!(line = e.line(), "{e}");
            return Err(e).with_context(|| format!("checking {}", args.vectors.display()));
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("OK: {} tests", summary.records);
    }
    Ok(())
}
