use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use transit_structures::dataset::EntityKind;

#[derive(Parser, Debug)]
#[command(
    name = "transit-check",
    version,
    about = "Validate JSON files of transport network records",
    long_about = "Checks that every record in each file is a well-formed record of the given \
                  kind. A file holds a single JSON object or an array of objects.\n\n\
                  Kinds: station, airport, flight, airline, alliance, train_station, \
                  train_carrier, train, metro_station, metro_line, metro_line_branch."
)]
struct Args {
    /// Kind of record the files hold
    #[arg(short, long)]
    kind: EntityKind,

    /// Stop at the first file with an invalid record
    #[arg(long)]
    fail_fast: bool,

    /// Verbose output (show debug messages); RUST_LOG overrides
    #[arg(short, long)]
    verbose: bool,

    /// Files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(kind = %args.kind, files = args.files.len(), "Checking record files");

    let mut all_ok = true;

    for path in &args.files {
        match args.kind.check_file(path) {
            Ok(report) => {
                println!(
                    "{}: {}/{} valid {} records",
                    path.display(),
                    report.valid,
                    report.total(),
                    args.kind
                );
                for (index, err) in &report.failures {
                    println!("  record {index}: {}", err.reason());
                }
                if !report.is_ok() {
                    all_ok = false;
                }
            }
            Err(e) => {
                warn!(path = %path.display(), "Could not check file");
                println!("{}: {e}", path.display());
                all_ok = false;
            }
        }

        if !all_ok && args.fail_fast {
            break;
        }
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
