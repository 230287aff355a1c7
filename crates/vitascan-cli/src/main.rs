//! Vitascan — turns résumé and job-description documents into structured
//! profiles, one JSON envelope line per invocation.

use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use vitascan_core::{Envelope, Error};
use vitascan_runtime::Analyzer;

#[derive(Clone, Copy)]
enum Mode {
    Resume,
    Job,
}

fn usage() {
    println!("Vitascan — résumé and job-description profiler");
    println!();
    println!("Usage: vitascan <command> <document-path>");
    println!();
    println!("Commands:");
    println!("  resume <path>   Analyze a résumé (candidate profile)");
    println!("  job <path>      Analyze a job description (requirement profile)");
    println!();
    println!("Prints one JSON envelope line on stdout. Exit code 0 only when");
    println!("the envelope reports success.");
}

/// Run one analysis with the all-or-nothing contract: a panic anywhere in
/// the pipeline becomes a parseable UnexpectedFailure envelope, never a
/// raw crash.
fn run(mode: Mode, path: PathBuf) -> Envelope {
    tracing::debug!(path = %path.display(), "analyzing document");

    let outcome = panic::catch_unwind(AssertUnwindSafe(move || {
        let analyzer = Analyzer::new();
        match mode {
            Mode::Resume => analyzer.analyze_resume(&path),
            Mode::Job => analyzer.analyze_job(&path),
        }
    }));

    match outcome {
        Ok(envelope) => envelope,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Envelope::from(Error::Unexpected(message))
        }
    }
}

fn emit_and_exit(envelope: Envelope) -> ! {
    println!("{}", envelope.to_line());
    std::process::exit(if envelope.success { 0 } else { 1 });
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr: stdout carries exactly the envelope line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mode = match args.get(1).map(String::as_str) {
        Some("resume") => Mode::Resume,
        Some("job") => Mode::Job,
        Some("--help") | Some("-h") | Some("help") => {
            usage();
            return Ok(());
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            emit_and_exit(Envelope::failure(format!("Unknown command: {}", other)));
        }
        None => emit_and_exit(Envelope::from(Error::MissingArgument)),
    };

    let path = match args.get(2) {
        Some(p) => PathBuf::from(p),
        None => emit_and_exit(Envelope::from(Error::MissingArgument)),
    };

    emit_and_exit(run(mode, path));
}
