//! nsauthz-eval
//!
//! stdin: JSON requests, one per line. stdout: JSON verdicts, one per line.
//! Logs go to stderr, filtered by `RUST_LOG`.

use std::io;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use nsauthz_eval::{engine_from_env, run};

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let engine = match engine_from_env() {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "engine setup failed");
            return ExitCode::from(2);
        }
    };

    match run(&engine, io::stdin().lock(), io::stdout().lock()) {
        Ok(summary) => {
            tracing::info!(
                allowed = summary.allowed,
                denied = summary.denied,
                malformed = summary.malformed,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "evaluation aborted");
            ExitCode::FAILURE
        }
    }
}
