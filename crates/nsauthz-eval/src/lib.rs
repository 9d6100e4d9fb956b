//! Line-oriented evaluator for the nsauthz decision engine.
//!
//! Reads one JSON [`Request`] per line and writes one JSON verdict per line.
//! A line that does not decode is denied and reported; it never stops the
//! stream. Useful for checking a rule set against recorded traffic before
//! deploying it behind the webhook.

use std::io::{BufRead, Write};

use serde::Serialize;

use nsauthz_core::error::{NsAuthzError, Result};
use nsauthz_core::{AccessRequest, DecisionEngine, Request};

/// Environment variable naming the engine config file.
pub const CONFIG_ENV: &str = "NSAUTHZ_CONFIG";

/// One output line.
#[derive(Debug, Serialize)]
pub struct Verdict {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Totals for a finished stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub allowed: u64,
    pub denied: u64,
    pub malformed: u64,
}

/// Engine from `NSAUTHZ_CONFIG` if set, else the built-in rules.
pub fn engine_from_env() -> Result<DecisionEngine> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            tracing::info!(path = ?path, "loading engine config");
            nsauthz_core::config::engine_from_file(path)
        }
        None => Ok(DecisionEngine::default()),
    }
}

/// Decode one line into a verdict. Bytes that are not UTF-8 JSON deny.
pub fn evaluate_line(engine: &DecisionEngine, line: impl AsRef<[u8]>) -> Verdict {
    match serde_json::from_slice::<Request>(line.as_ref()) {
        Ok(req) => {
            let decision = engine.decide(&req);
            tracing::debug!(
                identity = %req.identity(),
                action = %req.action(),
                namespace = %req.namespace(),
                allowed = decision.is_allowed(),
                reason = decision.reason(),
                "evaluated"
            );
            Verdict {
                allowed: decision.is_allowed(),
                reason: Some(decision.reason()),
                error: None,
            }
        }
        Err(e) => {
            let err = NsAuthzError::InvalidRequest(e.to_string());
            tracing::warn!(error = %err, "undecodable request line");
            Verdict {
                allowed: false,
                reason: None,
                error: Some(err.to_string()),
            }
        }
    }
}

/// Evaluate every non-blank line of `input`, writing verdicts to `output`.
///
/// Lines are split on raw `\n` so one undecodable line cannot end the stream;
/// only I/O failures abort.
pub fn run<R: BufRead, W: Write>(
    engine: &DecisionEngine,
    input: R,
    mut output: W,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for line in input.split(b'\n') {
        let mut line = line.map_err(|e| NsAuthzError::Internal(format!("read input failed: {e}")))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let verdict = evaluate_line(engine, &line);
        match (&verdict.error, verdict.allowed) {
            (Some(_), _) => summary.malformed += 1,
            (None, true) => summary.allowed += 1,
            (None, false) => summary.denied += 1,
        }

        let json = serde_json::to_string(&verdict)
            .map_err(|e| NsAuthzError::Internal(format!("encode verdict failed: {e}")))?;
        writeln!(output, "{json}")
            .map_err(|e| NsAuthzError::Internal(format!("write output failed: {e}")))?;
    }

    output
        .flush()
        .map_err(|e| NsAuthzError::Internal(format!("flush output failed: {e}")))?;
    Ok(summary)
}
