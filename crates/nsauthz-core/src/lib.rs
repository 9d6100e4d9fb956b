//! nsauthz core: the authorization decision engine behind a Kubernetes
//! webhook authorizer.
//!
//! Given a caller identity and a requested action the engine answers allow or
//! deny. Requests reach it through the [`AccessRequest`] trait so any webhook
//! layer can hand over its own request type; the engine never sees the wire
//! format.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Evaluation is total:
//! malformed input ends in a deny, never in a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod engine;
pub mod error;
pub mod identity;
pub mod request;

pub use engine::{evaluate, Decision, DecisionEngine, DenyReason, Rule};
pub use error::{NsAuthzError, Result};
pub use identity::{strip_last_part, ParsedIdentity, ServiceAccount};
pub use request::{AccessRequest, Request};
