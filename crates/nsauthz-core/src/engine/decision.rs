//! Outcome of one evaluation.

use std::fmt;

/// Allow rule that matched, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-resource discovery path such as `/api` or `/version`.
    AllowedPath,
    /// Discovery verb from the in-cluster DNS service account.
    SystemDiscovery,
    /// Service account namespace and target namespace share a prefix.
    NamespaceAffinity,
}

/// Why no rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// Identity is not `system:serviceaccount:<ns>:<name>`.
    NotServiceAccount,
    /// Request is not namespace-scoped.
    MissingNamespace,
    /// Stripped namespaces differ.
    NamespaceMismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow(Rule),
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow(_))
    }

    /// Stable reason string for webhook responses and logs.
    pub fn reason(self) -> &'static str {
        match self {
            Decision::Allow(Rule::AllowedPath) => "allowed non-resource path",
            Decision::Allow(Rule::SystemDiscovery) => "system account discovery",
            Decision::Allow(Rule::NamespaceAffinity) => "namespace affinity",
            Decision::Deny(DenyReason::NotServiceAccount) => "not a service account",
            Decision::Deny(DenyReason::MissingNamespace) => "request has no namespace",
            Decision::Deny(DenyReason::NamespaceMismatch) => "namespace mismatch",
        }
    }
}

impl From<Decision> for bool {
    fn from(d: Decision) -> bool {
        d.is_allowed()
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_allowed() { "allow" } else { "deny" };
        write!(f, "{verdict}: {}", self.reason())
    }
}
