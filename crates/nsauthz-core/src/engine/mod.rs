//! Decision engine.
//!
//! Rules run in a fixed order and the first match allows:
//! 1. the request path is an allowed non-resource path;
//! 2. the system account asks for a discovery verb;
//! 3. the caller is a service account whose namespace, minus its last
//!    `-`-delimited token, equals the target namespace minus its last token.
//!
//! Nothing matching means deny. The engine holds only its compiled
//! allowlists, so one instance can be shared across threads freely.

pub mod allowlist;
pub mod decision;

use std::sync::OnceLock;

use crate::config::schema::EngineSection;
use crate::error::Result;
use crate::identity::{strip_last_part, ParsedIdentity};
use crate::request::AccessRequest;

pub use allowlist::AllowList;
pub use decision::{Decision, DenyReason, Rule};

/// Non-resource paths any caller may hit for API discovery.
pub const DEFAULT_ALLOWED_PATHS: [&str; 3] = ["/api", "/apis", "/version"];
/// Verbs the system account may use in every namespace.
pub const DEFAULT_SYSTEM_ACTIONS: [&str; 2] = ["list", "watch"];
/// kube-dns runs as this account and must enumerate services cluster-wide.
pub const DEFAULT_SYSTEM_ACCOUNT: &str = "system:serviceaccount:kube-system:default";
/// Separator for the namespace affinity prefix.
pub const DEFAULT_NAMESPACE_SEPARATOR: &str = "-";

/// Compiled rule set. Construct once, then evaluate any number of requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionEngine {
    allowed_paths: AllowList,
    system_actions: AllowList,
    system_account: String,
    namespace_separator: String,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self {
            allowed_paths: AllowList::new(DEFAULT_ALLOWED_PATHS),
            system_actions: AllowList::new(DEFAULT_SYSTEM_ACTIONS),
            system_account: DEFAULT_SYSTEM_ACCOUNT.to_string(),
            namespace_separator: DEFAULT_NAMESPACE_SEPARATOR.to_string(),
        }
    }
}

impl DecisionEngine {
    /// Build from an engine config section. The section is validated first.
    pub fn new(section: &EngineSection) -> Result<Self> {
        section.validate()?;
        Ok(Self {
            allowed_paths: AllowList::new(section.allowed_paths.iter().cloned()),
            system_actions: AllowList::new(section.system_actions.iter().cloned()),
            system_account: section.system_account.clone(),
            namespace_separator: section.namespace_separator.clone(),
        })
    }

    /// Allow or deny. Never fails.
    pub fn evaluate<R: AccessRequest + ?Sized>(&self, req: &R) -> bool {
        self.decide(req).is_allowed()
    }

    /// Like [`evaluate`](Self::evaluate), but reports which rule decided.
    pub fn decide<R: AccessRequest + ?Sized>(&self, req: &R) -> Decision {
        if self.is_allowed_path(req) {
            return Decision::Allow(Rule::AllowedPath);
        }
        if self.is_allowed_system_action(req) {
            return Decision::Allow(Rule::SystemDiscovery);
        }
        self.namespace_affinity(req)
    }

    pub fn is_allowed_path<R: AccessRequest + ?Sized>(&self, req: &R) -> bool {
        self.allowed_paths.contains(req.path())
    }

    pub fn is_allowed_system_action<R: AccessRequest + ?Sized>(&self, req: &R) -> bool {
        req.identity() == self.system_account && self.system_actions.contains(req.action())
    }

    fn namespace_affinity<R: AccessRequest + ?Sized>(&self, req: &R) -> Decision {
        let identity = ParsedIdentity::parse(req.identity());
        let Some(user_ns) = identity.service_account_namespace() else {
            return Decision::Deny(DenyReason::NotServiceAccount);
        };

        let target_ns = req.namespace();
        if target_ns.is_empty() {
            return Decision::Deny(DenyReason::MissingNamespace);
        }

        let sep = self.namespace_separator.as_str();
        if strip_last_part(user_ns, sep) == strip_last_part(target_ns, sep) {
            Decision::Allow(Rule::NamespaceAffinity)
        } else {
            Decision::Deny(DenyReason::NamespaceMismatch)
        }
    }

    pub fn allowed_paths(&self) -> &[String] {
        self.allowed_paths.entries()
    }

    pub fn system_actions(&self) -> &[String] {
        self.system_actions.entries()
    }

    pub fn system_account(&self) -> &str {
        &self.system_account
    }

    pub fn namespace_separator(&self) -> &str {
        &self.namespace_separator
    }
}

/// Evaluate against the built-in rule set.
pub fn evaluate<R: AccessRequest + ?Sized>(req: &R) -> bool {
    static DEFAULT: OnceLock<DecisionEngine> = OnceLock::new();
    DEFAULT.get_or_init(DecisionEngine::default).evaluate(req)
}
