//! Request abstraction consumed by the decision engine.
//!
//! The webhook layer decodes its `SubjectAccessReview` payload however it
//! likes and exposes the result through [`AccessRequest`]. [`Request`] is a
//! plain owned implementation for callers that have nothing better.

use serde::{Deserialize, Serialize};

/// Read-only view of an authorization request.
pub trait AccessRequest {
    /// Full caller identity, e.g. `system:serviceaccount:ns:name`.
    fn identity(&self) -> &str;
    /// Requested verb (`get`, `list`, `watch`, ...).
    fn action(&self) -> &str;
    /// Non-resource URL path; empty for resource requests.
    fn path(&self) -> &str;
    /// Target namespace; empty when the request is not namespace-scoped.
    fn namespace(&self) -> &str;
    /// Whether the request targets an API resource rather than a URL path.
    fn is_resource_request(&self) -> bool;
}

impl<T: AccessRequest + ?Sized> AccessRequest for &T {
    fn identity(&self) -> &str {
        (**self).identity()
    }
    fn action(&self) -> &str {
        (**self).action()
    }
    fn path(&self) -> &str {
        (**self).path()
    }
    fn namespace(&self) -> &str {
        (**self).namespace()
    }
    fn is_resource_request(&self) -> bool {
        (**self).is_resource_request()
    }
}

/// Owned request (JSON field names are camelCase).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Request {
    pub identity: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub is_resource_request: bool,
}

impl Request {
    /// Request against an API resource in `namespace` (may be empty for
    /// cluster-scoped resources).
    pub fn resource(
        identity: impl Into<String>,
        verb: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            action: verb.into(),
            path: String::new(),
            namespace: namespace.into(),
            is_resource_request: true,
        }
    }

    /// Request against a non-resource URL such as `/version`.
    pub fn non_resource(
        identity: impl Into<String>,
        verb: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            action: verb.into(),
            path: path.into(),
            namespace: String::new(),
            is_resource_request: false,
        }
    }
}

impl AccessRequest for Request {
    fn identity(&self) -> &str {
        &self.identity
    }
    fn action(&self) -> &str {
        &self.action
    }
    fn path(&self) -> &str {
        &self.path
    }
    fn namespace(&self) -> &str {
        &self.namespace
    }
    fn is_resource_request(&self) -> bool {
        self.is_resource_request
    }
}
