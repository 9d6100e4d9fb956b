//! Caller identity parsing.
//!
//! Kubernetes service accounts authenticate as
//! `system:serviceaccount:<namespace>:<name>`. Anything else (human users,
//! nodes, malformed strings) is a plain identity and carries no namespace.

/// Separator between identity segments.
pub const IDENTITY_SEPARATOR: char = ':';

const SA_PREFIX: [&str; 2] = ["system", "serviceaccount"];

/// Identity split into its `:`-delimited segments.
///
/// Borrows from the identity string and lives for a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentity<'a> {
    segments: Vec<&'a str>,
}

/// Namespace and name of a service account identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceAccount<'a> {
    pub namespace: &'a str,
    pub name: &'a str,
}

impl<'a> ParsedIdentity<'a> {
    pub fn parse(identity: &'a str) -> Self {
        Self {
            segments: identity.split(IDENTITY_SEPARATOR).collect(),
        }
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Exactly four segments starting with `system:serviceaccount`.
    pub fn is_service_account(&self) -> bool {
        self.service_account().is_some()
    }

    pub fn service_account(&self) -> Option<ServiceAccount<'a>> {
        match self.segments.as_slice() {
            &[system, sa, namespace, name] if system == SA_PREFIX[0] && sa == SA_PREFIX[1] => {
                Some(ServiceAccount { namespace, name })
            }
            _ => None,
        }
    }

    pub fn service_account_namespace(&self) -> Option<&'a str> {
        self.service_account().map(|sa| sa.namespace)
    }
}

/// Drop the last `sep`-delimited token of `s`.
///
/// `"team-foo-prod"` with `"-"` becomes `"team-foo"`. A string without the
/// separator comes back unchanged. An empty separator treats every character
/// as a token, so the last character goes when there are at least two.
pub fn strip_last_part<'s>(s: &'s str, sep: &str) -> &'s str {
    if sep.is_empty() {
        return match s.char_indices().last() {
            Some((idx, _)) if idx > 0 => &s[..idx],
            _ => s,
        };
    }
    match s.rsplit_once(sep) {
        Some((head, _)) => head,
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_handles_leading_and_trailing_separators() {
        assert_eq!(strip_last_part("-", "-"), "");
        assert_eq!(strip_last_part("team-", "-"), "team");
        assert_eq!(strip_last_part("-prod", "-"), "");
        assert_eq!(strip_last_part("", "-"), "");
    }

    #[test]
    fn strip_with_multichar_separator() {
        assert_eq!(strip_last_part("a--b--c", "--"), "a--b");
        assert_eq!(strip_last_part("a-b", "--"), "a-b");
    }

    #[test]
    fn strip_with_empty_separator_drops_last_char() {
        assert_eq!(strip_last_part("abc", ""), "ab");
        assert_eq!(strip_last_part("ü", ""), "ü");
        assert_eq!(strip_last_part("aü", ""), "a");
        assert_eq!(strip_last_part("", ""), "");
    }
}
