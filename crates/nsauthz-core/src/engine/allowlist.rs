//! Exact-match allowlists.
//!
//! Entries are compared byte for byte: no wildcards, no prefix matching and
//! no case folding. `/apis` does not admit `/apis/apps`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    entries: Vec<String>,
}

impl AllowList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|e| e == value)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
