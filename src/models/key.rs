//! Case-insensitive keys for grouping and ordering catalog text

use std::cmp::Ordering;

/// Text folded to lowercase; equal and ordered ignoring case
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Folded(String);

impl Folded {
    pub fn new(s: &str) -> Self {
        Self(s.chars().flat_map(char::to_lowercase).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identity of a spellbook independent of its serial: (title, inventor), ignoring case.
/// Orders by title, then inventor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CopyKey {
    title: Folded,
    inventor: Folded,
}

impl CopyKey {
    pub fn new(title: &str, inventor: &str) -> Self {
        Self {
            title: Folded::new(title),
            inventor: Folded::new(inventor),
        }
    }
}

/// Compare two strings ignoring case
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    Folded::new(haystack).as_str().contains(Folded::new(needle).as_str())
}
