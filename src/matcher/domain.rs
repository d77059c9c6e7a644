use std::cmp::Ordering;
use std::fmt;

/// Label separator; every canonical form starts with it.
pub const SEPARATOR: char = '.';

/// A domain name in canonical form.
///
/// The canonical form always carries a leading separator, so "a.b.c" is
/// stored as ".a.b.c". A plain suffix check over canonical forms is then
/// aligned on label boundaries: ".com" is a suffix of ".x.com" but not of
/// ".comx" or ".xcom".
///
/// Ordering compares canonical forms from the end, top-level label first.
/// Under this order a domain sorts directly before all of its subdomains.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    canonical: String,
}

impl Domain {
    /// Create a domain, prepending the separator if it is missing.
    ///
    /// No validation is performed here; see [`crate::parser`] for that.
    pub fn new(name: impl Into<String>) -> Self {
        let mut canonical = name.into();
        if !canonical.starts_with(SEPARATOR) {
            canonical.insert(0, SEPARATOR);
        }
        Self { canonical }
    }

    /// Canonical form, including the leading separator.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Domain name without the leading separator.
    pub fn name(&self) -> &str {
        &self.canonical[SEPARATOR.len_utf8()..]
    }

    /// Strict suffix order, same as `self < other`.
    pub fn less_than(&self, other: &Domain) -> bool {
        self < other
    }

    /// True if `self` is `other` or any subdomain of it.
    pub fn is_subdomain_of(&self, other: &Domain) -> bool {
        self.canonical.ends_with(&other.canonical)
    }
}

impl Ord for Domain {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical
            .bytes()
            .rev()
            .cmp(other.canonical.bytes().rev())
    }
}

impl PartialOrd for Domain {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Domain {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Domain {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
