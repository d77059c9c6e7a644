use std::fmt;

/// Classification of a query domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Domain is forbidden or a subdomain of a forbidden domain
    Bad,
    /// Domain is allowed
    Good,
}

impl Verdict {
    /// Verdict for a forbidden flag
    pub fn from_forbidden(forbidden: bool) -> Self {
        if forbidden {
            Verdict::Bad
        } else {
            Verdict::Good
        }
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, Verdict::Bad)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Bad => "Bad",
            Verdict::Good => "Good",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for reading domain lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Lowercase every entry before constructing the domain
    pub lowercase: bool,
    /// Reject entries that are not well-formed host names
    pub validate: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            validate: false,
        }
    }
}

impl ReadOptions {
    /// Options that keep entries exactly as read
    pub fn verbatim() -> Self {
        Self {
            lowercase: false,
            validate: false,
        }
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}
