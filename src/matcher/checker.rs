use tracing::debug;

use super::domain::Domain;
use crate::types::Verdict;

/// Compiled forbidden-domain list.
///
/// Holds the forbidden domains sorted by suffix order with every entry that
/// is already covered by a broader one removed. A query is then answered by
/// a binary search plus a single suffix check against the predecessor.
#[derive(Debug, Clone, Default)]
pub struct DomainChecker {
    forbidden: Vec<Domain>,
}

impl DomainChecker {
    /// Build a checker from forbidden domains. Input order and duplicates
    /// do not matter.
    pub fn new(domains: impl IntoIterator<Item = Domain>) -> Self {
        let mut forbidden: Vec<Domain> = domains.into_iter().collect();
        let input_len = forbidden.len();

        forbidden.sort_unstable();
        // An ancestor sorts directly before all of its descendants, so
        // comparing against the last kept entry is enough.
        forbidden.dedup_by(|later, kept| later.is_subdomain_of(kept));
        forbidden.shrink_to_fit();

        debug!(
            input = input_len,
            retained = forbidden.len(),
            dropped = input_len - forbidden.len(),
            "compiled domain checker"
        );

        Self { forbidden }
    }

    /// Check whether `domain` is forbidden or a subdomain of a forbidden
    /// domain.
    pub fn is_forbidden(&self, domain: &Domain) -> bool {
        // upper bound: first entry strictly greater than the query
        let pos = self.forbidden.partition_point(|entry| entry <= domain);
        match pos.checked_sub(1) {
            Some(prev) => domain.is_subdomain_of(&self.forbidden[prev]),
            None => false,
        }
    }

    pub fn check(&self, domain: &Domain) -> Verdict {
        Verdict::from_forbidden(self.is_forbidden(domain))
    }

    /// Retained forbidden domains, in suffix order.
    pub fn domains(&self) -> &[Domain] {
        &self.forbidden
    }

    /// Number of retained forbidden domains
    pub fn len(&self) -> usize {
        self.forbidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty()
    }
}

impl FromIterator<Domain> for DomainChecker {
    fn from_iter<I: IntoIterator<Item = Domain>>(iter: I) -> Self {
        Self::new(iter)
    }
}
