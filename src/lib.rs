//! Domain Checker - forbidden-domain block list with subdomain coverage
//!
//! A forbidden domain blocks itself and every subdomain below it, at any
//! depth. This library provides:
//! - A `Domain` value type with a suffix order (top-level label first)
//! - A `DomainChecker` that drops redundant entries and answers queries
//!   with a binary search
//! - Readers for counted domain blocks and commented block-list files
//! - A batch runner that answers each query with `Bad` or `Good`
//!
//! # Example
//!
//! ```rust
//! use domain_checker::{Domain, DomainChecker, Verdict};
//!
//! let checker = DomainChecker::new(
//!     ["google.com", "yandex.ru", "github.com"].map(Domain::from),
//! );
//!
//! assert_eq!(checker.check(&Domain::new("mail.google.com")), Verdict::Bad);
//! assert_eq!(checker.check(&Domain::new("yandex.com")), Verdict::Good);
//! ```
//!
//! # Input Format
//!
//! The batch runner reads two counted blocks, forbidden domains first and
//! queries second:
//!
//! ```text
//! 2
//! gdz.ru
//! maps.me
//! 2
//! m.gdz.ru
//! gdz.ua
//! ```
//!
//! and writes one verdict per query:
//!
//! ```text
//! Bad
//! Good
//! ```

pub mod error;
pub mod matcher;
pub mod parser;
pub mod runner;
pub mod types;

// Re-export commonly used items
pub use error::{CheckerError, Result};
pub use matcher::{Domain, DomainChecker};
pub use parser::{is_valid_hostname, parse_domain_list, parse_domain_list_from_file, DomainReader};
pub use runner::{check_all, run, run_blocklist, RunSummary};
pub use types::{ReadOptions, Verdict};
