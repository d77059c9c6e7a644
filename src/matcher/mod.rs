//! Domain values and the compiled forbidden-domain checker.
//!
//! ## Example
//!
//! ```
//! use domain_checker::matcher::{Domain, DomainChecker};
//!
//! let checker: DomainChecker = ["gdz.ru", "maps.me", "m.gdz.ru"]
//!     .into_iter()
//!     .map(Domain::from)
//!     .collect();
//!
//! assert_eq!(checker.len(), 2);                               // m.gdz.ru is covered
//! assert!(checker.is_forbidden(&Domain::new("alg.m.gdz.ru")));
//! assert!(!checker.is_forbidden(&Domain::new("gdz.ua")));
//! ```

mod checker;
mod domain;

pub use checker::DomainChecker;
pub use domain::{Domain, SEPARATOR};
