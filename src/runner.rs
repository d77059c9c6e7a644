use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::matcher::{Domain, DomainChecker};
use crate::parser::{parse_domain_list_from_file, DomainReader};
use crate::types::ReadOptions;

/// Counters from one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Forbidden domains read
    pub forbidden: usize,
    /// Forbidden domains kept after minimization
    pub retained: usize,
    /// Query domains checked
    pub queries: usize,
    /// Queries classified as `Bad`
    pub blocked: usize,
}

/// Write one verdict line per query, preserving query order.
///
/// The checker no longer knows how many entries it was built from, so
/// `forbidden` is left at 0 for the caller to fill in.
pub fn check_all<'a, W: Write>(
    checker: &DomainChecker,
    queries: impl IntoIterator<Item = &'a Domain>,
    mut output: W,
) -> Result<RunSummary> {
    let mut summary = RunSummary {
        retained: checker.len(),
        ..RunSummary::default()
    };

    for query in queries {
        let verdict = checker.check(query);
        writeln!(output, "{}", verdict)?;
        summary.queries += 1;
        if verdict.is_bad() {
            summary.blocked += 1;
        }
    }
    output.flush()?;

    Ok(summary)
}

/// Run the counted protocol: a block of forbidden domains, then a block of
/// queries, answering each query with `Bad` or `Good`.
pub fn run<R: BufRead, W: Write>(input: R, output: W, opts: &ReadOptions) -> Result<RunSummary> {
    let mut reader = DomainReader::new(input);

    let forbidden = reader.read_block(opts)?;
    let forbidden_count = forbidden.len();
    let checker = DomainChecker::new(forbidden);

    let queries = reader.read_block(opts)?;
    let mut summary = check_all(&checker, &queries, output)?;
    summary.forbidden = forbidden_count;

    debug!(
        forbidden = summary.forbidden,
        retained = summary.retained,
        queries = summary.queries,
        blocked = summary.blocked,
        "batch finished"
    );

    Ok(summary)
}

/// Load forbidden domains from a block-list file, then answer every
/// non-blank query line of `input` until EOF.
pub fn run_blocklist<R: BufRead, W: Write>(
    path: impl AsRef<Path>,
    input: R,
    output: W,
    opts: &ReadOptions,
) -> Result<RunSummary> {
    let path = path.as_ref();
    let forbidden = parse_domain_list_from_file(path, opts)?;
    let forbidden_count = forbidden.len();
    let checker = DomainChecker::new(forbidden);
    debug!(path = %path.display(), retained = checker.len(), "loaded block list");

    let queries = DomainReader::new(input).read_remaining(opts)?;
    let mut summary = check_all(&checker, &queries, output)?;
    summary.forbidden = forbidden_count;

    Ok(summary)
}
