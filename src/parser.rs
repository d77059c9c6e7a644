use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::BufRead;
use std::path::Path;

use tracing::trace;

use crate::error::{CheckerError, Result};
use crate::matcher::{Domain, SEPARATOR};
use crate::types::ReadOptions;

/// Host name made of LDH labels (underscores allowed), with an optional
/// leading separator.
static HOSTNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\.?[a-z0-9_](?:[a-z0-9_-]{0,61}[a-z0-9_])?(?:\.[a-z0-9_](?:[a-z0-9_-]{0,61}[a-z0-9_])?)*$")
        .expect("HOSTNAME_PATTERN: hardcoded regex is invalid")
});

/// Maximum length of a host name, not counting a leading separator.
const MAX_HOSTNAME_LEN: usize = 253;

/// Upper bound on capacity reserved from a count line.
const MAX_PREALLOC: usize = 4096;

/// Check whether `name` is a well-formed host name.
pub fn is_valid_hostname(name: &str) -> bool {
    let bare = name.strip_prefix(SEPARATOR).unwrap_or(name);
    !bare.is_empty() && bare.len() <= MAX_HOSTNAME_LEN && HOSTNAME_PATTERN.is_match(name)
}

/// Turn one raw entry into a domain according to `opts`.
fn make_domain(raw: &str, line: usize, opts: &ReadOptions) -> Result<Domain> {
    if raw.is_empty() {
        return Err(CheckerError::ParseErrorAtLine {
            line,
            message: "Empty domain".to_string(),
        });
    }
    if opts.validate && !is_valid_hostname(raw) {
        return Err(CheckerError::InvalidDomain {
            line,
            domain: raw.to_string(),
        });
    }
    let domain = if opts.lowercase {
        Domain::new(raw.to_lowercase())
    } else {
        Domain::new(raw)
    };
    trace!(line, domain = %domain, "read domain");
    Ok(domain)
}

/// Line-oriented reader for the counted domain format:
///
/// ```text
/// 3
/// gdz.ru
/// maps.me
/// m.gdz.ru
/// ```
///
/// A count line is followed by exactly that many domain lines. Several
/// blocks can follow each other on the same input.
pub struct DomainReader<R> {
    inner: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> DomainReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: 0,
            buf: String::new(),
        }
    }

    /// Number of lines consumed so far
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next line with surrounding whitespace removed, or `None` at EOF.
    pub fn next_line(&mut self) -> Result<Option<&str>> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(self.buf.trim()))
    }

    /// Read a line holding a non-negative count.
    pub fn read_count(&mut self) -> Result<usize> {
        let line = self.line + 1;
        let text = self
            .next_line()?
            .ok_or_else(|| CheckerError::ParseErrorAtLine {
                line,
                message: "Expected a count, found end of input".to_string(),
            })?;
        text.parse::<usize>()
            .map_err(|_| CheckerError::InvalidCount {
                line,
                value: text.to_string(),
            })
    }

    /// Read exactly `count` domains, one per line.
    pub fn read_domains(&mut self, count: usize, opts: &ReadOptions) -> Result<Vec<Domain>> {
        let mut domains = Vec::with_capacity(count.min(MAX_PREALLOC));
        while domains.len() < count {
            let line = self.line + 1;
            let Some(raw) = self.next_line()? else {
                return Err(CheckerError::UnexpectedEof {
                    expected: count,
                    found: domains.len(),
                });
            };
            domains.push(make_domain(raw, line, opts)?);
        }
        Ok(domains)
    }

    /// Read a count line followed by that many domains.
    pub fn read_block(&mut self, opts: &ReadOptions) -> Result<Vec<Domain>> {
        let count = self.read_count()?;
        self.read_domains(count, opts)
    }

    /// Read domains until EOF, skipping blank lines.
    pub fn read_remaining(&mut self, opts: &ReadOptions) -> Result<Vec<Domain>> {
        let mut domains = Vec::new();
        loop {
            let line = self.line + 1;
            let Some(raw) = self.next_line()? else {
                break;
            };
            if raw.is_empty() {
                continue;
            }
            domains.push(make_domain(raw, line, opts)?);
        }
        Ok(domains)
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Parse a block list, one domain per line.
///
/// `#` starts a comment; blank lines are skipped.
pub fn parse_domain_list(text: &str, opts: &ReadOptions) -> Result<Vec<Domain>> {
    let mut domains = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers

        // Remove comments and trim whitespace
        let line = match line.find('#') {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        domains.push(make_domain(line, line_num, opts)?);
    }

    Ok(domains)
}

/// Parse a block list from a file.
pub fn parse_domain_list_from_file(
    path: impl AsRef<Path>,
    opts: &ReadOptions,
) -> Result<Vec<Domain>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CheckerError::FileError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_domain_list(&text, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn names(domains: &[Domain]) -> Vec<&str> {
        domains.iter().map(Domain::name).collect()
    }

    #[test]
    fn test_read_count_and_domains() {
        let mut reader = DomainReader::new(Cursor::new("3\ngdz.ru\nmaps.me\nm.gdz.ru\n"));
        let count = reader.read_count().unwrap();
        assert_eq!(count, 3);
        let domains = reader.read_domains(count, &ReadOptions::default()).unwrap();
        assert_eq!(names(&domains), vec!["gdz.ru", "maps.me", "m.gdz.ru"]);
        assert_eq!(reader.line(), 4);
    }

    #[test]
    fn test_read_count_trims_whitespace() {
        let mut reader = DomainReader::new(Cursor::new("  7 \r\n"));
        assert_eq!(reader.read_count().unwrap(), 7);
    }

    #[test]
    fn test_read_count_invalid() {
        let mut reader = DomainReader::new(Cursor::new("gdz.ru\n"));
        let err = reader.read_count().unwrap_err();
        match err {
            CheckerError::InvalidCount { line, value } => {
                assert_eq!(line, 1);
                assert_eq!(value, "gdz.ru");
            }
            other => panic!("expected InvalidCount, got {:?}", other),
        }
    }

    #[test]
    fn test_read_count_negative() {
        let mut reader = DomainReader::new(Cursor::new("-1\n"));
        assert!(matches!(
            reader.read_count(),
            Err(CheckerError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_read_count_eof() {
        let mut reader = DomainReader::new(Cursor::new(""));
        assert!(matches!(
            reader.read_count(),
            Err(CheckerError::ParseErrorAtLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_read_domains_short_input() {
        let mut reader = DomainReader::new(Cursor::new("a.com\nb.com\n"));
        let err = reader.read_domains(4, &ReadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            CheckerError::UnexpectedEof {
                expected: 4,
                found: 2
            }
        ));
    }

    #[test]
    fn test_read_block_huge_count_is_eof() {
        let mut reader = DomainReader::new(Cursor::new("18446744073709551615\ncom\n"));
        let err = reader.read_block(&ReadOptions::default()).unwrap_err();
        match err {
            CheckerError::UnexpectedEof { expected, found } => {
                assert_eq!(expected, usize::MAX);
                assert_eq!(found, 1);
            }
            other => panic!("expected UnexpectedEof, got {:?}", other),
        }
    }

    #[test]
    fn test_read_domains_last_line_without_newline() {
        let mut reader = DomainReader::new(Cursor::new("1\ngdz.ua"));
        let domains = reader.read_block(&ReadOptions::default()).unwrap();
        assert_eq!(names(&domains), vec!["gdz.ua"]);
    }

    #[test]
    fn test_read_domains_crlf() {
        let mut reader = DomainReader::new(Cursor::new("2\r\nmaps.me\r\nmaps.ru\r\n"));
        let domains = reader.read_block(&ReadOptions::default()).unwrap();
        assert_eq!(names(&domains), vec!["maps.me", "maps.ru"]);
    }

    #[test]
    fn test_read_domains_empty_line_rejected() {
        let mut reader = DomainReader::new(Cursor::new("2\na.com\n\n"));
        let err = reader.read_block(&ReadOptions::default()).unwrap_err();
        assert!(matches!(err, CheckerError::ParseErrorAtLine { line: 3, .. }));
    }

    #[test]
    fn test_two_blocks_on_one_input() {
        let input = "1\ncom\n2\nx.com\ncomx\n";
        let mut reader = DomainReader::new(Cursor::new(input));
        let forbidden = reader.read_block(&ReadOptions::default()).unwrap();
        let queries = reader.read_block(&ReadOptions::default()).unwrap();
        assert_eq!(names(&forbidden), vec!["com"]);
        assert_eq!(names(&queries), vec!["x.com", "comx"]);
    }

    #[test]
    fn test_read_remaining_skips_blank_lines() {
        let mut reader = DomainReader::new(Cursor::new("a.com\n\n  \nb.com"));
        let domains = reader.read_remaining(&ReadOptions::default()).unwrap();
        assert_eq!(names(&domains), vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_lowercase_option() {
        let text = "Google.COM\n";
        let lowered = parse_domain_list(text, &ReadOptions::default()).unwrap();
        assert_eq!(names(&lowered), vec!["google.com"]);

        let kept = parse_domain_list(text, &ReadOptions::verbatim()).unwrap();
        assert_eq!(names(&kept), vec!["Google.COM"]);
    }

    #[test]
    fn test_validate_rejects_malformed() {
        let opts = ReadOptions::default().with_validate(true);
        for bad in ["bad..com", "trailing.com.", "-dash.com", "sp ace.com", "."] {
            let err = parse_domain_list(bad, &opts).unwrap_err();
            assert!(
                matches!(err, CheckerError::InvalidDomain { line: 1, .. }),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_off_accepts_malformed() {
        let domains = parse_domain_list("bad..com\n", &ReadOptions::default()).unwrap();
        assert_eq!(domains[0].as_str(), ".bad..com");
    }

    #[test]
    fn test_is_valid_hostname() {
        assert!(is_valid_hostname("com"));
        assert!(is_valid_hostname("mail.google.com"));
        assert!(is_valid_hostname(".gdz.ru"));
        assert!(is_valid_hostname("_dmarc.example.com"));
        assert!(is_valid_hostname("xn--80ak6aa92e.com"));
        assert!(!is_valid_hostname(""));
        assert!(!is_valid_hostname(".."));
        assert!(!is_valid_hostname("a.-b.com"));
        assert!(!is_valid_hostname(&format!("{}.com", "a".repeat(64))));
    }

    #[test]
    fn test_parse_domain_list_comments() {
        let text = r#"
# Blocked sites
gdz.ru        # homework answers
  maps.me

m.gdz.ru
"#;
        let domains = parse_domain_list(text, &ReadOptions::default()).unwrap();
        assert_eq!(names(&domains), vec!["gdz.ru", "maps.me", "m.gdz.ru"]);
    }

    #[test]
    fn test_parse_domain_list_error_line() {
        let opts = ReadOptions::default().with_validate(true);
        let err = parse_domain_list("# header\nok.com\nnot ok\n", &opts).unwrap_err();
        match err {
            CheckerError::InvalidDomain { line, domain } => {
                assert_eq!(line, 3);
                assert_eq!(domain, "not ok");
            }
            other => panic!("expected InvalidDomain, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_domain_list_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("blocklist.txt");
        fs::write(&path, "# Comment\nexample.com\n  test.org  \n\nfoo.bar\n").unwrap();

        let domains = parse_domain_list_from_file(&path, &ReadOptions::default()).unwrap();
        assert_eq!(names(&domains), vec!["example.com", "test.org", "foo.bar"]);
    }

    #[test]
    fn test_parse_domain_list_from_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.txt");
        let err = parse_domain_list_from_file(&path, &ReadOptions::default()).unwrap_err();
        match err {
            CheckerError::FileError { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected FileError, got {:?}", other),
        }
    }
}
