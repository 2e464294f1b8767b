//! Extracts codes from a single line of input text.
//!
//! A line may hold any number of bare codes (`404`) and inline ranges
//! (`100-105` or `100|105`); ranges are expanded into one code per integer.
//! Ranges whose start exceeds their end, or whose bounds don't fit in a
//! `u64`, produce an [`InvalidRange`] record instead of codes. Blank lines
//! and `#` comment lines produce nothing at all.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Matches one bare code, or a range in either the `S-E` or `S|E` dialect.
/// `captures_iter` gives us the non-overlapping occurrences left to right.
static CODE_OR_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)(?:[-|](\d+))?").unwrap());

/// Why a matched range was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The range ran backwards, like `10-5`.
    StartGreaterThanEnd,
    /// A bound failed to parse as a `u64`. The pattern only matches digits,
    /// so in practice this means overflow.
    ParseFailure,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::StartGreaterThanEnd => write!(f, "start-greater-than-end"),
            InvalidReason::ParseFailure => write!(f, "parse-failure"),
        }
    }
}

/// One malformed range, with enough provenance to report it: which file and
/// line it came from, the raw matched text, and the full line for context.
/// Recording one of these never stops the rest of the line from being parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRange {
    /// Name of the file the line came from.
    pub file_name: String,
    /// 1-based line number within that file.
    pub line_number: usize,
    /// The full original line, untrimmed.
    pub line: String,
    /// The matched range text, e.g. `10-5`.
    pub range: String,
    /// Parsed start bound, when it fit in a `u64`.
    pub start: Option<u64>,
    /// Parsed end bound, when it fit in a `u64`.
    pub end: Option<u64>,
    /// Why the range was rejected.
    pub reason: InvalidReason,
}

/// Parses one line, returning the codes it yields and any rejected ranges.
///
/// Lines that are blank after trimming, or whose trimmed form starts with
/// `#`, are skipped entirely. Codes are emitted as decimal strings; a range
/// `S-E` with `S <= E` emits every integer in `[S, E]` inclusive.
pub fn parse(line: &str, file_name: &str, line_number: usize) -> (Vec<String>, Vec<InvalidRange>) {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return (Vec::new(), Vec::new());
    }

    let mut codes = Vec::new();
    let mut invalid = Vec::new();
    for caps in CODE_OR_RANGE.captures_iter(line) {
        let Some(end_match) = caps.get(2) else {
            codes.push(caps[1].to_string());
            continue;
        };
        let start = caps[1].parse::<u64>().ok();
        let end = end_match.as_str().parse::<u64>().ok();
        let reason = match (start, end) {
            (Some(s), Some(e)) if s <= e => {
                for n in s..=e {
                    codes.push(n.to_string());
                }
                continue;
            }
            (Some(_), Some(_)) => InvalidReason::StartGreaterThanEnd,
            _ => InvalidReason::ParseFailure,
        };
        invalid.push(InvalidRange {
            file_name: file_name.to_string(),
            line_number,
            line: line.to_string(),
            range: caps[0].to_string(),
            start,
            end,
            reason,
        });
    }
    (codes, invalid)
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    fn codes_of(line: &str) -> Vec<String> {
        let (codes, invalid) = parse(line, "t.txt", 1);
        assert!(invalid.is_empty(), "unexpected invalid ranges: {invalid:?}");
        codes
    }

    #[test]
    fn bare_codes_are_emitted_as_matched() {
        assert_eq!(codes_of("100 corresponds to 200"), vec!["100", "200"]);
    }

    #[test]
    fn a_forward_range_expands_to_every_integer_inclusive() {
        assert_eq!(codes_of("100-103"), vec!["100", "101", "102", "103"]);
    }

    #[test]
    fn the_pipe_dialect_expands_like_the_hyphen_dialect() {
        assert_eq!(codes_of("7|9"), vec!["7", "8", "9"]);
    }

    #[test]
    fn a_degenerate_range_emits_exactly_one_code() {
        assert_eq!(codes_of("42-42"), vec!["42"]);
    }

    #[test]
    fn blank_and_comment_lines_yield_nothing() {
        for line in ["", "   ", "\t", "# 100-105", "  # 7"] {
            let (codes, invalid) = parse(line, "t.txt", 1);
            assert!(codes.is_empty(), "codes from {line:?}");
            assert!(invalid.is_empty(), "invalid from {line:?}");
        }
    }

    #[test]
    fn a_backwards_range_is_rejected_with_provenance() {
        let (codes, invalid) = parse("codes today: 10-5", "b.txt", 4);
        assert!(codes.is_empty());
        assert_eq!(invalid.len(), 1);
        let rec = &invalid[0];
        assert_eq!(rec.reason, InvalidReason::StartGreaterThanEnd);
        assert_eq!(rec.range, "10-5");
        assert_eq!(rec.file_name, "b.txt");
        assert_eq!(rec.line_number, 4);
        assert_eq!(rec.line, "codes today: 10-5");
        assert_eq!((rec.start, rec.end), (Some(10), Some(5)));
    }

    #[test]
    fn an_overflowing_bound_is_a_parse_failure() {
        let big = "99999999999999999999999"; // > u64::MAX
        let (codes, invalid) = parse(&format!("{big}-3"), "t.txt", 1);
        assert!(codes.is_empty());
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].reason, InvalidReason::ParseFailure);
        assert_eq!(invalid[0].start, None);
        assert_eq!(invalid[0].end, Some(3));
    }

    #[test]
    fn one_bad_range_does_not_stop_the_rest_of_the_line() {
        let (codes, invalid) = parse("5-3 then 8-9 then 77", "t.txt", 1);
        assert_eq!(codes, vec!["8", "9", "77"]);
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].range, "5-3");
    }

    #[test]
    fn reasons_render_as_their_kebab_identifiers() {
        assert_eq!(InvalidReason::StartGreaterThanEnd.to_string(), "start-greater-than-end");
        assert_eq!(InvalidReason::ParseFailure.to_string(), "parse-failure");
    }
}
