//! Builds one file's code set by running the line parser over every line.

use std::collections::BTreeSet;

use crate::parse::{self, InvalidRange};

/// The unique codes found in one file. Membership is all that matters, but a
/// sorted set gives us deterministic iteration for free and the report wants
/// sorted codes anyway.
pub type CodeSet = BTreeSet<String>;

/// Parses every line of `lines` (numbered from 1) and accumulates the codes
/// into a single set. Duplicates within a file collapse silently; invalid
/// ranges from all lines are concatenated in line order. A file with no valid
/// codes yields an empty set, which still participates in the comparison.
pub fn extract(lines: &[String], file_name: &str) -> (CodeSet, Vec<InvalidRange>) {
    let mut set = CodeSet::new();
    let mut invalid = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        let (codes, mut bad) = parse::parse(line, file_name, index + 1);
        for code in codes {
            set.insert(normalize(&code));
        }
        invalid.append(&mut bad);
    }
    (set, invalid)
}

/// Codes are compared whitespace-trimmed and case-insensitively. Today's
/// digit-only matches are already in this form, so this is the single place
/// to touch if a non-numeric code dialect is ever admitted.
fn normalize(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::InvalidReason;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn codes_from_all_lines_are_merged_and_deduplicated() {
        let (set, invalid) = extract(&lines(&["100 101", "# skip me", "101-103", "100"]), "a.txt");
        assert!(invalid.is_empty());
        let want: Vec<&str> = vec!["100", "101", "102", "103"];
        assert_eq!(set.iter().map(String::as_str).collect::<Vec<_>>(), want);
    }

    #[test]
    fn invalid_ranges_carry_their_one_based_line_numbers_in_order() {
        let (set, invalid) = extract(&lines(&["9-7", "55", "3-1"]), "a.txt");
        assert_eq!(set.iter().map(String::as_str).collect::<Vec<_>>(), vec!["55"]);
        assert_eq!(invalid.len(), 2);
        assert_eq!((invalid[0].line_number, invalid[0].range.as_str()), (1, "9-7"));
        assert_eq!((invalid[1].line_number, invalid[1].range.as_str()), (3, "3-1"));
        assert!(invalid.iter().all(|r| r.reason == InvalidReason::StartGreaterThanEnd));
    }

    #[test]
    fn a_file_with_no_codes_yields_an_empty_set() {
        let (set, invalid) = extract(&lines(&["# only comments", "", "no digits here"]), "a.txt");
        assert!(set.is_empty());
        assert!(invalid.is_empty());
    }
}
