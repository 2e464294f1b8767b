//! Houses the `compare` function, the kernel of the application.

use anyhow::{bail, Result};

use crate::extract::extract;
use crate::report;
use crate::signature::{self, FileSets};

/// One already-read input file: its name and its raw lines, in order, with
/// empty lines preserved. The caller does all filesystem work; `compare`
/// never touches the disk.
pub struct SourceFile {
    /// The file's name, used in signatures and diagnostics.
    pub name: String,
    /// The file's lines, without terminators.
    pub lines: Vec<String>,
}

/// Runs the whole comparison over `sources` and returns the report text.
///
/// Extracts each file's code set, then groups every observed code by the
/// exact set of files containing it, and formats the result. Malformed
/// ranges are collected across all files and reported, never fatal. Fewer
/// than two files yielding any codes is a fatal error: there is nothing
/// meaningful to compare, and no report text is produced.
pub fn compare(sources: &[SourceFile]) -> Result<String> {
    let mut file_sets = FileSets::default();
    let mut invalid = Vec::new();
    for source in sources {
        let (set, mut bad) = extract(&source.lines, &source.name);
        invalid.append(&mut bad);
        file_sets.insert(source.name.clone(), set);
    }

    let with_codes = file_sets.values().filter(|set| !set.is_empty()).count();
    if with_codes < 2 {
        bail!("need at least two files containing codes to compare, found {with_codes}");
    }

    let buckets = signature::build(&file_sets);
    let mut file_names: Vec<String> = file_sets.keys().cloned().collect();
    file_names.sort();
    Ok(report::format(&buckets, &file_names, &invalid))
}
