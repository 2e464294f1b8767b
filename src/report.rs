//! Renders the signature buckets and any invalid-range diagnostics as the
//! final report text.

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::extract::CodeSet;
use crate::parse::InvalidRange;
use crate::signature::{Buckets, Signature};

/// Formats the full report.
///
/// Sections appear in non-increasing order of signature size; equal sizes
/// tie-break on the comma-joined sorted file-name string, ascending. The
/// header lists every processed file (empty ones included), and a diagnostics
/// section precedes the buckets whenever any range was rejected.
#[must_use]
pub fn format(buckets: &Buckets, file_names: &[String], invalid: &[InvalidRange]) -> String {
    let mut out = String::new();
    out.push_str("Code set comparison\n");
    out.push_str("===================\n\n");

    out.push_str(&format!("Files compared ({}):\n", file_names.len()));
    for name in file_names {
        out.push_str(&format!("    {name}\n"));
    }
    out.push('\n');

    if !invalid.is_empty() {
        push_diagnostics(&mut out, invalid);
    }

    let mut ordered: Vec<(&Signature, &CodeSet)> = buckets.iter().collect();
    ordered.sort_by(|(a, _), (b, _)| {
        b.len().cmp(&a.len()).then_with(|| a.joined().cmp(&b.joined()))
    });

    for (signature, codes) in ordered {
        out.push_str(&section_header(signature, file_names.len()));
        for code in codes {
            out.push_str(&format!("    {code}\n"));
        }
        out.push('\n');
    }
    out
}

/// Rejected ranges, grouped by file in the order files first appear among
/// the records, and within a file in line order. Each entry shows the line
/// number, the matched range text, the reason, and the original line.
fn push_diagnostics(out: &mut String, invalid: &[InvalidRange]) {
    let mut by_file: IndexMap<&str, Vec<&InvalidRange>, FxBuildHasher> = IndexMap::default();
    for record in invalid {
        by_file.entry(record.file_name.as_str()).or_default().push(record);
    }

    out.push_str(&format!("Invalid ranges ({}):\n\n", invalid.len()));
    for (file_name, records) in &by_file {
        out.push_str(&format!("  {file_name}:\n"));
        for record in records {
            out.push_str(&format!(
                "    line {}: '{}' ({})\n",
                record.line_number, record.range, record.reason
            ));
            out.push_str(&format!("      > {}\n", record.line));
        }
    }
    out.push('\n');
}

fn section_header(signature: &Signature, total_files: usize) -> String {
    if signature.len() == total_files {
        format!("Codes common to ALL {total_files} files:\n")
    } else if signature.len() == 1 {
        format!("Codes unique to file '{}':\n", signature.files()[0])
    } else {
        format!("Codes common to {} files ({}):\n", signature.len(), signature.joined())
    }
}
