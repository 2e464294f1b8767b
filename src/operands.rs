//! Filesystem collaborators: enumerate the input files in a directory, read
//! a file's lines, and write the finished report. The comparison core never
//! touches the disk; everything that does lives here.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Above this many input files the signature scan grows noticeably
/// super-linear, so we warn (but still proceed).
pub const RECOMMENDED_MAX_FILES: usize = 10;

/// Returns the names and paths of the files in `dir` carrying `extension`
/// (matched case-insensitively), sorted ascending by name. The reserved
/// report file `exclude` is skipped even when it carries the extension, as
/// are subdirectories.
pub fn input_files(dir: &Path, extension: &str, exclude: &str) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Can't read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Can't read directory: {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches_extension = path
            .extension()
            .map_or(false, |ext| ext.to_string_lossy().eq_ignore_ascii_case(extension));
        if !matches_extension {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == exclude {
            continue;
        }
        files.push((name, path));
    }
    files.sort();
    Ok(files)
}

/// Returns the lines of the file at `path`, in order, without terminators
/// and with empty lines preserved. UTF-16 files are decoded via BOM
/// sniffing; anything else is taken as UTF-8, lossily.
pub fn lines_of(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read(path).with_context(|| format!("Can't read file: {}", path.display()))?;
    let text = decode(raw);
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(&text);

    let mut lines: Vec<String> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();
    // A trailing newline is a terminator, not an extra empty line.
    if text.ends_with('\n') {
        lines.pop();
    }
    Ok(lines)
}

/// Decode UTF-16 to UTF-8 if we see a UTF-16 Byte Order Mark at the
/// beginning of `candidate`. Otherwise interpret it as UTF-8, replacing
/// malformed sequences with the Unicode REPLACEMENT CHARACTER.
fn decode(candidate: Vec<u8>) -> String {
    if let Some((enc, _)) = encoding_rs::Encoding::for_bom(&candidate) {
        if [encoding_rs::UTF_16LE, encoding_rs::UTF_16BE].contains(&enc) {
            let (translated, _had_malformed_sequences) =
                enc.decode_without_bom_handling(&candidate);
            return translated.into_owned();
        }
    }
    String::from_utf8_lossy(&candidate).into_owned()
}

/// Atomically replaces the report at `path` with `contents`: the text is
/// written to a sibling temporary file first and renamed into place, so a
/// failed run never leaves a half-written report behind.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, contents)
        .with_context(|| format!("Can't write report: {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("Can't write report: {}", path.display()))?;
    Ok(())
}
