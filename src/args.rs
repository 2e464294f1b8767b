//! Code to parse the command line using `clap`, and definitions of the
//! parsed result

use clap::Parser;
use std::path::PathBuf;

/// Returns the parsed command line: the directory to scan, the extension of
/// the files to compare, and the name of the report file to write.
#[must_use]
pub fn parsed() -> Args {
    let parsed = CliArgs::parse();
    Args { dir: parsed.dir, extension: parsed.ext, output: parsed.output }
}

/// The parsed command line.
pub struct Args {
    /// `dir` is the directory holding the files to compare
    pub dir: PathBuf,
    /// `extension` selects which files in `dir` take part
    pub extension: String,
    /// `output` is the name of the report file, written into `dir`
    pub output: String,
}

#[derive(Debug, Parser)]
#[command(name = "codecmp", version)]
/// Compares text files of numeric codes and reports, for every code, which
/// of the files contain it. Inline ranges like 100-105 are expanded; lines
/// starting with # are ignored.
struct CliArgs {
    /// Directory holding the code files to compare
    #[arg(default_value = ".")]
    dir: PathBuf,
    /// Extension of the files to compare (matched case-insensitively)
    #[arg(long, default_value = "txt")]
    ext: String,
    /// Name of the report file, written into the directory and excluded
    /// from the comparison
    #[arg(long, default_value = "code_comparison.txt")]
    output: String,
}
