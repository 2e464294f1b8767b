use anyhow::Result;
use codecmp::compare::{compare, SourceFile};
use codecmp::operands::{input_files, lines_of, write_report, RECOMMENDED_MAX_FILES};

fn main() -> Result<()> {
    let args = codecmp::args::parsed();

    let files = input_files(&args.dir, &args.extension, &args.output)?;
    if files.len() > RECOMMENDED_MAX_FILES {
        eprintln!(
            "warning: comparing {} files; more than {RECOMMENDED_MAX_FILES} gets slow",
            files.len()
        );
    }

    let mut sources = Vec::with_capacity(files.len());
    for (name, path) in files {
        sources.push(SourceFile { name, lines: lines_of(&path)? });
    }

    let text = compare(&sources)?;

    let report_path = args.dir.join(&args.output);
    write_report(&report_path, &text)?;

    let groups = text.matches("\nCodes ").count();
    println!("wrote {} ({groups} groups from {} files)", report_path.display(), sources.len());
    Ok(())
}
