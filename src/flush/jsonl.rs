use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::derive::report::CountryReport;

/// File name written inside the output directory.
pub const REPORTS_FILE: &str = "reports.jsonl";

fn write_jsonl<'a, T: Serialize + 'a>(
    path: &Path,
    items: impl IntoIterator<Item = &'a T>,
) -> io::Result<usize> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut written = 0;
    for item in items {
        serde_json::to_writer(&mut writer, item)?;
        writer.write_all(b"\n")?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Write one `CountryReport` per line to `<output_dir>/reports.jsonl`,
/// creating the directory if needed. Returns the file path.
pub fn flush_reports_to_jsonl(reports: &[CountryReport], output_dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(REPORTS_FILE);
    let written = write_jsonl(&path, reports)?;
    tracing::debug!(path = %path.display(), written, "flushed country reports");
    Ok(path)
}

/// Read back a file written by `flush_reports_to_jsonl`. Blank lines are
/// ignored.
pub fn read_reports_jsonl(path: &Path) -> io::Result<Vec<CountryReport>> {
    let reader = BufReader::new(File::open(path)?);
    let mut reports = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        reports.push(serde_json::from_str(&line)?);
    }
    Ok(reports)
}
