//! Serialization of the dashboard document to disk.

use std::fmt::Display;
use std::fs;
use std::time::Instant;

use camino::{Utf8Path, Utf8PathBuf};
use console::{Style, style};
use serde::Serialize;
use serde_json::Value;

use crate::defaults::DEFAULT_FILENAME;
use crate::error::WriteError;

const ANSI_BLUE: Style = Style::new().blue();

fn as_overhead(s: Instant) -> impl Display {
    let e = Instant::now();
    let f = format!("(+{}ms)", e.duration_since(s).as_millis());
    ANSI_BLUE.apply_to(f)
}

/// Resolve the destination path; directories get the fixed default filename.
fn resolve(output: &Utf8Path) -> Utf8PathBuf {
    if output.is_dir() {
        output.join(DEFAULT_FILENAME)
    } else {
        output.to_path_buf()
    }
}

/// Renders the document as 4-space-indented UTF-8 JSON, non-ASCII left as-is.
pub(crate) fn render(document: &Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

    document.serialize(&mut serializer)?;

    Ok(buffer)
}

/// Writes the document to `output`, overwriting any existing file.
///
/// The write is destructive and not atomic; a crash mid-write leaves a
/// truncated file. The dashboard is regenerable configuration, so the
/// existing file is only worth a warning, not an error.
pub fn write_dashboard(document: &Value, output: &Utf8Path) -> Result<Utf8PathBuf, WriteError> {
    let s = Instant::now();
    let path = resolve(output);

    if path.is_file() {
        tracing::warn!(path = %path, "dashboard file already exists");
        eprintln!(
            "{} file already exists, overriding: {}",
            style("warning:").yellow().bold(),
            path
        );
    }

    let buffer = render(document)?;
    fs::write(&path, buffer)?;

    eprintln!("Wrote dashboard {} {}", path, as_overhead(s));

    Ok(path)
}
