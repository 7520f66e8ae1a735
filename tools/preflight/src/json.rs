use std::fs;
use std::io::{self, Write};

use serde_json::Value;

use crate::checks::CheckFindings;
use crate::config::ProjectLayout;
use crate::reporter;

/// Outcome of reading and parsing one required JSON artifact. A failure is
/// recorded in `findings` at the point it happens; callers skip structure
/// checks on `Invalid` instead of reporting the same file twice.
#[derive(Debug)]
pub enum ParsedArtifact {
    Valid(Value),
    Invalid,
}

pub fn load(
    writer: &mut dyn Write,
    layout: &ProjectLayout,
    file: &str,
    findings: &mut CheckFindings,
) -> io::Result<ParsedArtifact> {
    let text = match fs::read_to_string(layout.path(file)) {
        Ok(text) => text,
        Err(err) => {
            reporter::print_line(writer, false, file, "unreadable")?;
            findings.error(format!("{file}: {err}"));
            return Ok(ParsedArtifact::Invalid);
        }
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(value) => {
            reporter::print_line(writer, true, file, "valid JSON")?;
            Ok(ParsedArtifact::Valid(value))
        }
        Err(err) => {
            reporter::print_line(writer, false, file, "invalid JSON")?;
            findings.error(format!("{file}: {err}"));
            Ok(ParsedArtifact::Invalid)
        }
    }
}
