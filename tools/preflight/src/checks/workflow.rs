use std::fs;
use std::io::{self, Write};

use crate::checks::CheckFindings;
use crate::config::{ProjectLayout, WORKFLOW_FILE};
use crate::reporter;

// The workflow is probed with literal substring matches, not YAML parsing.
const TITLE_MARKER: &str = "name: API Test Suite";
const TEST_COMMAND_MARKERS: &[&str] = &["npm run test:ci", "newman run"];
const ENV_VAR_MARKERS: &[&str] = &["--env-var", "BASE_URL"];
const ARTIFACT_UPLOAD_MARKER: &str = "actions/upload-artifact";

pub fn check(writer: &mut dyn Write, layout: &ProjectLayout) -> io::Result<CheckFindings> {
    let mut findings = CheckFindings::default();

    let content = match fs::read_to_string(layout.path(WORKFLOW_FILE)) {
        Ok(content) => content,
        Err(err) => {
            reporter::print_line(writer, false, WORKFLOW_FILE, "unreadable")?;
            findings.error(format!("GitHub Actions workflow: {err}"));
            return Ok(findings);
        }
    };

    if content.contains(TITLE_MARKER) {
        reporter::print_note(writer, "Workflow name found")?;
    }

    if TEST_COMMAND_MARKERS.iter().any(|marker| content.contains(marker)) {
        reporter::print_note(writer, "Test command found")?;
    } else {
        findings.warn("GitHub Actions workflow may not be calling the correct test command");
    }

    if ENV_VAR_MARKERS.iter().any(|marker| content.contains(marker)) {
        reporter::print_note(writer, "Environment variable handling configured")?;
    }

    if content.contains(ARTIFACT_UPLOAD_MARKER) {
        reporter::print_note(writer, "Artifact upload configured")?;
    }

    reporter::print_line(writer, true, WORKFLOW_FILE, "readable")?;
    Ok(findings)
}
