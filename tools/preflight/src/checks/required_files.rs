use std::io::{self, Write};

use crate::checks::CheckFindings;
use crate::config::{ProjectLayout, REQUIRED_FILES};
use crate::reporter;

pub fn check(writer: &mut dyn Write, layout: &ProjectLayout) -> io::Result<CheckFindings> {
    let mut findings = CheckFindings::default();

    for file in REQUIRED_FILES {
        if layout.path(file).exists() {
            reporter::print_line(writer, true, file, "found")?;
        } else {
            reporter::print_line(writer, false, file, "missing")?;
            findings.error(format!("Missing required file: {file}"));
        }
    }

    Ok(findings)
}
