use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::RunReport;

const LABEL_WIDTH: usize = 34;

pub fn print_header(writer: &mut dyn Write) -> io::Result<()> {
    writeln!(
        writer,
        "{}",
        "\n=== API Test Suite Preflight ===".bold()
    )
}

pub fn print_section(writer: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(writer, "\n{}", title.bold())
}

pub fn print_line(writer: &mut dyn Write, ok: bool, name: &str, detail: &str) -> io::Result<()> {
    if ok {
        writeln!(
            writer,
            "  {} {:<width$} {}",
            "\u{2713}".green(),
            name,
            detail.dimmed(),
            width = LABEL_WIDTH
        )
    } else {
        writeln!(
            writer,
            "  {} {:<width$} {}",
            "\u{2717}".red(),
            name,
            detail.dimmed(),
            width = LABEL_WIDTH
        )
    }
}

pub fn print_note(writer: &mut dyn Write, detail: &str) -> io::Result<()> {
    writeln!(writer, "    {}", detail.dimmed())
}

/// Print the closing banner: every warning and error once more, then the
/// verdict line. Errors alone decide the verdict; warnings never fail a run.
pub fn print_summary(writer: &mut dyn Write, report: &RunReport) -> io::Result<()> {
    writeln!(writer, "\n{}", "--- Summary ---".bold())?;

    if !report.warnings.is_empty() {
        writeln!(writer, "\n{}", "WARNINGS:".yellow().bold())?;
        for warning in &report.warnings {
            writeln!(writer, "  \u{2022} {warning}")?;
        }
    }

    if !report.errors.is_empty() {
        writeln!(writer, "\n{}", "ERRORS:".red().bold())?;
        for error in &report.errors {
            writeln!(writer, "  \u{2022} {error}")?;
        }
    }

    writeln!(writer)?;
    if report.errors.is_empty() && report.warnings.is_empty() {
        writeln!(
            writer,
            "  {}  {}",
            "PASS".green().bold(),
            "All checks passed! Project is properly configured.".dimmed()
        )?;
    } else if report.errors.is_empty() {
        writeln!(
            writer,
            "  {}  {}",
            "PASS".green().bold(),
            "No critical errors. Project should work, but review warnings above.".dimmed()
        )?;
    } else {
        writeln!(
            writer,
            "  {}  {}",
            "FAIL".red().bold(),
            "Validation failed. Please fix the errors above.".dimmed()
        )?;
    }
    writeln!(writer)
}
