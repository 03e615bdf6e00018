use crate::domain::models::ArchiveReport;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};
use std::path::Path;

pub fn format_summary(report: &ArchiveReport, output: &Path) -> String {
    format!(
        "Zipped {} files in {}",
        report.selected,
        output.display()
    )
}

pub fn format_skipped(report: &ArchiveReport) -> Vec<String> {
    report
        .skipped
        .iter()
        .map(|skipped| format!("skipped {}: {}", skipped.path.display(), skipped.reason))
        .collect()
}

pub fn print_summary(report: &ArchiveReport, output: &Path) -> io::Result<()> {
    let mut stdout = io::stdout();

    if report.has_skipped() {
        stdout.execute(SetForegroundColor(Color::Yellow))?;
        for line in format_skipped(report) {
            writeln!(stdout, "{}", line)?;
        }
        writeln!(
            stdout,
            "{} of {} selected files archived",
            report.archived, report.selected
        )?;
        stdout.execute(ResetColor)?;
    }

    stdout.execute(SetForegroundColor(Color::Green))?;
    writeln!(stdout, "{}", format_summary(report, output))?;
    stdout.execute(ResetColor)?;
    Ok(())
}
