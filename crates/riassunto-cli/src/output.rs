use std::io::Write;

use owo_colors::OwoColorize;
use riassunto_core::{ExtractedText, SummaryOutcome};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the one-line extraction report shown before summarizing.
pub fn print_extraction_summary(
    w: &mut dyn Write,
    pdf_name: &str,
    doc: &ExtractedText,
    color: ColorMode,
) -> std::io::Result<()> {
    let pages = doc.page_count;
    let words = doc.text.split_whitespace().count();
    let line = format!(
        "Extracted {} pages ({} words) from {}",
        pages, words, pdf_name
    );
    if color.enabled() {
        writeln!(w, "{}", line.dimmed())?;
    } else {
        writeln!(w, "{}", line)?;
    }
    if words == 0 {
        let warning = "No extractable text found (scanned document?)";
        if color.enabled() {
            writeln!(w, "{} {}", "WARNING:".yellow(), warning)?;
        } else {
            writeln!(w, "WARNING: {}", warning)?;
        }
    }
    Ok(())
}

/// Print a summarization failure with its kind.
pub fn print_failure(
    w: &mut dyn Write,
    outcome: &SummaryOutcome,
    color: ColorMode,
) -> std::io::Result<()> {
    let label = match outcome {
        SummaryOutcome::Summary(_) => return Ok(()),
        SummaryOutcome::Rejected { .. } => "REJECTED",
        SummaryOutcome::Transport { .. } => "FAILED",
    };
    if color.enabled() {
        writeln!(w, "{} {}", label.red().bold(), outcome)
    } else {
        writeln!(w, "{} {}", label, outcome)
    }
}
