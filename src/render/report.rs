//! Fixed-width console report, one block per model.
//!
//! Follows the layout of scikit-learn's text classification report: class
//! rows first, a blank line, then the scalar accuracy row and the averaged
//! rows (`macro avg`, `weighted avg`). Metrics use two decimals.

use std::fmt::Write;

use super::view::{ReportSection, View};

const DIGITS: usize = 2;
const HEADERS: [&str; 4] = ["precision", "recall", "f1-score", "support"];
const LONGEST_AVERAGE: &str = "weighted avg";

fn is_average(label: &str) -> bool {
    label.ends_with(" avg")
}

/// Render every section of `view` as a console classification report.
pub fn render_report(view: &View) -> String {
    let mut out = String::new();
    if let Some(banner) = &view.error_banner {
        writeln!(out, "{banner}").unwrap();
    }
    for section in &view.sections {
        write_section(&mut out, section);
    }
    out
}

fn write_section(out: &mut String, section: &ReportSection) {
    writeln!(out).unwrap();
    writeln!(out, "--- {} Results ---", section.model).unwrap();
    writeln!(out, "Test Accuracy: {:.4}", section.accuracy).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Classification Report:").unwrap();

    let width = section
        .rows
        .iter()
        .map(|r| r.label.len())
        .chain(section.aggregates.iter().map(|(label, _)| label.len()))
        .chain([LONGEST_AVERAGE.len(), DIGITS])
        .max()
        .unwrap_or(DIGITS);

    let mut line = format!("{:>width$} ", "");
    for header in HEADERS {
        write!(line, " {header:>9}").unwrap();
    }
    writeln!(out, "{line}").unwrap();
    writeln!(out).unwrap();

    let (averages, classes): (Vec<_>, Vec<_>) =
        section.rows.iter().partition(|r| is_average(&r.label));

    for row in &classes {
        writeln!(
            out,
            "{:>width$}  {:>9.DIGITS$} {:>9.DIGITS$} {:>9.DIGITS$} {:>9}",
            row.label, row.metrics.precision, row.metrics.recall, row.metrics.f1, row.metrics.support
        )
        .unwrap();
    }
    writeln!(out).unwrap();

    let total_support: u64 = classes.iter().map(|r| r.metrics.support).sum();
    for (label, value) in &section.aggregates {
        writeln!(
            out,
            "{label:>width$}  {:>9} {:>9} {value:>9.DIGITS$} {total_support:>9}",
            "", ""
        )
        .unwrap();
    }
    for row in &averages {
        writeln!(
            out,
            "{:>width$}  {:>9.DIGITS$} {:>9.DIGITS$} {:>9.DIGITS$} {:>9}",
            row.label, row.metrics.precision, row.metrics.recall, row.metrics.f1, row.metrics.support
        )
        .unwrap();
    }
}
