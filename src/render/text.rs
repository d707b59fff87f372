//! Terminal rendering.

use std::fmt::Write;

use super::view::{ReportSection, TABLE_HEADERS, View};

/// Render `view` as plain terminal text.
pub fn render_text(view: &View) -> String {
    let mut out = String::new();

    writeln!(out, "{}", view.title).unwrap();
    writeln!(out, "{}", "=".repeat(view.title.len())).unwrap();
    if let Some(intro) = view.intro {
        writeln!(out).unwrap();
        writeln!(out, "{intro}").unwrap();
    }
    if !view.sidebar.is_empty() {
        writeln!(out).unwrap();
        for entry in &view.sidebar {
            writeln!(out, "* {}: {}", entry.model, entry.summary).unwrap();
        }
    }

    writeln!(out).unwrap();
    let state = if view.button.enabled { "" } else { " (disabled)" };
    writeln!(out, "[ {} ]{state}", view.button.label).unwrap();

    if let Some(banner) = &view.error_banner {
        writeln!(out).unwrap();
        writeln!(out, "{banner}").unwrap();
    }

    for section in &view.sections {
        writeln!(out).unwrap();
        write_section(&mut out, section, view);
    }

    out
}

fn write_section(out: &mut String, section: &ReportSection, view: &View) {
    writeln!(out, "## {}", section.model).unwrap();
    writeln!(out, "Accuracy: {}", section.accuracy_text()).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Classification Report:").unwrap();

    let rows: Vec<[String; 5]> = section.rows.iter().map(|r| r.cells()).collect();
    let mut widths = TABLE_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let header = TABLE_HEADERS.map(String::from);
    write_row(out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("  ")).unwrap();
    for row in &rows {
        write_row(out, row, &widths);
    }

    if let Some((heading, entries)) = view.glossary {
        writeln!(out).unwrap();
        writeln!(out, "{heading}").unwrap();
        for (metric, meaning) in entries.iter() {
            writeln!(out, "  - {metric}: {meaning}").unwrap();
        }
    }
    if let Some(explanation) = &section.explanation {
        writeln!(out).unwrap();
        writeln!(out, "{}", section.explanation_heading()).unwrap();
        writeln!(out, "  {explanation}").unwrap();
    }
}

/// First column left-aligned, numbers right-aligned.
fn write_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let mut line = format!("{:<w$}", cells[0], w = widths[0]);
    for (cell, width) in cells.iter().zip(widths.iter().copied()).skip(1) {
        write!(line, "  {cell:>width$}").unwrap();
    }
    writeln!(out, "{}", line.trim_end()).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ExplanationCatalog;
    use crate::render::Layout;
    use crate::store::ResultStore;
    use crate::ResultsByModel;

    fn view(layout: Layout) -> View {
        let mut store = ResultStore::default();
        let ticket = store.begin_fetch();
        store.complete(
            ticket,
            ResultsByModel::from_json(
                r#"{"Random Forest": {"accuracy": 0.875, "report": {
                    "0": {"precision": 0.85, "recall": 0.87, "f1-score": 0.86, "support": 82},
                    "1": {"precision": 0.9, "recall": 0.88, "f1-score": 0.89, "support": 102},
                    "accuracy": 0.875
                }}}"#,
            ),
        );
        View::build(&store, &ExplanationCatalog::builtin(), layout)
    }

    #[test]
    fn plain_table_layout() {
        let text = render_text(&view(Layout::Plain));
        assert!(text.starts_with("ML Model Comparison\n"));
        assert!(text.contains("[ Calculate ]\n"));
        assert!(text.contains("## Random Forest\nAccuracy: 87.50%\n"));
        assert!(text.contains("Class  Precision  Recall  F1-Score  Support\n"));
        assert!(text.contains("0          0.850   0.870     0.860       82\n"));
        assert!(text.contains("1          0.900   0.880     0.890      102\n"));
        assert!(!text.contains("What do these"));
    }

    #[test]
    fn rich_adds_explanation_and_glossary() {
        let text = render_text(&view(Layout::Rich));
        assert!(text.contains("What do these results mean for Random Forest?\n"));
        assert!(text.contains("  - Support: Number of true instances for each class.\n"));
        assert!(text.contains("* XGBoost: Boosted tree model"));
    }

    #[test]
    fn disabled_button_is_marked() {
        let mut store = ResultStore::default();
        store.begin_fetch();
        let text = render_text(&View::build(
            &store,
            &ExplanationCatalog::empty(),
            Layout::Plain,
        ));
        assert!(text.contains("[ Calculating... ] (disabled)\n"));
    }
}
