//! Standalone HTML page rendering.
//!
//! All text taken from the view is escaped; model names and labels come
//! from the server and from configuration.

use std::fmt::Write;

use super::view::{ReportSection, TABLE_HEADERS, View};

const STYLE: &str = "\
body { font-family: \"Segoe UI\", sans-serif; background: #f7f9fc; padding: 2rem; }
.top { display: flex; max-width: 1300px; margin: 0 auto 3rem; }
.sidebar { flex: 1; margin: 0 1.5rem; }
.panel { background: #fff; border: 1px solid #e0e0e0; border-radius: 10px; padding: 1rem; margin-bottom: 1.5rem; }
.center { flex: 2.5; text-align: center; }
.error { color: red; text-align: center; }
.results { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 2rem; padding: 0 2rem; }
.model { background: #fff; border: 2px solid #888; border-radius: 10px; padding: 1.5rem; }
table { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid #ccc; padding: 0.4rem; }
thead tr { background: #e9f0fa; }
tbody tr:nth-child(even) { background: #f5f8fb; }
details { margin-top: 1rem; padding: 0.8rem; border-radius: 6px; background: #f1f7fe; }
";

/// Escape text for element content and double-quoted attributes.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render `view` as a complete HTML document.
pub fn render_html(view: &View) -> String {
    let mut out = String::new();
    let title = escape(view.title);

    writeln!(out, "<!DOCTYPE html>").unwrap();
    writeln!(out, "<html lang=\"en\">").unwrap();
    writeln!(out, "<head>").unwrap();
    writeln!(out, "<meta charset=\"utf-8\">").unwrap();
    writeln!(out, "<title>{title}</title>").unwrap();
    writeln!(out, "<style>\n{STYLE}</style>").unwrap();
    writeln!(out, "</head>").unwrap();
    writeln!(out, "<body>").unwrap();

    writeln!(out, "<div class=\"top\">").unwrap();
    let (left, right) = view.sidebar.split_at(view.sidebar.len().div_ceil(2));
    write_sidebar(&mut out, left);

    writeln!(out, "<div class=\"center\">").unwrap();
    writeln!(out, "<div class=\"panel\">").unwrap();
    writeln!(out, "<h1>{title}</h1>").unwrap();
    if let Some(intro) = view.intro {
        writeln!(out, "<p>{}</p>", escape(intro)).unwrap();
    }
    writeln!(out, "</div>").unwrap();
    let disabled = if view.button.enabled { "" } else { " disabled" };
    writeln!(
        out,
        "<button type=\"button\"{disabled}>{}</button>",
        escape(view.button.label)
    )
    .unwrap();
    if let Some(banner) = &view.error_banner {
        writeln!(out, "<p class=\"error\">{}</p>", escape(banner)).unwrap();
    }
    writeln!(out, "</div>").unwrap();

    write_sidebar(&mut out, right);
    writeln!(out, "</div>").unwrap();

    if !view.sections.is_empty() {
        writeln!(out, "<div class=\"results\">").unwrap();
        for section in &view.sections {
            write_section(&mut out, section, view);
        }
        writeln!(out, "</div>").unwrap();
    }

    writeln!(out, "</body>").unwrap();
    writeln!(out, "</html>").unwrap();
    out
}

fn write_sidebar(out: &mut String, entries: &[super::SidebarEntry]) {
    if entries.is_empty() {
        return;
    }
    writeln!(out, "<div class=\"sidebar\">").unwrap();
    for entry in entries {
        writeln!(
            out,
            "<div class=\"panel\"><h3>{}</h3><p>{}</p></div>",
            escape(&entry.model),
            escape(&entry.summary)
        )
        .unwrap();
    }
    writeln!(out, "</div>").unwrap();
}

fn write_section(out: &mut String, section: &ReportSection, view: &View) {
    writeln!(out, "<section class=\"model\">").unwrap();
    writeln!(out, "<h2>{}</h2>", escape(&section.model)).unwrap();
    writeln!(
        out,
        "<p><strong>Accuracy:</strong> <span class=\"accuracy\">{}</span></p>",
        section.accuracy_text()
    )
    .unwrap();
    writeln!(out, "<h3>Classification Report:</h3>").unwrap();
    writeln!(out, "<table>").unwrap();
    let header: String = TABLE_HEADERS
        .iter()
        .map(|h| format!("<th>{h}</th>"))
        .collect();
    writeln!(out, "<thead><tr>{header}</tr></thead>").unwrap();
    writeln!(out, "<tbody>").unwrap();
    for row in &section.rows {
        let cells: String = row
            .cells()
            .iter()
            .map(|c| format!("<td>{}</td>", escape(c)))
            .collect();
        writeln!(out, "<tr>{cells}</tr>").unwrap();
    }
    writeln!(out, "</tbody>").unwrap();
    writeln!(out, "</table>").unwrap();

    if let Some((heading, entries)) = view.glossary {
        writeln!(out, "<details class=\"glossary\">").unwrap();
        writeln!(out, "<summary>{}</summary>", escape(heading)).unwrap();
        writeln!(out, "<ul>").unwrap();
        for (metric, meaning) in entries.iter() {
            writeln!(
                out,
                "<li><strong>{}:</strong> {}</li>",
                escape(metric),
                escape(meaning)
            )
            .unwrap();
        }
        writeln!(out, "</ul>").unwrap();
        writeln!(out, "</details>").unwrap();
    }

    if let Some(explanation) = &section.explanation {
        writeln!(out, "<details class=\"explanation\">").unwrap();
        writeln!(
            out,
            "<summary>{}</summary>",
            escape(&section.explanation_heading())
        )
        .unwrap();
        writeln!(out, "<p>{}</p>", escape(explanation)).unwrap();
        writeln!(out, "</details>").unwrap();
    }
    writeln!(out, "</section>").unwrap();
}
