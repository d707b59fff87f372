//! The display model.

use crate::catalog::{
    ExplanationCatalog, GLOSSARY_HEADING, METRIC_GLOSSARY, PAGE_INTRO, TITLE,
};
use crate::store::ResultStore;
use crate::types::{ClassMetrics, ModelResults};

use super::Layout;

/// Column headings of a report table.
pub const TABLE_HEADERS: [&str; 5] = ["Class", "Precision", "Recall", "F1-Score", "Support"];

/// Label and enabled state of the fetch trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub label: &'static str,
    pub enabled: bool,
}

impl ButtonState {
    pub fn for_loading(loading: bool) -> Self {
        if loading {
            Self {
                label: "Calculating...",
                enabled: false,
            }
        } else {
            Self {
                label: "Calculate",
                enabled: true,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarEntry {
    pub model: String,
    pub summary: String,
}

/// One table row: a report entry that carries per-class metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: String,
    pub metrics: ClassMetrics,
}

impl ReportRow {
    /// Cell texts in [`TABLE_HEADERS`] order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.label.clone(),
            format_metric(self.metrics.precision),
            format_metric(self.metrics.recall),
            format_metric(self.metrics.f1),
            self.metrics.support.to_string(),
        ]
    }
}

/// Everything shown for one model.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub model: String,
    pub accuracy: f64,
    pub rows: Vec<ReportRow>,
    /// Scalar report entries. Not part of the table; the console report
    /// prints them.
    pub aggregates: Vec<(String, f64)>,
    /// Rich layout only.
    pub explanation: Option<String>,
}

impl ReportSection {
    fn build(
        model: &str,
        results: &ModelResults,
        catalog: &ExplanationCatalog,
        layout: Layout,
    ) -> Self {
        Self {
            model: model.to_string(),
            accuracy: results.accuracy,
            rows: results
                .report
                .class_rows()
                .map(|(label, metrics)| ReportRow {
                    label: label.to_string(),
                    metrics: *metrics,
                })
                .collect(),
            aggregates: results
                .report
                .aggregates()
                .map(|(label, value)| (label.to_string(), value))
                .collect(),
            explanation: match layout {
                Layout::Rich => Some(catalog.explain(model).to_string()),
                Layout::Plain => None,
            },
        }
    }

    pub fn accuracy_text(&self) -> String {
        format_percent(self.accuracy)
    }

    pub fn explanation_heading(&self) -> String {
        format!("What do these results mean for {}?", self.model)
    }
}

/// Renderable snapshot of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub layout: Layout,
    pub title: &'static str,
    /// Rich layout only.
    pub intro: Option<&'static str>,
    /// Rich layout only.
    pub sidebar: Vec<SidebarEntry>,
    pub button: ButtonState,
    /// `Error: <message>` when the last fetch failed.
    pub error_banner: Option<String>,
    /// One per model, in results order.
    pub sections: Vec<ReportSection>,
    /// Heading and entries of the metric glossary; rich layout only.
    pub glossary: Option<(&'static str, &'static [(&'static str, &'static str)])>,
}

impl View {
    pub fn build(store: &ResultStore, catalog: &ExplanationCatalog, layout: Layout) -> Self {
        let rich = layout == Layout::Rich;
        let sections: Vec<ReportSection> = store
            .results()
            .map(|results| {
                results
                    .iter()
                    .map(|(model, r)| ReportSection::build(model, r, catalog, layout))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            layout,
            title: TITLE,
            intro: rich.then_some(PAGE_INTRO),
            sidebar: if rich {
                catalog
                    .summaries()
                    .map(|(model, summary)| SidebarEntry {
                        model: model.to_string(),
                        summary: summary.to_string(),
                    })
                    .collect()
            } else {
                Vec::new()
            },
            button: ButtonState::for_loading(store.is_loading()),
            error_banner: store.error().map(|e| format!("Error: {e}")),
            sections,
            glossary: rich.then_some((GLOSSARY_HEADING, METRIC_GLOSSARY)),
        }
    }
}

/// Fraction as a percentage with two decimals (`0.8` → `80.00%`).
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", to_fixed(fraction * 100.0, 2))
}

/// Metric with three decimals (`0.55` → `0.550`).
pub fn format_metric(value: f64) -> String {
    to_fixed(value, 3)
}

/// Fixed-point text rounding exact ties away from zero (`0.8125` → `0.813`),
/// unlike `format!("{:.N}")`, which rounds them to even.
fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // 1074 fractional digits hold any f64 exactly.
    let exact = format!("{:.1074}", value.abs());
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let (kept, dropped) = frac.split_at(digits.min(frac.len()));

    let mut out: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
    out.resize(int_part.len() + digits, b'0');
    if dropped.as_bytes().first().is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for d in out.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            out.insert(0, b'1');
        }
    }

    let point = out.len() - digits;
    let mut text = String::with_capacity(out.len() + 2);
    if value < 0.0 {
        text.push('-');
    }
    text.extend(out[..point].iter().map(|&d| d as char));
    if digits > 0 {
        text.push('.');
        text.extend(out[point..].iter().map(|&d| d as char));
    }
    text
}
