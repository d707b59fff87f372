//! Rendering: store state → [`View`] → text, HTML or a console report.
//!
//! [`View::build`] is a pure function of the store, the explanation catalog
//! and the layout. The output formats only lay the view out; they never
//! look at the store directly.

mod html;
mod report;
mod text;
mod view;

use serde::{Deserialize, Serialize};

pub use html::render_html;
pub use report::render_report;
pub use text::render_text;
pub use view::{
    ButtonState, ReportRow, ReportSection, SidebarEntry, View, format_metric, format_percent,
};

/// How much surrounding material the page carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Layout {
    /// Title, trigger, error banner and one table per model.
    Plain,
    /// Plain plus introduction, sidebar summaries, metric glossary and
    /// per-model explanations.
    #[default]
    Rich,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    /// Terminal text.
    #[default]
    Text,
    /// Standalone HTML page.
    Html,
    /// Fixed-width classification report per model.
    Report,
}

/// Lay out `view` in `format`.
pub fn render(view: &View, format: Format) -> String {
    match format {
        Format::Text => render_text(view),
        Format::Html => render_html(view),
        Format::Report => render_report(view),
    }
}
