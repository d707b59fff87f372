//! Per-model evaluation results as served by the endpoint.

use serde::{Deserialize, Serialize};

use super::{OrderedMap, Report};

/// Evaluation results for a single model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResults {
    /// Fraction of correct predictions on the test split.
    pub accuracy: f64,
    /// Classification report, label → entry.
    pub report: Report,
}

/// Model name → results, in display order.
pub type ResultsByModel = OrderedMap<ModelResults>;

/// A metric value outside `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeViolation {
    pub model: String,
    /// `None` for the model-level accuracy.
    pub label: Option<String>,
    pub metric: &'static str,
    pub value: f64,
}

fn in_unit_range(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

impl OrderedMap<ModelResults> {
    /// Decode a response body.
    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Collect every fraction that falls outside `[0, 1]`.
    ///
    /// Nothing here rejects such values; callers decide whether to warn.
    pub fn range_violations(&self) -> Vec<RangeViolation> {
        let mut out = Vec::new();
        for (model, results) in self.iter() {
            if !in_unit_range(results.accuracy) {
                out.push(RangeViolation {
                    model: model.to_string(),
                    label: None,
                    metric: "accuracy",
                    value: results.accuracy,
                });
            }
            for (label, metrics) in results.report.class_rows() {
                for (metric, value) in [
                    ("precision", metrics.precision),
                    ("recall", metrics.recall),
                    ("f1-score", metrics.f1),
                ] {
                    if !in_unit_range(value) {
                        out.push(RangeViolation {
                            model: model.to_string(),
                            label: Some(label.to_string()),
                            metric,
                            value,
                        });
                    }
                }
            }
        }
        out
    }
}
