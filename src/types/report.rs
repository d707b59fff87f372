//! Classification report types.
//!
//! A classification report maps a label (a class name, or an aggregate key
//! such as `"macro avg"`) to either a per-class metrics record or a bare
//! scalar. The scalar form shows up for summary values like `"accuracy"`
//! that report producers emit next to the per-class records.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::OrderedMap;

/// Precision/recall/F1/support for one class (or one averaged aggregate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    /// F1 score. Wire name is `"f1-score"`; `"f1"` is accepted too.
    #[serde(rename = "f1-score", alias = "f1")]
    pub f1: f64,
    /// Number of true instances of the class.
    #[serde(deserialize_with = "deserialize_support")]
    pub support: u64,
}

impl ClassMetrics {
    pub fn new(precision: f64, recall: f64, f1: f64, support: u64) -> Self {
        Self {
            precision,
            recall,
            f1,
            support,
        }
    }
}

/// Accept support as either an integer or an integral float (`10.0`).
fn deserialize_support<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSupport {
        Int(u64),
        Float(f64),
    }

    match RawSupport::deserialize(deserializer)? {
        RawSupport::Int(n) => Ok(n),
        RawSupport::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
            Ok(f as u64)
        }
        RawSupport::Float(f) => Err(D::Error::custom(format!(
            "support must be a non-negative integer, got {f}"
        ))),
    }
}

/// One entry of a classification report.
///
/// Discriminated by JSON shape: an object is a [`ClassMetrics`] record,
/// a number is a scalar aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportEntry {
    Class(ClassMetrics),
    Aggregate(f64),
}

impl ReportEntry {
    pub fn as_class(&self) -> Option<&ClassMetrics> {
        match self {
            ReportEntry::Class(metrics) => Some(metrics),
            ReportEntry::Aggregate(_) => None,
        }
    }

    pub fn as_aggregate(&self) -> Option<f64> {
        match self {
            ReportEntry::Class(_) => None,
            ReportEntry::Aggregate(value) => Some(*value),
        }
    }
}

/// Ordered label → entry mapping.
pub type Report = OrderedMap<ReportEntry>;

impl OrderedMap<ReportEntry> {
    /// Entries that carry per-class records, in report order. Scalar
    /// aggregates are skipped.
    pub fn class_rows(&self) -> impl Iterator<Item = (&str, &ClassMetrics)> {
        self.iter()
            .filter_map(|(label, entry)| entry.as_class().map(|m| (label, m)))
    }

    /// Scalar aggregate entries, in report order.
    pub fn aggregates(&self) -> impl Iterator<Item = (&str, f64)> {
        self.iter()
            .filter_map(|(label, entry)| entry.as_aggregate().map(|v| (label, v)))
    }
}
