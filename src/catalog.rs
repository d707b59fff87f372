//! Static explanatory text shown next to the results.
//!
//! Explanations are keyed by exact model name. The built-in entries cover
//! the four models the evaluation backend ships with; configuration can
//! replace them or add more (see [`Config`](crate::Config)).

use serde::{Deserialize, Serialize};

use crate::types::OrderedMap;

/// Shown when a model has no catalog entry.
pub const FALLBACK_EXPLANATION: &str = "No explanation available for this model.";

/// Page title.
pub const TITLE: &str = "ML Model Comparison";

/// Introductory paragraph for the rich layout.
pub const PAGE_INTRO: &str = "Comparing different machine learning models helps us understand how \
each algorithm handles the dataset. Different models may perform better or worse depending on \
the complexity, feature interactions, and noise present. By analyzing metrics like accuracy, \
precision, recall, and F1-score, we can make informed decisions about which model is best suited \
for the task.";

/// Heading of the collapsible metric glossary.
pub const GLOSSARY_HEADING: &str = "What do these metrics mean?";

/// Metric name → plain-language definition.
pub const METRIC_GLOSSARY: &[(&str, &str)] = &[
    (
        "Accuracy",
        "Percentage of total predictions that were correct.",
    ),
    (
        "Precision",
        "Of the predicted positives, how many were actually positive.",
    ),
    (
        "Recall",
        "Of all actual positives, how many did we correctly predict.",
    ),
    ("F1-Score", "Harmonic mean of precision and recall."),
    ("Support", "Number of true instances for each class."),
];

/// Descriptive text for one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelExplanation {
    /// Exact model name as it appears in the results payload.
    pub model: String,
    /// Short blurb for the sidebar. Models without one are left out of it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// What the results mean for this model.
    pub details: String,
}

impl ModelExplanation {
    pub fn new(model: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            summary: None,
            details: details.into(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// Model name → explanation lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplanationCatalog {
    entries: OrderedMap<ModelExplanation>,
}

impl ExplanationCatalog {
    /// A catalog with no entries; every lookup falls back.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The entries for the models the evaluation backend ships with.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.extend([
            ModelExplanation::new(
                "Logistic Regression",
                "Logistic Regression is a linear model that works well for linearly separable \
                 data. If its accuracy is lower than others, it may indicate that the decision \
                 boundaries in the data are more complex. Its precision and recall give insight \
                 into how well it balances false positives and false negatives.",
            )
            .with_summary(
                "Best for simple, linearly separable data. Interpretable and fast, but may \
                 struggle with complex feature interactions.",
            ),
            ModelExplanation::new(
                "Random Forest",
                "Random Forest is an ensemble method that builds multiple decision trees and \
                 averages their predictions. High performance here suggests that the model is \
                 capturing complex patterns. It's robust to overfitting and often shows strong \
                 recall due to its depth.",
            )
            .with_summary(
                "Averaged decision trees that handle complex patterns well. Tends to generalize \
                 better and is resistant to overfitting.",
            ),
            ModelExplanation::new(
                "Support Vector Machine",
                "Support Vector Machine (SVM) tries to find the optimal boundary between classes. \
                 Strong performance indicates well-separated classes. However, lower results \
                 might suggest that feature scaling or kernel choice needs tuning.",
            )
            .with_summary(
                "Uses hyperplanes to separate classes in high-dimensional space. Can be very \
                 effective with proper kernel and parameter tuning.",
            ),
            ModelExplanation::new(
                "XGBoost",
                "XGBoost is a gradient boosting model known for high performance on structured \
                 data. If this model performs best, it likely means the dataset benefits from \
                 boosting small decision trees iteratively. It's particularly good at handling \
                 noisy data.",
            )
            .with_summary(
                "Boosted tree model that excels on structured data. Great for noisy or \
                 imbalanced datasets, and often wins Kaggle competitions.",
            ),
        ]);
        catalog
    }

    /// Add entries; an entry for an already-known model replaces it in place.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = ModelExplanation>) {
        for entry in entries {
            self.entries.insert(entry.model.clone(), entry);
        }
    }

    pub fn get(&self, model: &str) -> Option<&ModelExplanation> {
        self.entries.get(model)
    }

    /// Explanation text for `model`, or [`FALLBACK_EXPLANATION`].
    pub fn explain(&self, model: &str) -> &str {
        self.get(model)
            .map(|e| e.details.as_str())
            .unwrap_or(FALLBACK_EXPLANATION)
    }

    /// `(model, summary)` pairs for entries that have a sidebar blurb.
    pub fn summaries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(model, e)| e.summary.as_deref().map(|s| (model, s)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelExplanation> {
        self.entries.iter().map(|(_, e)| e)
    }
}
