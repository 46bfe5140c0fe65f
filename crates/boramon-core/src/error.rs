use thiserror::Error;

/// Rule-set construction and validation failures.
///
/// These only fire when a taxonomy is loaded or built; classification
/// itself never errors.
#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("rule set has no categories")]
    Empty,

    #[error("category '{0}' declared more than once")]
    DuplicateCategory(String),

    #[error("category '{0}' has an empty keyword list")]
    EmptyKeywords(String),

    #[error("category '{category}' has a blank keyword at position {index}")]
    BlankKeyword { category: String, index: usize },

    #[error("category '{category}' weight {weight} outside [0, {max}]")]
    WeightOutOfRange {
        category: String,
        weight: f64,
        max: f64,
    },

    #[error("rule set JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
