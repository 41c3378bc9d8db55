//! Run configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for a classification run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct RunOptions {
    /// Master switch. When false, discovery still runs and the total
    /// is reported, but no file is classified.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Threshold in `[0, 1]` a result must meet for its category to be
    /// tallied; results below it are logged as unclassified.
    #[builder(default = "0.6")]
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,

    /// Files classified concurrently per batch. Must be positive.
    #[builder(default = "10")]
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_true() -> bool {
    true
}

fn default_min_confidence() -> f64 {
    0.6
}

fn default_batch_size() -> usize {
    10
}

impl RunOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.batch_size == Some(0) {
            return Err("batch_size must be positive".to_string());
        }
        if let Some(min_confidence) = self.min_confidence {
            if !min_confidence.is_finite() {
                return Err("min_confidence must be a finite number".to_string());
            }
        }
        Ok(())
    }
}

impl RunOptions {
    /// Create a new options builder.
    pub fn builder() -> RunOptionsBuilder {
        RunOptionsBuilder::default()
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            min_confidence: 0.6,
            batch_size: 10,
        }
    }
}
