//! Generation results.

use serde::{Deserialize, Serialize};

/// One generated output, position-aligned with the input prompt it answers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Generation {
    pub text: String,
}

impl Generation {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }
}

/// Aggregated result of a `generate_prompt` call.
///
/// `generations` holds one inner list per `generate` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LlmResult {
    pub generations: Vec<Vec<Generation>>,
}

impl LlmResult {
    /// Text of the first generation of the first batch, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.generations
            .first()
            .and_then(|batch| batch.first())
            .map(|g| g.text.as_str())
    }
}
