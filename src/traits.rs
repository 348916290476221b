//! Core Trait Definitions
//!
//! Capability traits implemented by providers:
//!
//! - **`language_model`** - Batch text generation (`LanguageModel`) and the shared
//!   `generate_prompt` helper
//! - **`embedding`** - Batch text embedding (`EmbeddingProvider`)
//!
//! The two traits are independent; a provider may implement either
//! one without carrying state required by the other.

mod embedding;
mod language_model;

pub use embedding::EmbeddingProvider;
pub use language_model::{LanguageModel, generate_prompt};
