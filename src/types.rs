//! Core Data Type Definitions
//!
//! ## Module Organization
//!
//! - **`options`** - Per-call options (`CallOptions`) and the streaming callback type
//! - **`generation`** - Generation results (`Generation`, `LlmResult`)
//! - **`prompt`** - Prompt values accepted by `generate_prompt`
//!
//! Provider wire types (request/response bodies) are provider-owned and live
//! under `providers::<name>::types`.

mod generation;
mod options;
mod prompt;

pub use generation::{Generation, LlmResult};
pub use options::{CallOptions, StreamingFunc};
pub use prompt::{ChatMessage, ChatPromptValue, MessageRole, PromptValue, StringPromptValue};
