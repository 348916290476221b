//! `ERNIE` Provider Module
//!
//! Baidu Wenxin Workshop chat completions and Embedding-V1.
//!
//! # Architecture
//! - `models.rs` - Model catalog and endpoint routing
//! - `config.rs` - Credentials, URLs and timeout
//! - `builder.rs` - Builder with `ERNIE_API_KEY` / `ERNIE_SECRET_KEY` fallback
//! - `client.rs` - Generation orchestrator and embedding adapter
//! - `transport.rs` - Client traits the orchestrator depends on
//! - `http.rs` - reqwest implementation of the transport traits
//! - `types.rs` - Wire types
//!
//! # Example Usage
//! ```rust,no_run
//! use siumai_provider_ernie::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let llm = ErnieLlm::builder()
//!         .model(models::ERNIE_BOT_TURBO)
//!         .build()?;
//!
//!     let text = llm.call("Hello, world!", CallOptions::new()).await?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

pub mod builder;
mod client;
pub mod config;
pub mod http;
pub mod models;
pub mod transport;
pub mod types;

pub use builder::ErnieBuilder;
pub use client::{ErnieLlm, NUM_TOKENS_UNSUPPORTED};
pub use config::{Credentials, ErnieConfig};
pub use http::ErnieHttpClient;
pub use transport::{CompletionClient, EmbeddingClient};
pub use types::ModelPath;
