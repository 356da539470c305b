// Docsync - Kotlin model generation from the Telegram Bot API documentation page

pub mod classify;
pub mod config;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod resolve;
pub mod scrape;
pub mod tables;
pub mod types;
// TypeSync - Kotlin source generation
pub mod typesync;

// Re-export commonly used items for convenience
pub use classify::{ClassifiedModel, classify};
pub use config::{DocsyncConfig, SourceConfig};
pub use error::{DocsyncError, Result};
pub use pipeline::{DocumentModel, build_model, generate_model};
pub use resolve::TypeResolver;
pub use typesync::OutputConfig;
