pub mod config;
pub mod doc_comment;
pub mod kotlin;

pub use config::OutputConfig;
pub use kotlin::{generate_kotlin_model_string, type_expr_to_kotlin};
