use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocsyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidConfigValue { key: String, value: String },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Invalid regex pattern: {0}")]
    Regex(String),

    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Content container with id `{id}` not found in document")]
    MissingContainer { id: String },

    #[error("Malformed entry heading {heading:?}: entry names must be a single token")]
    MalformedEntryHeading { heading: String },

    #[error("Unresolved union type {descriptor:?} for field `{field}` of {type_name}")]
    UnresolvedUnionType {
        type_name: String,
        field: String,
        descriptor: String,
    },

    #[error(
        "Array descriptor {descriptor:?} for field `{field}` of {type_name} is unterminated or nested deeper than {max_depth} levels"
    )]
    UnboundedArrayNesting {
        type_name: String,
        field: String,
        descriptor: String,
        max_depth: usize,
    },

    #[error("Empty type descriptor for field `{field}` of {type_name}")]
    EmptyTypeDescriptor { type_name: String, field: String },

    #[error("Duplicate definition: {0}")]
    DuplicateDefinition(String),
}

impl From<regex::Error> for DocsyncError {
    fn from(err: regex::Error) -> Self {
        DocsyncError::Regex(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DocsyncError>;

impl DocsyncError {
    pub fn config(message: impl Into<String>) -> Self {
        DocsyncError::Config(message.into())
    }

    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        DocsyncError::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn malformed_entry_heading(heading: impl Into<String>) -> Self {
        DocsyncError::MalformedEntryHeading {
            heading: heading.into(),
        }
    }

    pub fn duplicate_definition(message: impl Into<String>) -> Self {
        DocsyncError::DuplicateDefinition(message.into())
    }

    /// Whether the run may continue after this error was reported.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DocsyncError::MalformedEntryHeading { .. })
    }
}
