use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "model.kt";
pub const DEFAULT_PACKAGE: &str = "telegram.bot.api";
pub const DEFAULT_MAX_WIDTH: usize = 116;

/// Narrowest comment width accepted from configuration.
pub const MIN_MAX_WIDTH: usize = 20;

/// Configuration for the generated Kotlin model
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Output path for the generated model file
    #[serde(default = "default_output_path")]
    pub path: String,
    /// Kotlin package declared at the top of the file
    #[serde(default = "default_package")]
    pub package: String,
    /// Column budget for documentation comments, before indentation
    #[serde(default = "default_max_width")]
    pub max_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            package: default_package(),
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_package() -> String {
    DEFAULT_PACKAGE.to_string()
}

fn default_max_width() -> usize {
    DEFAULT_MAX_WIDTH
}
