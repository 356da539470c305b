use crate::error::{DocsyncError, Result};
use crate::typesync::config::{MIN_MAX_WIDTH, OutputConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};
use tracing::{debug, error, info, trace};

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = "docsync.toml";

pub const DEFAULT_SOURCE_URL: &str = "https://core.telegram.org/bots/api";
pub const DEFAULT_CONTAINER_ID: &str = "dev_page_content";

/// Where the documentation page comes from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Address of the documentation page
    #[serde(default = "default_source_url")]
    pub url: String,
    /// `id` of the element holding the documentation content
    #[serde(default = "default_container_id")]
    pub container_id: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            container_id: default_container_id(),
        }
    }
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_container_id() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

/// Root configuration, read from `docsync.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DocsyncConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl DocsyncConfig {
    /// Load configuration by searching for `docsync.toml` in the current
    /// directory and its ancestors. Built-in defaults are used when no file is
    /// found.
    pub fn new() -> Result<DocsyncConfig> {
        let current_dir = env::current_dir()?;
        match Self::find_config_file(&current_dir) {
            Some(path) => Self::from_path(&path),
            None => {
                info!(
                    "No {} found from {:?} upward, using defaults",
                    CONFIG_FILE_NAME, current_dir
                );
                let config = DocsyncConfig::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Loads from `path` when given, otherwise searches like [`DocsyncConfig::new`].
    pub fn load(path: Option<&Path>) -> Result<DocsyncConfig> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::new(),
        }
    }

    pub fn from_path(path: &Path) -> Result<DocsyncConfig> {
        info!("Loading configuration from {:?}", path);

        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read configuration file: {}", e);
            DocsyncError::from(e)
        })?;
        debug!("Configuration file size: {} bytes", contents.len());

        Self::from_toml_str(&contents)
    }

    /// Parses, substitutes environment variables and validates.
    pub fn from_toml_str(contents: &str) -> Result<DocsyncConfig> {
        let mut config: DocsyncConfig = toml::from_str(contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            DocsyncError::config(e.to_string())
        })?;

        config.source.url = expand_env(&config.source.url)?;
        config.output.path = expand_env(&config.output.path)?;
        config.validate()?;

        debug!(
            url = %config.source.url,
            output = %config.output.path,
            package = %config.output.package,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Searches for `docsync.toml` starting at `start` and traversing up to the
    /// root.
    pub fn find_config_file(start: &Path) -> Option<PathBuf> {
        debug!("Starting config file search from: {:?}", start);
        for path in start.ancestors() {
            let config_path = path.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", config_path);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
        None
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.max_width < MIN_MAX_WIDTH {
            return Err(DocsyncError::InvalidConfigValue {
                key: "output.max_width".to_string(),
                value: self.output.max_width.to_string(),
            });
        }
        if self.source.container_id.trim().is_empty() {
            return Err(DocsyncError::InvalidConfigValue {
                key: "source.container_id".to_string(),
                value: self.source.container_id.clone(),
            });
        }
        if self.output.package.trim().is_empty() {
            return Err(DocsyncError::InvalidConfigValue {
                key: "output.package".to_string(),
                value: self.output.package.clone(),
            });
        }
        Ok(())
    }
}

/// Expands `${VAR}` and `${VAR:-default}` placeholders in one config value.
fn expand_env(value: &str) -> Result<String> {
    let placeholder = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")?;
    let mut expanded = String::with_capacity(value.len());
    let mut copied_up_to = 0;

    for cap in placeholder.captures_iter(value) {
        let whole = cap.get_match();
        let name = &cap[1];
        let resolved = match (env::var(name), cap.get(2)) {
            (Ok(set), _) => set,
            (Err(_), Some(default)) => {
                debug!(var = name, default = default.as_str(), "Environment variable unset, using default");
                default.as_str().to_string()
            }
            (Err(_), None) => return Err(DocsyncError::EnvVarNotSet(name.to_string())),
        };
        expanded.push_str(&value[copied_up_to..whole.start()]);
        expanded.push_str(&resolved);
        copied_up_to = whole.end();
    }

    expanded.push_str(&value[copied_up_to..]);
    Ok(expanded)
}
