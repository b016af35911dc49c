use crate::config::CliConfig;
use crate::domain::model::{Operation, OutputFormat};
use crate::utils::error::{Result, StrUtilError};
use crate::utils::validation::{validate_path, validate_unique, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use tracing::level_filters::LevelFilter;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub analysis: Option<AnalysisConfig>,
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// Loads and validates a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let config: TomlConfig = toml::from_str(&processed_content)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces `${VAR}` with the environment value. Unknown variables are kept verbatim.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref()?.level.as_deref()
    }

    /// Fills in whatever the command line left unset.
    pub fn apply_to(&self, cli: &mut CliConfig) {
        if let Some(analysis) = &self.analysis {
            if cli.operations.is_empty() {
                cli.operations = analysis.operations.clone();
            }
        }

        if let Some(input) = &self.input {
            if cli.input_file.is_none() {
                cli.input_file = input.file.clone();
            }
        }

        if let Some(output) = &self.output {
            if cli.format.is_none() {
                cli.format = output.format;
            }
            if cli.output_path.is_none() {
                cli.output_path = output.path.clone();
            }
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(analysis) = &self.analysis {
            validate_unique("analysis.operations", &analysis.operations)?;
        }
        if let Some(file) = self.input.as_ref().and_then(|i| i.file.as_deref()) {
            validate_path("input.file", file)?;
        }
        if let Some(path) = self.output.as_ref().and_then(|o| o.path.as_deref()) {
            validate_path("output.path", path)?;
        }
        if let Some(level) = self.log_level() {
            level
                .parse::<LevelFilter>()
                .map_err(|e| StrUtilError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    }
}
