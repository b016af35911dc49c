pub mod cli;
pub mod toml_config;

use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::domain::model::{Operation, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_optional_path, validate_path, validate_unique, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "strutil"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Reverse strings, detect palindromes and count vowels")
)]
pub struct CliConfig {
    /// Strings to analyze
    #[cfg_attr(feature = "cli", arg(value_name = "INPUTS"))]
    pub inputs: Vec<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Read one input per line from this file"))]
    pub input_file: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Write the report here instead of stdout"))]
    pub output_path: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, value_enum, help = "Report format [default: text]"))]
    pub format: Option<OutputFormat>,

    #[cfg_attr(feature = "cli", arg(long, value_enum, value_delimiter = ','))]
    pub operations: Vec<Operation>,

    #[cfg_attr(feature = "cli", arg(long, help = "TOML configuration file"))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    /// Validates the `--config` path, then loads the file it names.
    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        match self.config.as_deref() {
            Some(path) => {
                validate_path("config", path)?;
                TomlConfig::from_file(path).map(Some)
            }
            None => Ok(None),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn inputs(&self) -> &[String] {
        &self.inputs
    }

    fn input_file(&self) -> Option<&str> {
        self.input_file.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn operations(&self) -> &[Operation] {
        &self.operations
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_optional_path("input_file", self.input_file.as_deref())?;
        validate_optional_path("output_path", self.output_path.as_deref())?;
        validate_unique("operations", &self.operations)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::StrUtilError;

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.format(), OutputFormat::Text);
        assert!(config.operations().is_empty());
    }

    #[test]
    fn test_duplicate_operations_rejected() {
        let config = CliConfig {
            operations: vec![Operation::Reverse, Operation::Reverse],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_arguments() {
        let config = CliConfig::parse_from([
            "strutil",
            "racecar",
            "hello",
            "--format",
            "csv",
            "--operations",
            "palindrome,vowels",
        ]);
        assert_eq!(config.inputs, vec!["racecar", "hello"]);
        assert_eq!(config.format, Some(OutputFormat::Csv));
        assert_eq!(
            config.operations,
            vec![Operation::Palindrome, Operation::Vowels]
        );
        assert!(!config.verbose);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_format_left_unset_when_flag_absent() {
        let config = CliConfig::parse_from(["strutil", "x"]);
        assert_eq!(config.format, None);
        assert_eq!(config.format(), OutputFormat::Text);
    }

    #[test]
    fn test_empty_config_path_rejected_before_loading() {
        let config = CliConfig {
            config: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            config.load_file_config(),
            Err(StrUtilError::InvalidConfigValueError { field, .. }) if field == "config"
        ));
    }

    #[test]
    fn test_no_config_file() {
        assert!(CliConfig::default().load_file_config().unwrap().is_none());
    }
}
