pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::{analyzer::Analyzer, engine::AnalysisEngine, pipeline::TextPipeline};
pub use domain::model::{Operation, OutputFormat, StringReport};
pub use domain::strings::{count_vowels, is_palindrome, reverse_string, VOWELS};
pub use utils::error::{Result, StrUtilError};
