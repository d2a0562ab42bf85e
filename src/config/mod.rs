use crate::core::render::OutputFormat;
use crate::utils::error::{NumformError, Result};
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Classify by attempting a signed base-10 integer parse
    ParseAttempt,
    /// Classify by matching the whole string against the roman letters
    PatternMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Csv,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Csv => OutputFormat::Csv,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "numform")]
#[command(about = "Classifies strings as roman numeral or arabic number form")]
pub struct CliConfig {
    /// Strings to classify; lines of --input-file are used when empty
    pub inputs: Vec<String>,

    #[arg(long, help = "Read inputs from a file, one per line")]
    pub input_file: Option<String>,

    #[arg(long, value_enum, default_value_t = Strategy::ParseAttempt)]
    pub strategy: Strategy,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    #[arg(long, help = "Write the report to a file instead of stdout")]
    pub output_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() && self.input_file.is_none() {
            return Err(NumformError::MissingConfigError {
                field: "inputs".to_string(),
            });
        }

        if let Some(path) = &self.input_file {
            validate_path("input_file", path)?;
        }

        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }

        Ok(())
    }
}
