pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Format, Strategy};

pub use crate::core::{
    ClassifyEngine, OutputFormat, ParseAttemptClassifier, PatternMatchClassifier,
};
pub use crate::domain::model::{Classification, ClassifyReport, NumberForm};
pub use crate::domain::ports::Classifier;
pub use crate::utils::error::{NumformError, Result};

/// Classifies `input` with the default parse-attempt strategy and reports
/// the result as a boolean, `true` meaning roman numeral form.
pub fn is_roman_number(input: &str) -> bool {
    ParseAttemptClassifier::new().classify(input).is_roman()
}
