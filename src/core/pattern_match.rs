use crate::domain::model::NumberForm;
use crate::domain::ports::Classifier;
use regex::Regex;

/// Pattern-match strategy: the whole input must consist of roman letters
/// (I, V, X, L, C, D, M). The empty string matches the zero-or-more
/// repetition and counts as roman.
#[derive(Debug, Clone)]
pub struct PatternMatchClassifier {
    pattern: Regex,
}

impl PatternMatchClassifier {
    pub fn new() -> Self {
        let pattern = Regex::new(r"^[IVXLCDM]*$").unwrap();
        Self { pattern }
    }
}

impl Default for PatternMatchClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for PatternMatchClassifier {
    fn classify(&self, input: &str) -> NumberForm {
        if self.pattern.is_match(input) {
            NumberForm::Roman
        } else {
            NumberForm::Arabic
        }
    }
}
