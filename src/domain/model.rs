use serde::{Deserialize, Serialize};

/// Lexical shape of an input string: roman numeral form or arabic
/// (base-10) integer form. Roman form is not checked for numeral
/// well-formedness; `"IIII"` still counts as roman.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberForm {
    Roman,
    Arabic,
}

impl NumberForm {
    /// Boolean view with the polarity `true` = roman form.
    pub fn is_roman(self) -> bool {
        matches!(self, NumberForm::Roman)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NumberForm::Roman => "roman",
            NumberForm::Arabic => "arabic",
        }
    }
}

impl std::fmt::Display for NumberForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub input: String,
    pub form: NumberForm,
}

#[derive(Debug, Clone)]
pub struct ClassifyReport {
    pub classifications: Vec<Classification>,
    pub roman_count: usize,
    pub arabic_count: usize,
}
