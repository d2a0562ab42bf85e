use crate::domain::model::NumberForm;

/// Classification strategy. Implementations must be pure: the result
/// depends only on the input string, never on prior calls, and
/// classification cannot fail.
pub trait Classifier: Send + Sync {
    fn classify(&self, input: &str) -> NumberForm;
}
