use crate::domain::model::{Classification, ClassifyReport, NumberForm};
use crate::domain::ports::Classifier;

pub struct ClassifyEngine<C: Classifier> {
    classifier: C,
}

impl<C: Classifier> ClassifyEngine<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classify_one(&self, input: &str) -> NumberForm {
        self.classifier.classify(input)
    }

    /// Classifies every input in order. Classification cannot fail, so
    /// the run itself cannot either.
    pub fn run<I, S>(&self, inputs: I) -> ClassifyReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classifications = Vec::new();
        let mut roman_count = 0;
        let mut arabic_count = 0;

        for input in inputs {
            let input = input.into();
            let form = self.classifier.classify(&input);
            tracing::debug!("Classified {:?} as {}", input, form);

            match form {
                NumberForm::Roman => roman_count += 1,
                NumberForm::Arabic => arabic_count += 1,
            }
            classifications.push(Classification { input, form });
        }

        tracing::info!(
            "Classified {} inputs ({} roman, {} arabic)",
            classifications.len(),
            roman_count,
            arabic_count
        );

        ClassifyReport {
            classifications,
            roman_count,
            arabic_count,
        }
    }
}
