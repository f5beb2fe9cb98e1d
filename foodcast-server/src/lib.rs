pub mod form;
pub mod render;
pub mod server;

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use foodcast::traits::{Fit, Predict, Transformer};
use foodcast::{Table, UserInput};
use foodcast_logistic::{FittedLogisticRegression, POSITIVE_CLASS};
use foodcast_preprocessing::{FittedPreprocessor, Preprocessor};

/// Everything fitted or loaded at startup
///
/// Built once before the server accepts requests and shared read-only by every handler.
#[derive(Debug)]
pub struct Store {
    preprocessor: FittedPreprocessor,
    model: FittedLogisticRegression<f64>,
}

impl Store {
    /// Fits the preprocessor on `reference` and checks that `model` accepts its output
    pub fn new(reference: &Table, model: FittedLogisticRegression<f64>) -> anyhow::Result<Self> {
        let preprocessor = Preprocessor::online_foods()
            .fit(reference)
            .context("failed to fit encoders on the reference dataset")?;
        model
            .check(preprocessor.n_features())
            .context("model artifact does not match the feature layout")?;

        Ok(Self {
            preprocessor,
            model,
        })
    }

    /// Reads the reference CSV (optionally gzipped) and the JSON model artifact
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(reference: P, model: Q) -> anyhow::Result<Self> {
        let reference = foodcast_datasets::load_table(reference.as_ref())
            .with_context(|| format!("failed to read {}", reference.as_ref().display()))?;

        let model = model.as_ref();
        let file = File::open(model).with_context(|| format!("failed to open {}", model.display()))?;
        let model = serde_json::from_reader(file)
            .with_context(|| format!("failed to parse model artifact {}", model.display()))?;

        Self::new(&reference, model)
    }

    pub fn preprocessor(&self) -> &FittedPreprocessor {
        &self.preprocessor
    }

    pub fn model(&self) -> &FittedLogisticRegression<f64> {
        &self.model
    }

    /// Transform a submission and classify it
    ///
    /// Only the transform can fail: a numeric field that does not hold a number.
    pub fn predict(&self, input: &UserInput) -> foodcast_preprocessing::Result<Prediction> {
        let features = self.preprocessor.transform(input)?;
        let class = self.model.predict(&features)[0];
        let probability = self.model.predict_probabilities(&features)[0];

        Ok(Prediction { class, probability })
    }
}

/// Classifier output for one submission
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    pub class: usize,
    pub probability: f64,
}

impl Prediction {
    /// `"Yes"` if the customer is predicted to order online, `"No"` otherwise
    pub fn label(&self) -> &'static str {
        label(self.class)
    }
}

pub fn label(class: usize) -> &'static str {
    if class == POSITIVE_CLASS {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use foodcast::RawValue;
    use ndarray::array;

    pub(crate) fn store() -> Store {
        Store::load("./test/onlinefoods.csv", "./test/model.json")
            .expect("failed to load from input files")
    }

    pub(crate) fn submission() -> UserInput {
        UserInput::new()
            .with("Age", 22i64)
            .with("Gender", "Female")
            .with("Marital Status", "Single")
            .with("Occupation", "Student")
            .with("Monthly Income", "No Income")
            .with("Educational Qualifications", "Post Graduate")
            .with("Family size", 3i64)
            .with("latitude", 12.9766)
            .with("longitude", 77.5993)
            .with("Pin code", 560001i64)
            .with("Feedback", "Positive")
    }

    #[test]
    fn labels() {
        assert_eq!(label(1), "Yes");
        assert_eq!(label(0), "No");
        assert_eq!(label(7), "No");
    }

    #[test]
    fn load_from_files() {
        let store = store();
        assert_eq!(store.preprocessor().n_features(), 11);
        assert_eq!(store.model().n_features(), 11);
    }

    #[test]
    fn load_gzipped_sample() {
        let store = Store::load("../datasets/data/onlinefoods.csv.gz", "./test/model.json").unwrap();
        assert_eq!(store.preprocessor(), self::store().preprocessor());
    }

    #[test]
    fn rejects_mismatching_model() {
        let reference = foodcast_datasets::load_table("./test/onlinefoods.csv").unwrap();
        let model = FittedLogisticRegression::new(0.0, array![1.0, 2.0]);
        let err = Store::new(&reference, model).unwrap_err();
        assert!(err.to_string().contains("feature layout"));
    }

    #[test]
    fn rejects_reference_without_required_columns() {
        let reference = foodcast_datasets::load_table("./test/onlinefoods.csv")
            .unwrap()
            .select(vec!["Age", "Gender", "Output"])
            .unwrap();
        let model = FittedLogisticRegression::new(0.0, ndarray::Array1::zeros(11));
        assert!(Store::new(&reference, model).is_err());
    }

    #[test]
    fn missing_files_are_fatal() {
        assert!(Store::load("./test/missing.csv", "./test/model.json").is_err());
        assert!(Store::load("./test/onlinefoods.csv", "./test/missing.json").is_err());
    }

    #[test]
    fn predicts_yes_and_no() {
        let store = store();
        let yes = store.predict(&submission()).unwrap();
        assert_eq!(yes.class, 1);
        assert_eq!(yes.label(), "Yes");
        assert!(yes.probability > 0.5);

        let no = store
            .predict(&submission().with("Feedback", "Negative "))
            .unwrap();
        assert_eq!(no.label(), "No");
    }

    #[test]
    fn unknown_values_still_predict() {
        let store = store();
        let prediction = store
            .predict(&submission().with("Gender", "Other"))
            .unwrap();
        assert_eq!(prediction.label(), "Yes");
    }

    #[test]
    fn garbage_number_is_an_error() {
        let store = store();
        let res = store.predict(&submission().with("Age", RawValue::Text("old".into())));
        assert!(res.is_err());
    }

    #[test]
    fn nan_is_an_error() {
        let store = store();
        assert!(store
            .predict(&submission().with("Age", RawValue::Text("nan".into())))
            .is_err());
        assert!(store
            .predict(&submission().with("longitude", RawValue::Number(f64::NAN)))
            .is_err());
    }
}
