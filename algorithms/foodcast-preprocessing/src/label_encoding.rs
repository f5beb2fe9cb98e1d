//! Label encoding of categorical columns

use std::collections::BTreeSet;

use foodcast::schema::UNKNOWN_CODE;
use foodcast::traits::{Fit, Transformer};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Label Encoder: learns the vocabulary of a categorical column, producing a
/// [fitted label encoder](struct.FittedLabelEncoder.html) that maps each known value to its code.
///
/// The distinct values are sorted ascending and numbered from zero, so fitting the same column
/// twice always yields the same mapping.
///
/// ### Example
///
/// ```rust
/// use foodcast::traits::{Fit, Transformer};
/// use foodcast_preprocessing::label_encoding::LabelEncoder;
///
/// let encoder = LabelEncoder::new().fit(&["Male", "Female", "Male"][..]);
/// assert_eq!(encoder.classes(), &["Female".to_string(), "Male".to_string()]);
/// assert_eq!(encoder.transform("Male"), 1);
/// assert_eq!(encoder.transform("Other"), -1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LabelEncoder;

impl LabelEncoder {
    pub fn new() -> Self {
        LabelEncoder
    }
}

impl<S: AsRef<str>> Fit<[S]> for LabelEncoder {
    type Object = FittedLabelEncoder;

    fn fit(&self, values: &[S]) -> Self::Object {
        let classes = values
            .iter()
            .map(|v| v.as_ref().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        FittedLabelEncoder { classes }
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
/// The result of fitting a [label encoder](struct.LabelEncoder.html).
pub struct FittedLabelEncoder {
    classes: Vec<String>,
}

impl FittedLabelEncoder {
    /// Known values, sorted ascending. The position of a value is its code.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Code of `value`, `None` if it was not seen while fitting
    pub fn code(&self, value: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(value))
            .ok()
    }
}

impl<'a> Transformer<&'a str, i64> for FittedLabelEncoder {
    /// Encodes a value, unseen values map to `-1`
    fn transform(&self, value: &'a str) -> i64 {
        self.code(value)
            .map(|c| c as i64)
            .unwrap_or(UNKNOWN_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_sort_order() {
        let values = vec!["Student", "Employee", "Self Employeed", "Student", "House wife"];
        let encoder = LabelEncoder::new().fit(&values[..]);

        assert_eq!(
            encoder.classes(),
            &["Employee", "House wife", "Self Employeed", "Student"]
        );
        for (code, class) in encoder.classes().iter().enumerate() {
            assert_eq!(encoder.code(class), Some(code));
            assert_eq!(encoder.transform(class.as_str()), code as i64);
        }
    }

    #[test]
    fn unseen_value_is_unknown() {
        let encoder = LabelEncoder::new().fit(&["Male", "Female"][..]);
        assert_eq!(encoder.transform("Female"), 0);
        assert_eq!(encoder.transform("Male"), 1);
        assert_eq!(encoder.transform("Other"), -1);
        assert_eq!(encoder.transform("Unknown"), -1);
        // lookups are exact
        assert_eq!(encoder.transform("male"), -1);
    }

    #[test]
    fn refit_is_identical() {
        let values = vec!["b", "a", "c", "a", "nan"];
        let first = LabelEncoder::new().fit(&values[..]);
        let second = LabelEncoder::new().fit(&values[..]);
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn empty_vocabulary() {
        let values: Vec<String> = vec![];
        let encoder = LabelEncoder::new().fit(&values[..]);
        assert!(encoder.is_empty());
        assert_eq!(encoder.transform("anything"), -1);
    }
}
