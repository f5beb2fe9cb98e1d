use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::schema::UNKNOWN_PLACEHOLDER;

/// A single value as supplied by a form widget
///
/// Number inputs produce `Number`, select boxes and free text produce `Text`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", untagged)
)]
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Key used to look the value up in a categorical vocabulary
    pub fn stringify(&self) -> String {
        match self {
            RawValue::Number(x) => x.to_string(),
            RawValue::Text(s) => s.clone(),
        }
    }

    /// Coerce the value to a finite float
    ///
    /// `None` if the value is text that does not parse, or if it is NaN or infinite.
    pub fn as_f64(&self) -> Option<f64> {
        let x = match self {
            RawValue::Number(x) => *x,
            RawValue::Text(s) => s.trim().parse().ok()?,
        };
        Some(x).filter(|x| x.is_finite())
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(x) => write!(f, "{}", x),
            RawValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for RawValue {
    fn from(x: f64) -> Self {
        RawValue::Number(x)
    }
}

impl From<i64> for RawValue {
    fn from(x: i64) -> Self {
        RawValue::Number(x as f64)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

/// User input record
///
/// Holds at most one value per column of a single form submission. Columns the user did not
/// submit read as the `"Unknown"` placeholder.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserInput {
    values: BTreeMap<String, RawValue>,
}

impl UserInput {
    pub fn new() -> Self {
        UserInput::default()
    }

    /// Builder-style setter
    pub fn with<S: Into<String>, V: Into<RawValue>>(mut self, name: S, value: V) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert<S: Into<String>, V: Into<RawValue>>(&mut self, name: S, value: V) {
        self.values.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Value submitted for `name`, or the `"Unknown"` placeholder
    pub fn get(&self, name: &str) -> RawValue {
        self.values
            .get(name)
            .cloned()
            .unwrap_or_else(|| RawValue::Text(UNKNOWN_PLACEHOLDER.to_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<S: Into<String>, V: Into<RawValue>> std::iter::FromIterator<(S, V)> for UserInput {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut input = UserInput::new();
        for (name, value) in iter {
            input.insert(name, value);
        }
        input
    }
}
