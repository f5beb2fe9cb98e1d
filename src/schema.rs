//! Column layout of the reference dataset and of the feature vector
//!
//! The classifier was trained on a fixed set of columns in a fixed order. The schema records that
//! order together with how each column is encoded: numeric columns are standardized, categorical
//! columns are label encoded.

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use std::fmt;

/// Substituted for every column missing from a user submission
pub const UNKNOWN_PLACEHOLDER: &str = "Unknown";

/// Code of a categorical value never seen while fitting
pub const UNKNOWN_CODE: i64 = -1;

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Categorical => write!(f, "categorical"),
        }
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn numeric<S: Into<String>>(name: S) -> Self {
        ColumnSpec {
            name: name.into(),
            kind: ColumnKind::Numeric,
        }
    }

    pub fn categorical<S: Into<String>>(name: S) -> Self {
        ColumnSpec {
            name: name.into(),
            kind: ColumnKind::Categorical,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Numeric
    }
}

/// Ordered list of the columns fed to the classifier
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Schema { columns }
    }

    /// The eleven columns of the online food dataset, in training order
    pub fn online_foods() -> Self {
        Schema::new(vec![
            ColumnSpec::numeric("Age"),
            ColumnSpec::categorical("Gender"),
            ColumnSpec::categorical("Marital Status"),
            ColumnSpec::categorical("Occupation"),
            ColumnSpec::categorical("Monthly Income"),
            ColumnSpec::categorical("Educational Qualifications"),
            ColumnSpec::numeric("Family size"),
            ColumnSpec::numeric("latitude"),
            ColumnSpec::numeric("longitude"),
            ColumnSpec::numeric("Pin code"),
            ColumnSpec::categorical("Feedback"),
        ])
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Position of a column in the feature vector
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn numeric(&self) -> impl Iterator<Item = (usize, &ColumnSpec)> {
        self.columns.iter().enumerate().filter(|(_, c)| c.is_numeric())
    }

    pub fn categorical(&self) -> impl Iterator<Item = (usize, &ColumnSpec)> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_numeric())
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::online_foods()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn online_foods_layout() {
        let schema = Schema::online_foods();
        assert_eq!(schema.len(), 11);

        let numeric = schema.numeric().map(|(_, c)| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(
            numeric,
            vec!["Age", "Family size", "latitude", "longitude", "Pin code"]
        );

        let categorical = schema.categorical().map(|(i, _)| i).collect::<Vec<_>>();
        assert_eq!(categorical, vec![1, 2, 3, 4, 5, 10]);

        assert_eq!(schema.position("Feedback"), Some(10));
        assert_eq!(schema.position("Output"), None);
    }
}
