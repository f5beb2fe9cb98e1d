//! Fitting and applying the full column transform
//!
//! A [`Preprocessor`](struct.Preprocessor.html) fits one label encoder per categorical column and
//! a single standard scaler across all numeric columns of the reference table. The resulting
//! [`FittedPreprocessor`](struct.FittedPreprocessor.html) turns a user submission into the
//! one-row feature matrix expected by the classifier.

use crate::error::{Error, Result};
use crate::label_encoding::{FittedLabelEncoder, LabelEncoder};
use crate::linear_scaling::{FittedStandardScaler, StandardScaler};
use foodcast::schema::{ColumnSpec, Schema};
use foodcast::traits::{Fit, Transformer};
use foodcast::{Table, UserInput};
use ndarray::{Array1, Array2, Axis};

/// Categorical label of an empty reference cell
const MISSING_LABEL: &str = "nan";

#[derive(Clone, Debug, Default)]
pub struct Preprocessor {
    schema: Schema,
}

impl Preprocessor {
    pub fn new(schema: Schema) -> Self {
        Preprocessor { schema }
    }

    /// Preprocessor over the eleven columns of the online food dataset
    pub fn online_foods() -> Self {
        Preprocessor::new(Schema::online_foods())
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl Fit<Table> for Preprocessor {
    type Object = Result<FittedPreprocessor>;

    /// Fits encoders and scaler on the reference table.
    ///
    /// Fails if a schema column is absent from the table, if the table has no rows, or if a
    /// numeric cell does not parse as a number. Columns outside the schema are ignored.
    fn fit(&self, table: &Table) -> Self::Object {
        let table = table.select(self.schema.names())?;

        let mut steps = Vec::with_capacity(self.schema.len());
        let mut n_numeric = 0;
        for (idx, spec) in self.schema.columns().iter().enumerate() {
            if spec.is_numeric() {
                steps.push(ColumnStep::Scaled(n_numeric));
                n_numeric += 1;
            } else {
                let labels = table
                    .rows()
                    .iter()
                    .map(|row| categorical_label(&row[idx]))
                    .collect::<Vec<_>>();
                steps.push(ColumnStep::Encoded(LabelEncoder::new().fit(&labels[..])));
            }
        }

        let numeric = numeric_records(&table, &self.schema, n_numeric)?;
        let scaler = StandardScaler::new().fit(&numeric)?;

        Ok(FittedPreprocessor {
            schema: self.schema.clone(),
            steps,
            scaler,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ColumnStep {
    Encoded(FittedLabelEncoder),
    /// Position of the column among the scaler features
    Scaled(usize),
}

/// Encoders and scaler fitted on the reference table
///
/// Immutable once fitted: every call to `transform` uses the same vocabularies and scaling
/// parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedPreprocessor {
    schema: Schema,
    steps: Vec<ColumnStep>,
    scaler: FittedStandardScaler<f64>,
}

impl FittedPreprocessor {
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Width of the feature vector
    pub fn n_features(&self) -> usize {
        self.schema.len()
    }

    /// Label encoder of a categorical column
    pub fn encoder(&self, name: &str) -> Option<&FittedLabelEncoder> {
        match self.schema.position(name).map(|i| &self.steps[i]) {
            Some(ColumnStep::Encoded(encoder)) => Some(encoder),
            _ => None,
        }
    }

    /// Scaler over the numeric columns, in schema order
    pub fn scaler(&self) -> &FittedStandardScaler<f64> {
        &self.scaler
    }

    fn columns(&self) -> impl Iterator<Item = (usize, &ColumnSpec, &ColumnStep)> {
        self.schema
            .columns()
            .iter()
            .zip(self.steps.iter())
            .enumerate()
            .map(|(i, (spec, step))| (i, spec, step))
    }

    /// Encodes and scales every row of a reference table
    pub fn transform_records(&self, table: &Table) -> Result<Array2<f64>> {
        let table = table.select(self.schema.names())?;
        let n_numeric = self.scaler.n_features();
        let numeric = self.scaler.transform(numeric_records(&table, &self.schema, n_numeric)?);

        let mut out = Array2::zeros((table.nrows(), self.n_features()));
        for (mut out_row, (cells, scaled)) in out
            .axis_iter_mut(Axis(0))
            .zip(table.rows().iter().zip(numeric.axis_iter(Axis(0))))
        {
            for (i, _, step) in self.columns() {
                out_row[i] = match step {
                    ColumnStep::Encoded(encoder) => {
                        encoder.transform(categorical_label(&cells[i])) as f64
                    }
                    ColumnStep::Scaled(j) => scaled[*j],
                };
            }
        }

        Ok(out)
    }
}

impl<'a> Transformer<&'a UserInput, Result<Array2<f64>>> for FittedPreprocessor {
    /// Turns a single submission into a feature matrix of shape (1, n_features)
    ///
    /// Absent columns read as `"Unknown"`. Categorical values outside the fitted vocabulary encode
    /// to `-1`. A numeric column whose value cannot be read as a number is an error.
    fn transform(&self, input: &'a UserInput) -> Result<Array2<f64>> {
        let mut row = Array1::zeros(self.n_features());
        let mut numeric = Array1::zeros(self.scaler.n_features());

        for (i, spec, step) in self.columns() {
            let value = input.get(&spec.name);
            match step {
                ColumnStep::Encoded(encoder) => {
                    row[i] = encoder.transform(value.stringify().as_str()) as f64;
                }
                ColumnStep::Scaled(j) => {
                    numeric[*j] = value.as_f64().ok_or_else(|| Error::NotNumeric {
                        column: spec.name.clone(),
                        value: value.to_string(),
                    })?;
                }
            }
        }

        let scaled = self.scaler.transform_row(numeric.view())?;
        for (i, _, step) in self.columns() {
            if let ColumnStep::Scaled(j) = step {
                row[i] = scaled[*j];
            }
        }

        Ok(row.insert_axis(Axis(0)))
    }
}

fn categorical_label(cell: &str) -> &str {
    if cell.is_empty() {
        MISSING_LABEL
    } else {
        cell
    }
}

/// Parses the numeric columns of an already selected table into (nrows, n_numeric)
fn numeric_records(table: &Table, schema: &Schema, n_numeric: usize) -> Result<Array2<f64>> {
    let mut records = Array2::zeros((table.nrows(), n_numeric));
    for (j, (idx, spec)) in schema.numeric().enumerate() {
        for (row, cells) in table.rows().iter().enumerate() {
            let cell = &cells[idx];
            records[[row, j]] = cell
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|x| x.is_finite())
                .ok_or_else(|| Error::InvalidNumber {
                    column: spec.name.clone(),
                    row,
                    value: cell.clone(),
                })?;
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use foodcast::RawValue;

    const REFERENCE: &[[&str; 12]] = &[
        ["20", "Female", "Single", "Student", "No Income", "Post Graduate", "4", "12.9766", "77.5993", "560001", "Yes", "Positive"],
        ["30", "Male", "Married", "Employee", "More than 50000", "Graduate", "2", "12.977", "77.5773", "560009", "Yes", "Positive"],
        ["20", "Male", "Single", "Student", "Below Rs.10000", "Post Graduate", "3", "12.9551", "77.6593", "560017", "No", "Negative "],
        ["30", "Female", "Single", "Self Employeed", "25001 to 50000", "Graduate", "5", "12.9473", "77.5616", "560019", "Yes", "Positive"],
    ];

    fn reference() -> Table {
        let names = vec![
            "Age",
            "Gender",
            "Marital Status",
            "Occupation",
            "Monthly Income",
            "Educational Qualifications",
            "Family size",
            "latitude",
            "longitude",
            "Pin code",
            "Output",
            "Feedback",
        ];
        let rows = REFERENCE
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        Table::new(names, rows).unwrap()
    }

    fn submission() -> UserInput {
        UserInput::new()
            .with("Age", 30i64)
            .with("Gender", "Female")
            .with("Marital Status", "Single")
            .with("Occupation", "Student")
            .with("Monthly Income", "No Income")
            .with("Educational Qualifications", "Graduate")
            .with("Family size", 3i64)
            .with("latitude", 12.9766)
            .with("longitude", 77.5993)
            .with("Pin code", 560001i64)
            .with("Feedback", "Positive")
    }

    #[test]
    fn fits_sorted_vocabularies() {
        let fitted = Preprocessor::online_foods().fit(&reference()).unwrap();

        let gender = fitted.encoder("Gender").unwrap();
        assert_eq!(gender.classes(), &["Female", "Male"]);

        // trailing whitespace is part of the label
        let feedback = fitted.encoder("Feedback").unwrap();
        assert_eq!(feedback.classes(), &["Negative ", "Positive"]);

        assert!(fitted.encoder("Age").is_none());
        assert!(fitted.encoder("Output").is_none());
        assert_eq!(fitted.scaler().n_features(), 5);
    }

    #[test]
    fn refit_is_identical() {
        let table = reference();
        let first = Preprocessor::online_foods().fit(&table).unwrap();
        let second = Preprocessor::online_foods().fit(&table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn fit_leaves_reference_untouched() {
        let table = reference();
        let copy = table.clone();
        Preprocessor::online_foods().fit(&table).unwrap();
        assert_eq!(table, copy);
    }

    #[test]
    fn missing_reference_column_is_fatal() {
        let table = reference()
            .select(vec!["Age", "Gender", "Marital Status"])
            .unwrap();
        let res = Preprocessor::online_foods().fit(&table);
        assert_eq!(
            res,
            Err(Error::Foodcast(foodcast::error::Error::MissingColumn(
                "Occupation".into()
            )))
        );
    }

    #[test]
    fn unparsable_reference_number_is_fatal() {
        let table = Table::new(
            vec!["Age", "Gender"],
            vec![
                vec!["21".into(), "Male".into()],
                vec!["twenty".into(), "Female".into()],
            ],
        )
        .unwrap();
        let schema = Schema::new(vec![
            ColumnSpec::numeric("Age"),
            ColumnSpec::categorical("Gender"),
        ]);
        let res = Preprocessor::new(schema).fit(&table);
        assert_eq!(
            res,
            Err(Error::InvalidNumber {
                column: "Age".into(),
                row: 1,
                value: "twenty".into()
            })
        );
    }

    #[test]
    fn empty_reference_cell_is_nan_label() {
        let table = Table::new(
            vec!["Age", "Occupation"],
            vec![
                vec!["21".into(), "Student".into()],
                vec!["23".into(), "".into()],
            ],
        )
        .unwrap();
        let schema = Schema::new(vec![
            ColumnSpec::numeric("Age"),
            ColumnSpec::categorical("Occupation"),
        ]);
        let fitted = Preprocessor::new(schema).fit(&table).unwrap();
        assert_eq!(
            fitted.encoder("Occupation").unwrap().classes(),
            &["Student", "nan"]
        );
    }

    #[test]
    fn transforms_known_submission() {
        let fitted = Preprocessor::online_foods().fit(&reference()).unwrap();
        let features = fitted.transform(&submission()).unwrap();

        assert_eq!(features.dim(), (1, 11));
        // Age: mean 25, std 5
        assert_abs_diff_eq!(features[[0, 0]], 1.0);
        // Gender: Female -> 0
        assert_eq!(features[[0, 1]], 0.);
        // Marital Status: Married, Single
        assert_eq!(features[[0, 2]], 1.);
        // Occupation: Employee, Self Employeed, Student
        assert_eq!(features[[0, 3]], 2.);
        // Monthly Income: 25001 to 50000, Below Rs.10000, More than 50000, No Income
        assert_eq!(features[[0, 4]], 3.);
        // Educational Qualifications: Graduate, Post Graduate
        assert_eq!(features[[0, 5]], 0.);
        // Family size: mean 3.5
        assert!(features[[0, 6]] < 0.);
        // Feedback: "Negative ", Positive
        assert_eq!(features[[0, 10]], 1.);
    }

    #[test]
    fn numeric_columns_use_fitted_parameters() {
        let fitted = Preprocessor::online_foods().fit(&reference()).unwrap();
        let scaler = fitted.scaler();
        let features = fitted.transform(&submission()).unwrap();

        let inputs = [30., 3., 12.9766, 77.5993, 560001.];
        for (j, (idx, _)) in fitted.schema().numeric().enumerate() {
            let expected = (inputs[j] - scaler.means()[j]) / scaler.std_devs()[j];
            assert_abs_diff_eq!(features[[0, idx]], expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn unknown_category_is_sentinel() {
        let fitted = Preprocessor::online_foods().fit(&reference()).unwrap();
        let input = submission()
            .with("Gender", "Other")
            .with("Occupation", "Astronaut");
        let features = fitted.transform(&input).unwrap();
        assert_eq!(features[[0, 1]], -1.);
        assert_eq!(features[[0, 3]], -1.);
        // other columns are unaffected
        assert_eq!(features[[0, 2]], 1.);
    }

    #[test]
    fn missing_field_reads_as_unknown() {
        let fitted = Preprocessor::online_foods().fit(&reference()).unwrap();

        let mut omitted = UserInput::new();
        let mut placeholder = UserInput::new();
        for (name, value) in submission().iter() {
            if name != "Feedback" {
                omitted.insert(name, value.clone());
                placeholder.insert(name, value.clone());
            }
        }
        placeholder.insert("Feedback", "Unknown");

        let omitted = fitted.transform(&omitted).unwrap();
        let placeholder = fitted.transform(&placeholder).unwrap();
        assert_eq!(omitted, placeholder);
        assert_eq!(omitted[[0, 10]], -1.);
    }

    #[test]
    fn missing_numeric_field_is_reported() {
        let fitted = Preprocessor::online_foods().fit(&reference()).unwrap();
        let input = submission()
            .iter()
            .filter(|(name, _)| *name != "Pin code")
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect::<UserInput>();
        assert_eq!(
            fitted.transform(&input),
            Err(Error::NotNumeric {
                column: "Pin code".into(),
                value: "Unknown".into()
            })
        );
    }

    #[test]
    fn garbage_number_is_reported() {
        let fitted = Preprocessor::online_foods().fit(&reference()).unwrap();
        let input = submission().with("Family size", "a few");
        assert_eq!(
            fitted.transform(&input),
            Err(Error::NotNumeric {
                column: "Family size".into(),
                value: "a few".into()
            })
        );

        // numbers typed as text are accepted
        let input = submission().with("Family size", RawValue::Text("3".into()));
        assert_eq!(
            fitted.transform(&input).unwrap(),
            fitted.transform(&submission()).unwrap()
        );
    }

    #[test]
    fn non_finite_number_is_reported() {
        let fitted = Preprocessor::online_foods().fit(&reference()).unwrap();
        for (column, value) in &[
            ("Age", RawValue::Text("NaN".into())),
            ("latitude", RawValue::Text("inf".into())),
            ("Pin code", RawValue::Number(f64::NAN)),
        ] {
            let input = submission().with(*column, value.clone());
            assert_eq!(
                fitted.transform(&input),
                Err(Error::NotNumeric {
                    column: column.to_string(),
                    value: value.to_string(),
                })
            );
        }
    }

    #[test]
    fn non_finite_reference_number_is_fatal() {
        let table = Table::new(
            vec!["Age"],
            vec![vec!["21".into()], vec!["inf".into()]],
        )
        .unwrap();
        let res = Preprocessor::new(Schema::new(vec![ColumnSpec::numeric("Age")])).fit(&table);
        assert_eq!(
            res,
            Err(Error::InvalidNumber {
                column: "Age".into(),
                row: 1,
                value: "inf".into()
            })
        );
    }

    #[test]
    fn transform_is_idempotent() {
        let fitted = Preprocessor::online_foods().fit(&reference()).unwrap();
        let first = fitted.transform(&submission()).unwrap();
        let second = fitted.transform(&submission()).unwrap();
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn reference_encoding_is_standardized() {
        let table = reference();
        let fitted = Preprocessor::online_foods().fit(&table).unwrap();
        let encoded = fitted.transform_records(&table).unwrap();

        assert_eq!(encoded.dim(), (4, 11));
        for (idx, _) in fitted.schema().numeric() {
            let column = encoded.column(idx);
            let mean = column.sum() / column.len() as f64;
            let var = column.mapv(|x| (x - mean).powi(2)).sum() / column.len() as f64;
            assert_abs_diff_eq!(mean, 0., epsilon = 1e-9);
            assert_abs_diff_eq!(var.sqrt(), 1., epsilon = 1e-9);
        }
        // categorical codes cover 0..k-1
        assert_eq!(encoded.column(1).to_vec(), vec![0., 1., 1., 0.]);
    }
}
