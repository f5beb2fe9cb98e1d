//! Fields of the prediction form
//!
//! One field per column of the feature vector. Number inputs carry the bounds enforced by the
//! browser, select boxes carry their options. The first option (or the lower bound) is the
//! value shown before anything is submitted.

use std::collections::HashMap;

use foodcast::{RawValue, UserInput};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Widget {
    Number {
        min: Option<f64>,
        max: Option<f64>,
        /// Integer inputs step by one, float inputs accept any value
        integer: bool,
    },
    Select(&'static [&'static str]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Field {
    /// Column of the feature vector, also used as the form field name
    pub name: &'static str,
    pub label: &'static str,
    pub help: &'static str,
    pub widget: Widget,
}

impl Field {
    /// Value shown in an untouched form
    pub fn default_value(&self) -> String {
        match self.widget {
            Widget::Number { min, integer, .. } => {
                let min = min.unwrap_or(0.0);
                if integer {
                    format!("{}", min as i64)
                } else {
                    format!("{:.6}", min)
                }
            }
            Widget::Select(options) => options[0].to_string(),
        }
    }
}

pub const FIELDS: [Field; 11] = [
    Field {
        name: "Age",
        label: "Age",
        help: "Enter your age",
        widget: Widget::Number {
            min: Some(18.0),
            max: Some(100.0),
            integer: true,
        },
    },
    Field {
        name: "Gender",
        label: "Gender",
        help: "Select your gender",
        widget: Widget::Select(&["Male", "Female"]),
    },
    Field {
        name: "Marital Status",
        label: "Marital Status",
        help: "Select your marital status",
        widget: Widget::Select(&["Single", "Married"]),
    },
    Field {
        name: "Occupation",
        label: "Occupation",
        help: "Select your occupation",
        widget: Widget::Select(&["Student", "Employee", "Self Employed"]),
    },
    Field {
        name: "Monthly Income",
        label: "Monthly Income",
        help: "Select your monthly income",
        widget: Widget::Select(&[
            "No Income",
            "Below Rs.10000",
            "10001 to 25000",
            "25001 to 50000",
            "More than 50000",
        ]),
    },
    Field {
        name: "Educational Qualifications",
        label: "Educational Qualifications",
        help: "Select your level of education",
        widget: Widget::Select(&["Under Graduate", "Graduate", "Post Graduate"]),
    },
    Field {
        name: "Family size",
        label: "Family size",
        help: "Enter the number of people in your family",
        widget: Widget::Number {
            min: Some(1.0),
            max: Some(20.0),
            integer: true,
        },
    },
    Field {
        name: "latitude",
        label: "Latitude",
        help: "Enter the latitude of your address",
        widget: Widget::Number {
            min: None,
            max: None,
            integer: false,
        },
    },
    Field {
        name: "longitude",
        label: "Longitude",
        help: "Enter the longitude of your address",
        widget: Widget::Number {
            min: None,
            max: None,
            integer: false,
        },
    },
    Field {
        name: "Pin code",
        label: "Pin code",
        help: "Enter your postal code",
        widget: Widget::Number {
            min: Some(100000.0),
            max: Some(999999.0),
            integer: true,
        },
    },
    Field {
        name: "Feedback",
        label: "Feedback",
        help: "Select your feedback",
        widget: Widget::Select(&["Negative", "Positive"]),
    },
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{label} must be at least {min}, got {value}")]
    BelowMinimum {
        label: &'static str,
        min: f64,
        value: f64,
    },
    #[error("{label} must be at most {max}, got {value}")]
    AboveMaximum {
        label: &'static str,
        max: f64,
        value: f64,
    },
}

/// Turns url-encoded form fields into a user input record
///
/// Fields the browser did not send are left out and read as `"Unknown"` downstream. Numbers
/// outside a widget's bounds are rejected here. Number fields that do not parse, or parse to NaN
/// or an infinity, are passed on as text, so the transform reports them.
pub fn parse_submission(fields: &HashMap<String, String>) -> Result<UserInput, FormError> {
    let mut input = UserInput::new();
    for field in FIELDS.iter() {
        let raw = match fields.get(field.name) {
            Some(raw) => raw,
            None => continue,
        };

        let value = match field.widget {
            Widget::Number { min, max, .. } => match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    check_bounds(field.label, value, min, max)?;
                    RawValue::Number(value)
                }
                _ => RawValue::Text(raw.clone()),
            },
            Widget::Select(_) => RawValue::Text(raw.clone()),
        };
        input.insert(field.name, value);
    }

    Ok(input)
}

fn check_bounds(
    label: &'static str,
    value: f64,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<(), FormError> {
    if let Some(min) = min.filter(|min| value < *min) {
        return Err(FormError::BelowMinimum { label, min, value });
    }
    if let Some(max) = max.filter(|max| value > *max) {
        return Err(FormError::AboveMaximum { label, max, value });
    }
    Ok(())
}
