//! # Preprocessing
//! `foodcast-preprocessing` turns raw online food records into the numeric features the order
//! classifier was trained on.
//!
//! ## Current state
//! Currently `foodcast-preprocessing` provides the following preprocessing methods:
//! * Label encoding of categorical columns, with a `-1` code for values never seen while fitting
//! * Standard scaling of numeric columns with the population standard deviation
//! * A [`Preprocessor`](pipeline/struct.Preprocessor.html) that fits both over a reference
//!   table and transforms single user submissions
//!
//! ## Example
//!
//! ```rust
//! use foodcast::traits::{Fit, Transformer};
//! use foodcast::{ColumnSpec, Schema, Table, UserInput};
//! use foodcast_preprocessing::Preprocessor;
//!
//! let reference = Table::new(
//!     vec!["Age", "Gender"],
//!     vec![
//!         vec!["20".to_string(), "Male".to_string()],
//!         vec!["30".to_string(), "Female".to_string()],
//!     ],
//! )
//! .unwrap();
//! let schema = Schema::new(vec![
//!     ColumnSpec::numeric("Age"),
//!     ColumnSpec::categorical("Gender"),
//! ]);
//! let fitted = Preprocessor::new(schema).fit(&reference).unwrap();
//!
//! let input = UserInput::new().with("Age", 30i64).with("Gender", "Other");
//! let features = fitted.transform(&input).unwrap();
//! assert_eq!(features.row(0).to_vec(), vec![1.0, -1.0]);
//! ```

pub mod error;
pub mod label_encoding;
pub mod linear_scaling;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{FittedPreprocessor, Preprocessor};
