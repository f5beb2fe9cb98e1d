//! `foodcast` predicts whether a customer will order food online, given a handful of
//! demographic attributes and the feedback they left on a previous order.
//!
//! This crate holds the pieces shared by the rest of the workspace:
//!
//! * the [`Schema`](schema/struct.Schema.html) of the eleven columns the classifier was trained on,
//! * the string-celled reference [`Table`](dataset/struct.Table.html) and the per-request
//!   [`UserInput`](dataset/struct.UserInput.html),
//! * the `Fit`, `Transformer` and `Predict` traits implemented by the algorithm crates.
//!
//! The encoders and the scaler live in `foodcast-preprocessing`, the classifier artifact in
//! `foodcast-logistic` and the web form in `foodcast-server`.

pub mod dataset;
pub mod error;
pub mod prelude;
pub mod schema;
pub mod traits;

pub use dataset::{Float, RawValue, Table, UserInput};
pub use schema::{ColumnKind, ColumnSpec, Schema};
