//! Provide traits for different classes of algorithms
//!

/// Fittable algorithms
///
/// A fittable algorithm takes a reference dataset and creates a concept of some kind about it.
/// The hyperparameters live in `self`, the learned state in the returned object. Fitting never
/// mutates the dataset.
pub trait Fit<R: ?Sized> {
    type Object;

    fn fit(&self, records: &R) -> Self::Object;
}

/// Transformation algorithms
///
/// A transformer takes a record or a set of records and maps it into a new representation, using
/// only the state learned during fitting.
pub trait Transformer<R, T> {
    fn transform(&self, x: R) -> T;
}

/// Predict with a fitted model
///
/// The model is opaque to the caller: it receives a feature matrix and returns one class label
/// per row.
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> T;
}
