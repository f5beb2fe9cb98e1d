//! # Logistic Regression
//!
//! `foodcast-logistic` holds the order classifier: a two class logistic regression whose
//! coefficients were learned elsewhere and are loaded as an artifact. Training is not part of this
//! crate.
//!
//! With the `serde` feature the [fitted model](struct.FittedLogisticRegression.html) can be read
//! from JSON of the form
//!
//! ```json
//! { "intercept": -0.25, "params": [0.1, -0.4, ...], "threshold": 0.5 }
//! ```
//!
//! where `threshold` is optional and defaults to `0.5`.

pub mod error;

use crate::error::{Error, Result};
use foodcast::traits::Predict;
use foodcast::Float;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix2, Zip};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Class predicted when the probability reaches the threshold
pub const POSITIVE_CLASS: usize = 1;
/// Class predicted otherwise
pub const NEGATIVE_CLASS: usize = 0;

fn default_threshold<F: Float>() -> F {
    F::cast(0.5)
}

/// A fitted logistic regression which can make predictions
///
/// The probability of the positive class is `sigm(x . params + intercept)` with
/// `sigm(x) = 1/(1+exp(-x))`. Samples with a probability of at least `threshold` are assigned
/// class `1`, all others class `0`.
///
/// ## Examples
///
/// ```rust
/// use foodcast::traits::Predict;
/// use foodcast_logistic::FittedLogisticRegression;
/// use ndarray::array;
///
/// let model = FittedLogisticRegression::new(0.0, array![2.0, -1.0]);
/// let classes = model.predict(&array![[1.0, 0.5], [-1.0, 0.5]]);
/// assert_eq!(classes, array![1, 0]);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, PartialEq, Debug)]
pub struct FittedLogisticRegression<F: Float> {
    #[cfg_attr(feature = "serde", serde(default = "default_threshold"))]
    threshold: F,
    intercept: F,
    params: Vec<F>,
}

impl<F: Float> FittedLogisticRegression<F> {
    pub fn new(intercept: F, params: Array1<F>) -> FittedLogisticRegression<F> {
        FittedLogisticRegression {
            threshold: default_threshold(),
            intercept,
            params: params.to_vec(),
        }
    }

    /// Set the probability threshold for which the 'positive' class will be
    /// predicted. Defaults to 0.5.
    pub fn set_threshold(mut self, threshold: F) -> Result<FittedLogisticRegression<F>> {
        if !(threshold >= F::zero() && threshold <= F::one()) {
            return Err(Error::InvalidThreshold(threshold.to_string()));
        }
        self.threshold = threshold;
        Ok(self)
    }

    pub fn threshold(&self) -> F {
        self.threshold
    }

    pub fn intercept(&self) -> F {
        self.intercept
    }

    pub fn params(&self) -> ArrayView1<F> {
        ArrayView1::from(&self.params[..])
    }

    pub fn n_features(&self) -> usize {
        self.params.len()
    }

    /// Validate a loaded model against the width of the feature vector it will receive
    ///
    /// Checks that all coefficients are finite, that the threshold is a probability and that the
    /// model has one coefficient per feature.
    pub fn check(&self, n_features: usize) -> Result<()> {
        if !self.intercept.is_finite() || self.params.iter().any(|p| !p.is_finite()) {
            return Err(Error::InvalidValues);
        }
        if !(self.threshold >= F::zero() && self.threshold <= F::one()) {
            return Err(Error::InvalidThreshold(self.threshold.to_string()));
        }
        if self.params.len() != n_features {
            return Err(Error::FeatureCount {
                expected: self.params.len(),
                found: n_features,
            });
        }
        Ok(())
    }

    /// Given a feature matrix, predict the probabilities that a sample
    /// belongs to the positive class.
    pub fn predict_probabilities<A: Data<Elem = F>>(&self, x: &ArrayBase<A, Ix2>) -> Array1<F> {
        let mut probs = x.dot(&self.params()) + self.intercept;
        probs.mapv_inplace(logistic);
        probs
    }
}

impl<'a, F: Float, D: Data<Elem = F>> Predict<&'a ArrayBase<D, Ix2>, Array1<usize>>
    for FittedLogisticRegression<F>
{
    /// Given a feature matrix, predict one class per row.
    ///
    /// Panics if the number of columns differs from the number of coefficients, use
    /// [`check`](struct.FittedLogisticRegression.html#method.check) when loading a model.
    fn predict(&self, x: &'a ArrayBase<D, Ix2>) -> Array1<usize> {
        assert_eq!(
            x.ncols(),
            self.params.len(),
            "Number of data features must match the number of features the model was trained with."
        );

        let mut y = Array1::zeros(x.nrows());
        Zip::from(&self.predict_probabilities(x))
            .and(&mut y)
            .for_each(|prob, out| {
                *out = if *prob >= self.threshold {
                    POSITIVE_CLASS
                } else {
                    NEGATIVE_CLASS
                }
            });
        y
    }
}

/// Computes the logistic function
fn logistic<F: Float>(x: F) -> F {
    F::one() / (F::one() + (-x).exp())
}
