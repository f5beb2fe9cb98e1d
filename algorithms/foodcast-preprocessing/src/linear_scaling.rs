//! Standard scaling of numeric columns

use crate::error::{Error, Result};
use approx::abs_diff_eq;
use foodcast::traits::{Fit, Transformer};
use foodcast::Float;
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Axis, Data, Ix2, Zip};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Standard Scaler: learns the mean and the population standard deviation of every feature of a
/// dataset, producing a [fitted standard scaler](struct.FittedStandardScaler.html) that can be
/// used to scale other records with the same parameters.
///
/// Each feature is mapped as `(x - mean) / std`. A feature that is constant over the dataset keeps
/// a scale of one, so it is only centered.
///
/// ### Example
///
/// ```rust
/// use foodcast::traits::{Fit, Transformer};
/// use foodcast_preprocessing::linear_scaling::StandardScaler;
/// use ndarray::array;
///
/// let records = array![[20.], [25.], [30.]];
/// let scaler = StandardScaler::new().fit(&records).unwrap();
/// let scaled = scaler.transform(array![[25.]]);
/// assert_eq!(scaled[[0, 0]], 0.);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StandardScaler;

impl StandardScaler {
    pub fn new() -> Self {
        StandardScaler
    }
}

impl<F: Float, D: Data<Elem = F>> Fit<ArrayBase<D, Ix2>> for StandardScaler {
    type Object = Result<FittedStandardScaler<F>>;

    /// Fits the records of size (nsamples, nfeatures). Will return an error if there are no
    /// samples.
    fn fit(&self, records: &ArrayBase<D, Ix2>) -> Self::Object {
        FittedStandardScaler::standard(records)
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// The result of fitting a [standard scaler](struct.StandardScaler.html).
/// Scales records with the parameters learned during fitting.
pub struct FittedStandardScaler<F: Float> {
    means: Array1<F>,
    std_devs: Array1<F>,
}

impl<F: Float> FittedStandardScaler<F> {
    pub(crate) fn standard<D: Data<Elem = F>>(records: &ArrayBase<D, Ix2>) -> Result<Self> {
        if records.nrows() == 0 {
            return Err(Error::NotEnoughSamples);
        }
        let means = records.mean_axis(Axis(0)).ok_or(Error::NotEnoughSamples)?;
        let std_devs = records.std_axis(Axis(0), F::zero()).mapv(|s| {
            if abs_diff_eq!(s, F::zero()) {
                // if feature is constant then don't scale
                F::one()
            } else {
                s
            }
        });
        Ok(Self { means, std_devs })
    }

    /// Array of size `n_features` that contains the mean subtracted from each feature
    pub fn means(&self) -> &Array1<F> {
        &self.means
    }

    /// Array of size `n_features` that contains the divisor applied to each centered feature
    pub fn std_devs(&self) -> &Array1<F> {
        &self.std_devs
    }

    pub fn n_features(&self) -> usize {
        self.means.len()
    }

    /// Scales a single record of size `n_features`
    pub fn transform_row(&self, row: ArrayView1<F>) -> Result<Array1<F>> {
        if row.len() != self.n_features() {
            return Err(Error::FeatureCount {
                expected: self.n_features(),
                found: row.len(),
            });
        }
        let mut out = row.to_owned();
        Zip::from(&mut out)
            .and(&self.means)
            .and(&self.std_devs)
            .for_each(|el, &mean, &std| *el = (*el - mean) / std);
        Ok(out)
    }
}

impl<F: Float> Transformer<Array2<F>, Array2<F>> for FittedStandardScaler<F> {
    /// Scales an array of size (nsamples, nfeatures) according to the scaler's `means` and `std_devs`.
    /// Panics if the shape of the input array is not compatible with the shape of the dataset used for fitting.
    fn transform(&self, x: Array2<F>) -> Array2<F> {
        if x.is_empty() {
            return x;
        }
        let mut x = x;
        Zip::from(x.columns_mut())
            .and(&self.means)
            .and(&self.std_devs)
            .for_each(|mut col, &mean, &std| {
                col.mapv_inplace(|el| (el - mean) / std);
            });
        x
    }
}
