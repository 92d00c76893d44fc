use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

use ndarray::{Array2, ArrayView2, Axis};
use thiserror::Error;

use crate::{DataPoint, Float};

/// Errors raised while assembling a [`LabeledDataset`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("dataset contains no points")]
    Empty,
    #[error("expected one label per point ({expected}), got {found}")]
    LabelCountMismatch { expected: usize, found: usize },
    #[error("point {index} has {found} features, expected {expected}")]
    MismatchedDimensions {
        index: usize,
        expected: usize,
        found: usize,
    },
}

/// A point cloud (one row per point) with a parallel sequence of class labels.
///
/// The dataset is only ever read by the classifiers: grouping by class
/// produces fresh per-class matrices and leaves the rows in caller order.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledDataset<L, F>
where
    L: Clone + Eq + Hash + Debug + Ord,
    F: Float,
{
    features: Array2<F>,
    labels: Vec<L>,
    declared: Vec<L>,
}

impl<L, F> LabeledDataset<L, F>
where
    L: Clone + Eq + Hash + Debug + Ord,
    F: Float,
{
    /// Builds a dataset from a feature matrix and one label per row.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::LabelCountMismatch` if `labels.len()` differs
    /// from the number of rows in `features`.
    pub fn new(features: Array2<F>, labels: Vec<L>) -> Result<Self, DatasetError> {
        if features.nrows() != labels.len() {
            return Err(DatasetError::LabelCountMismatch {
                expected: features.nrows(),
                found: labels.len(),
            });
        }
        Ok(Self {
            features,
            labels,
            declared: Vec::new(),
        })
    }

    /// Builds a dataset by stacking the features of `data` row by row.
    pub fn from_data_points(data: &[DataPoint<L, F>]) -> Result<Self, DatasetError> {
        let first = data.first().ok_or(DatasetError::Empty)?;
        let n_features = first.features.len();

        let mut features = Array2::zeros((data.len(), n_features));
        for (i, dp) in data.iter().enumerate() {
            if dp.features.len() != n_features {
                return Err(DatasetError::MismatchedDimensions {
                    index: i,
                    expected: n_features,
                    found: dp.features.len(),
                });
            }
            features.row_mut(i).assign(&dp.features);
        }
        let labels = data.iter().map(|dp| dp.label.clone()).collect();
        Self::new(features, labels)
    }

    /// Declares the classes the caller expects to be present.
    ///
    /// A declared class without any point shows up in [`classes`](Self::classes)
    /// with an empty cloud, which lets a fitter reject it explicitly instead of
    /// silently producing a model without that class.
    pub fn with_classes<I>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = L>,
    {
        self.declared = classes.into_iter().collect();
        self
    }

    pub fn features(&self) -> ArrayView2<'_, F> {
        self.features.view()
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of coordinates per point.
    pub fn dimension(&self) -> usize {
        self.features.ncols()
    }

    /// Row indices of each class, keyed (and therefore ordered) by label.
    pub fn class_indices(&self) -> BTreeMap<L, Vec<usize>> {
        let mut map: BTreeMap<L, Vec<usize>> = self
            .declared
            .iter()
            .map(|label| (label.clone(), Vec::new()))
            .collect();
        for (i, label) in self.labels.iter().enumerate() {
            map.entry(label.clone()).or_default().push(i);
        }
        map
    }

    /// Distinct labels in ascending order, declared classes included.
    pub fn classes(&self) -> Vec<L> {
        self.class_indices().into_keys().collect()
    }

    /// Copies the rows belonging to `label` into a new matrix.
    ///
    /// Unknown labels yield a `0 x dimension` matrix.
    pub fn class_cloud(&self, label: &L) -> Array2<F> {
        let indices: Vec<usize> = self
            .labels
            .iter()
            .enumerate()
            .filter(|(_, l)| *l == label)
            .map(|(i, _)| i)
            .collect();
        self.features.select(Axis(0), &indices)
    }

    /// Splits the dataset into one cloud per class, in label order.
    pub fn partition(&self) -> Vec<(L, Array2<F>)> {
        self.class_indices()
            .into_iter()
            .map(|(label, indices)| (label, self.features.select(Axis(0), &indices)))
            .collect()
    }
}
