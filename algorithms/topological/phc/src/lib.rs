//! Persistent homology classification.
//!
//! Each class of a labeled training set is summarised by the degree-0
//! persistence diagram of its point cloud under a Vietoris-Rips filtration
//! truncated at `max_scale`. A new point is assigned to the class whose
//! diagram changes the least when the point is added to that class.
//!
//! Reference: De Lara, M. L. D., "Persistent homology classification
//! algorithm", PeerJ Computer Science 9 (2023): e1195.
//!
//! ```
//! use ndarray::array;
//! use phc::{PhcConfig, PersistentHomologyClassifier};
//! use phc_helpers::LabeledDataset;
//!
//! let data = LabeledDataset::new(
//!     array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [10.0, 10.0], [11.0, 10.0], [10.0, 11.0]],
//!     vec![1, 1, 1, 2, 2, 2],
//! )
//! .unwrap();
//!
//! let phc = PersistentHomologyClassifier::new(PhcConfig::new(5.0));
//! let model = phc.fit(&data).unwrap();
//! assert_eq!(phc.predict(&model, array![0.5, 0.5].view()).unwrap(), 1);
//! ```

mod classifier;
mod model;

pub use classifier::{ClassScores, PersistentHomologyClassifier};
pub use model::{ModelParts, PhcModel};

use std::fmt::Debug;
use std::hash::Hash;

use ndarray::ArrayView1;
use phc_helpers::{DatasetError, Float, LabeledDataset};
use rips_persistence::{Filtration, PersistenceError};
use thiserror::Error;

/// Caller-side precondition violations. Always detected before any
/// filtration runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("training data is empty")]
    EmptyDataSet,
    #[error("class {0} has no points")]
    EmptyClass(String),
    #[error("model has no classes")]
    EmptyModel,
    #[error("malformed model: {0}")]
    MalformedModel(String),
    #[error("max scale must be positive and finite, got {0}")]
    InvalidScale(f64),
    #[error("expected {expected} features, got {found}")]
    MismatchedDimensions { expected: usize, found: usize },
    #[error("training point {row} has a non-finite feature")]
    NonFiniteFeature { row: usize },
    #[error("query has a non-finite feature")]
    NonFiniteQuery,
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Errors returned by fitting and prediction.
///
/// Neither kind is retried or recovered from: a failure on one class aborts
/// the whole call, since a partial model or a partial score vector would
/// bias the decision.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhcError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("persistence computation failed for class {class}: {source}")]
    Computation {
        class: String,
        #[source]
        source: PersistenceError,
    },
}

impl PhcError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PhcError::InvalidInput(_))
    }

    pub fn is_computation(&self) -> bool {
        matches!(self, PhcError::Computation { .. })
    }
}

impl From<DatasetError> for PhcError {
    fn from(e: DatasetError) -> Self {
        PhcError::InvalidInput(InputError::Dataset(e))
    }
}

/// Which class wins when several share the minimal score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub enum TieBreak {
    /// The later class in label order wins.
    #[default]
    LastWins,
    /// The earlier class in label order wins.
    FirstWins,
}

/// Classifier settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct PhcConfig<F> {
    /// Filtration threshold, also the value infinite deaths are clamped to.
    pub max_scale: F,
    pub tie_break: TieBreak,
}

impl<F: Float> PhcConfig<F> {
    pub fn new(max_scale: F) -> Self {
        Self {
            max_scale,
            tie_break: TieBreak::default(),
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// # Errors
    ///
    /// Returns `InputError::InvalidScale` unless `max_scale` is positive
    /// and finite.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.max_scale > F::zero() && self.max_scale.is_finite() {
            Ok(())
        } else {
            Err(InputError::InvalidScale(
                self.max_scale.to_f64().unwrap_or(f64::NAN),
            ))
        }
    }
}

/// Fits a model with the Euclidean Rips filtration truncated at `max_scale`.
pub fn fit<L, F>(dataset: &LabeledDataset<L, F>, max_scale: F) -> Result<PhcModel<L, F>, PhcError>
where
    L: Clone + Eq + Hash + Debug + Ord + Send + Sync,
    F: Float,
{
    PersistentHomologyClassifier::new(PhcConfig::new(max_scale)).fit(dataset)
}

/// Classifies `query` against a fitted model.
///
/// Uses the model's own filtration and `max_scale`, and the default
/// [`TieBreak::LastWins`].
pub fn predict<L, F, R>(model: &PhcModel<L, F, R>, query: ArrayView1<F>) -> Result<L, PhcError>
where
    L: Clone + Eq + Hash + Debug + Ord + Send + Sync,
    F: Float,
    R: Filtration<F>,
{
    PersistentHomologyClassifier::new(PhcConfig::new(model.max_scale())).predict(model, query)
}
