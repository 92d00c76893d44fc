use std::fmt::Debug;
use std::hash::Hash;

use ndarray::{Array2, ArrayView2};
use phc_helpers::Float;
use rips_persistence::{PersistenceDiagram, RipsH0};

use crate::InputError;

/// A fitted persistent homology classifier.
///
/// Holds, in one fixed label order, each class's clamped persistence
/// diagram together with the point cloud it was computed from, and the
/// filtration that produced the diagrams. Prediction reruns that same
/// filtration on the perturbed clouds, so the model is all a caller has to
/// keep between calls. It is never modified after fitting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(
        crate = "serde_crate",
        try_from = "ModelParts<L, F, R>",
        bound(deserialize = "L: Clone + Eq + Hash + Debug + Ord + serde_crate::Deserialize<'de>, \
                             F: Float + serde_crate::Deserialize<'de>, \
                             R: serde_crate::Deserialize<'de>")
    )
)]
pub struct PhcModel<L, F, R = RipsH0> {
    classes: Vec<L>,
    diagrams: Vec<PersistenceDiagram<F>>,
    clouds: Vec<Array2<F>>,
    max_scale: F,
    dimension: usize,
    filtration: R,
}

/// Unchecked components of a [`PhcModel`].
///
/// Converting with `PhcModel::try_from` checks that the parts describe a
/// model `fit` could have produced; stored models are read back this way.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct ModelParts<L, F, R = RipsH0> {
    pub classes: Vec<L>,
    pub diagrams: Vec<PersistenceDiagram<F>>,
    pub clouds: Vec<Array2<F>>,
    pub max_scale: F,
    pub dimension: usize,
    pub filtration: R,
}

impl<L, F, R> TryFrom<ModelParts<L, F, R>> for PhcModel<L, F, R>
where
    L: Clone + Eq + Hash + Debug + Ord,
    F: Float,
{
    type Error = InputError;

    fn try_from(parts: ModelParts<L, F, R>) -> Result<Self, InputError> {
        let n = parts.classes.len();
        if parts.diagrams.len() != n || parts.clouds.len() != n {
            return Err(InputError::MalformedModel(format!(
                "{} classes, {} diagrams, {} clouds",
                n,
                parts.diagrams.len(),
                parts.clouds.len()
            )));
        }
        if !parts.classes.windows(2).all(|w| w[0] < w[1]) {
            return Err(InputError::MalformedModel(
                "class labels are not strictly ascending".into(),
            ));
        }
        if !(parts.max_scale > F::zero() && parts.max_scale.is_finite()) {
            return Err(InputError::InvalidScale(
                parts.max_scale.to_f64().unwrap_or(f64::NAN),
            ));
        }

        for ((label, diagram), cloud) in parts
            .classes
            .iter()
            .zip(parts.diagrams.iter())
            .zip(parts.clouds.iter())
        {
            if cloud.nrows() == 0 {
                return Err(InputError::EmptyClass(format!("{label:?}")));
            }
            if cloud.ncols() != parts.dimension {
                return Err(InputError::MalformedModel(format!(
                    "class {label:?} has {} features, expected {}",
                    cloud.ncols(),
                    parts.dimension
                )));
            }
            let out_of_range = diagram
                .iter()
                .any(|p| !p.death.is_finite() || p.death > parts.max_scale);
            if diagram.validate().is_err() || out_of_range {
                return Err(InputError::MalformedModel(format!(
                    "class {label:?} has an invalid diagram"
                )));
            }
        }

        Ok(Self {
            classes: parts.classes,
            diagrams: parts.diagrams,
            clouds: parts.clouds,
            max_scale: parts.max_scale,
            dimension: parts.dimension,
            filtration: parts.filtration,
        })
    }
}

impl<L, F, R> PhcModel<L, F, R>
where
    L: Clone + Eq + Hash + Debug + Ord,
    F: Float,
{
    /// Class labels in ascending order.
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /// Diagrams, positionally matching [`classes`](Self::classes).
    pub fn diagrams(&self) -> &[PersistenceDiagram<F>] {
        &self.diagrams
    }

    pub fn diagram(&self, label: &L) -> Option<&PersistenceDiagram<F>> {
        self.position(label).map(|i| &self.diagrams[i])
    }

    /// Training points of one class.
    pub fn class_cloud(&self, label: &L) -> Option<ArrayView2<'_, F>> {
        self.position(label).map(|i| self.clouds[i].view())
    }

    pub(crate) fn cloud_at(&self, index: usize) -> ArrayView2<'_, F> {
        self.clouds[index].view()
    }

    /// Threshold the diagrams were computed with.
    pub fn max_scale(&self) -> F {
        self.max_scale
    }

    /// Filtration the diagrams were computed with.
    pub fn filtration(&self) -> &R {
        &self.filtration
    }

    /// Number of features per training point.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&L, &PersistenceDiagram<F>)> {
        self.classes.iter().zip(self.diagrams.iter())
    }

    fn position(&self, label: &L) -> Option<usize> {
        self.classes.iter().position(|l| l == label)
    }
}
