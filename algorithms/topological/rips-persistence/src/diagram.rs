//! Persistence diagrams: multisets of (birth, death) intervals.

use phc_helpers::Float;

use crate::PersistenceError;

/// A single topological feature, alive on `[birth, death)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct PersistencePair<F> {
    pub birth: F,
    pub death: F,
}

impl<F: Float> PersistencePair<F> {
    pub fn new(birth: F, death: F) -> Self {
        Self { birth, death }
    }

    /// A feature that never dies within the filtration.
    pub fn essential(birth: F) -> Self {
        Self {
            birth,
            death: F::infinity(),
        }
    }

    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }
}

/// Degree-0 persistence diagram of one point cloud.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct PersistenceDiagram<F> {
    pairs: Vec<PersistencePair<F>>,
}

impl<F: Float> PersistenceDiagram<F> {
    pub fn new(pairs: Vec<PersistencePair<F>>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[PersistencePair<F>] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PersistencePair<F>> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of features with infinite death.
    pub fn essential_count(&self) -> usize {
        self.pairs.iter().filter(|p| p.is_essential()).count()
    }

    /// Replaces every infinite death with `max_scale`.
    ///
    /// An infinite death means the component never merged within the
    /// observed scale; clamping gives it a finite value that can be summed
    /// and compared across diagrams.
    pub fn clamp_infinite(mut self, max_scale: F) -> Self {
        for pair in self.pairs.iter_mut().filter(|p| p.is_essential()) {
            pair.death = max_scale;
        }
        self
    }

    /// Sum of all death values.
    pub fn death_sum(&self) -> F {
        self.pairs.iter().map(|p| p.death).sum()
    }

    /// Checks that every pair is a well-formed interval.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Malformed` for the first pair with a NaN
    /// value, an infinite birth, or `birth > death`.
    pub fn validate(&self) -> Result<(), PersistenceError> {
        for (index, pair) in self.pairs.iter().enumerate() {
            let bad = pair.birth.is_nan()
                || pair.death.is_nan()
                || pair.birth.is_infinite()
                || pair.birth > pair.death;
            if bad {
                return Err(PersistenceError::Malformed {
                    index,
                    birth: pair.birth.to_f64().unwrap_or(f64::NAN),
                    death: pair.death.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }
}

impl<F: Float> FromIterator<PersistencePair<F>> for PersistenceDiagram<F> {
    fn from_iter<I: IntoIterator<Item = PersistencePair<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, F: Float> IntoIterator for &'a PersistenceDiagram<F> {
    type Item = &'a PersistencePair<F>;
    type IntoIter = std::slice::Iter<'a, PersistencePair<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
