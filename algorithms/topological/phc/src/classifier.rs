use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, info, trace, warn};
use ndarray::{Array2, ArrayView1, ArrayView2};
use phc_helpers::{Float, LabeledDataset};
use rayon::prelude::*;
use rips_persistence::{Filtration, PersistenceDiagram, PersistenceError, RipsH0};

use crate::{InputError, ModelParts, PhcConfig, PhcError, PhcModel, TieBreak};

/// Per-class perturbation scores for one query, in the model's label order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassScores<L, F> {
    entries: Vec<(L, F)>,
}

impl<L, F> ClassScores<L, F>
where
    L: Clone + Eq + Debug,
    F: Float,
{
    pub fn new(entries: Vec<(L, F)>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (L, F)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn score(&self, label: &L) -> Option<F> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, s)| *s)
    }

    /// Position of the minimal score.
    ///
    /// Scores are compared for exact equality with the minimum; among equal
    /// minima `tie_break` picks the first or the last in label order.
    pub fn best_index(&self, tie_break: TieBreak) -> Option<usize> {
        let min = self
            .entries
            .iter()
            .map(|(_, s)| *s)
            .fold(None, |acc: Option<F>, s| match acc {
                Some(m) if !(s < m) => Some(m),
                _ => Some(s),
            })?;
        let is_min = |(_, s): &(L, F)| *s == min;
        match tie_break {
            TieBreak::LastWins => self.entries.iter().rposition(is_min),
            TieBreak::FirstWins => self.entries.iter().position(is_min),
        }
    }

    /// Label with the minimal score.
    pub fn best(&self, tie_break: TieBreak) -> Option<&L> {
        self.best_index(tie_break).map(|i| &self.entries[i].0)
    }
}

/// Classifies points by how little they disturb each class's topology.
///
/// Fitting computes, for every class, the degree-0 persistence diagram of
/// its points (infinite deaths clamped to `max_scale`). Predicting appends
/// the query to each class in turn, recomputes that diagram, and scores the
/// class by the absolute change in the sum of death values. The class with
/// the smallest score wins.
///
/// Prediction runs one full filtration per class per query, which dominates
/// the cost of the whole classifier; batch prediction over many classes is
/// correspondingly expensive. Per-class work is spread over the rayon pool.
///
/// # Type Parameters
///
/// * `F`: The float type for the features (e.g., `f32`, `f64`).
/// * `R`: The filtration routine, [`RipsH0`] (Euclidean) by default.
#[derive(Debug, Clone)]
pub struct PersistentHomologyClassifier<F, R = RipsH0> {
    config: PhcConfig<F>,
    filtration: R,
}

impl<F: Float> PersistentHomologyClassifier<F, RipsH0> {
    /// Creates a classifier using the Euclidean Rips filtration.
    pub fn new(config: PhcConfig<F>) -> Self {
        Self {
            config,
            filtration: RipsH0::new(),
        }
    }
}

impl<F, R> PersistentHomologyClassifier<F, R>
where
    F: Float,
    R: Filtration<F>,
{
    /// Creates a classifier with a custom filtration routine.
    ///
    /// The routine is used by [`fit`](Self::fit) and stored in the model;
    /// prediction always reruns the model's copy, so training and perturbed
    /// diagrams come from the same configuration.
    pub fn with_filtration(config: PhcConfig<F>, filtration: R) -> Self {
        Self { config, filtration }
    }

    pub fn config(&self) -> &PhcConfig<F> {
        &self.config
    }

    /// Builds one clamped persistence diagram per class.
    ///
    /// Classes are ordered by ascending label. The dataset is only read.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::InvalidInput` when `max_scale` is not positive and
    /// finite, the dataset is empty, a feature is not finite, or a declared
    /// class has no points. Returns `PhcError::Computation` when the
    /// filtration fails for any class.
    pub fn fit<L>(&self, dataset: &LabeledDataset<L, F>) -> Result<PhcModel<L, F, R>, PhcError>
    where
        L: Clone + Eq + Hash + Debug + Ord + Send + Sync,
        R: Clone,
    {
        self.config.validate()?;
        if dataset.is_empty() {
            return Err(InputError::EmptyDataSet.into());
        }
        if let Some(row) = first_non_finite_row(dataset.features()) {
            return Err(InputError::NonFiniteFeature { row }.into());
        }

        let partition = dataset.partition();
        if let Some((label, _)) = partition.iter().find(|(_, cloud)| cloud.nrows() == 0) {
            return Err(InputError::EmptyClass(format!("{label:?}")).into());
        }

        let max_scale = self.config.max_scale;
        let diagrams = partition
            .par_iter()
            .map(|(label, cloud)| class_diagram(&self.filtration, label, cloud.view(), max_scale))
            .collect::<Result<Vec<_>, _>>()?;

        let (classes, clouds): (Vec<L>, Vec<Array2<F>>) = partition.into_iter().unzip();
        info!(
            "fitted {} classes on {} points (dimension {}, max scale {})",
            classes.len(),
            dataset.len(),
            dataset.dimension(),
            max_scale
        );
        let model = PhcModel::try_from(ModelParts {
            classes,
            diagrams,
            clouds,
            max_scale,
            dimension: dataset.dimension(),
            filtration: self.filtration.clone(),
        })?;
        Ok(model)
    }

    /// Scores every class of `model` against `query`.
    ///
    /// The score of a class is `|Σ deaths(training) - Σ deaths(training + query)|`.
    /// The perturbed diagrams are computed with the model's filtration and
    /// `max_scale`, whatever this classifier was configured with, so both
    /// sides of the difference come from the same routine.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::InvalidInput` if the model is empty or the query
    /// has the wrong dimension or a non-finite coordinate, and
    /// `PhcError::Computation` if any perturbed filtration fails.
    pub fn scores<L, M>(
        &self,
        model: &PhcModel<L, F, M>,
        query: ArrayView1<F>,
    ) -> Result<ClassScores<L, F>, PhcError>
    where
        L: Clone + Eq + Hash + Debug + Ord + Send + Sync,
        M: Filtration<F>,
    {
        validate_query(model, query)?;
        if self.config.max_scale != model.max_scale() {
            warn!(
                "classifier max scale {} differs from the model's {}; using the model's",
                self.config.max_scale,
                model.max_scale()
            );
        }

        let max_scale = model.max_scale();
        let entries = (0..model.n_classes())
            .into_par_iter()
            .map(|j| -> Result<(L, F), PhcError> {
                let label = &model.classes()[j];
                let mut cloud = model.cloud_at(j).to_owned();
                cloud
                    .push_row(query.view())
                    .map_err(|_| InputError::MismatchedDimensions {
                        expected: model.dimension(),
                        found: query.len(),
                    })?;
                let perturbed =
                    class_diagram(model.filtration(), label, cloud.view(), max_scale)?;
                let score = (model.diagrams()[j].death_sum() - perturbed.death_sum()).abs();
                trace!("class {label:?}: score {score}");
                Ok((label.clone(), score))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ClassScores::new(entries))
    }

    /// Predicts the label of `query`: the class with the smallest score,
    /// ties resolved by the configured [`TieBreak`].
    ///
    /// # Errors
    ///
    /// Same as [`scores`](Self::scores).
    pub fn predict<L, M>(
        &self,
        model: &PhcModel<L, F, M>,
        query: ArrayView1<F>,
    ) -> Result<L, PhcError>
    where
        L: Clone + Eq + Hash + Debug + Ord + Send + Sync,
        M: Filtration<F>,
    {
        let scores = self.scores(model, query)?;
        scores
            .best(self.config.tie_break)
            .cloned()
            .ok_or_else(|| InputError::EmptyModel.into())
    }

    /// Predicts every row of `queries`, in order. The first failure aborts.
    pub fn predict_batch<L, M>(
        &self,
        model: &PhcModel<L, F, M>,
        queries: ArrayView2<F>,
    ) -> Result<Vec<L>, PhcError>
    where
        L: Clone + Eq + Hash + Debug + Ord + Send + Sync,
        M: Filtration<F>,
    {
        queries
            .rows()
            .into_iter()
            .map(|query| self.predict(model, query))
            .collect()
    }
}

/// Runs `filtration` on one class cloud and normalises the result.
fn class_diagram<L, F, R>(
    filtration: &R,
    label: &L,
    cloud: ArrayView2<F>,
    max_scale: F,
) -> Result<PersistenceDiagram<F>, PhcError>
where
    L: Debug,
    F: Float,
    R: Filtration<F>,
{
    let computation = |source: PersistenceError| PhcError::Computation {
        class: format!("{label:?}"),
        source,
    };

    let diagram = filtration
        .diagram(cloud, max_scale)
        .map_err(computation)?
        .clamp_infinite(max_scale);
    diagram.validate().map_err(computation)?;
    if let Some((index, pair)) = diagram
        .iter()
        .enumerate()
        .find(|(_, p)| p.death > max_scale)
    {
        return Err(computation(PersistenceError::Malformed {
            index,
            birth: pair.birth.to_f64().unwrap_or(f64::NAN),
            death: pair.death.to_f64().unwrap_or(f64::NAN),
        }));
    }

    debug!(
        "class {:?}: {} points, {} pairs, death sum {}",
        label,
        cloud.nrows(),
        diagram.len(),
        diagram.death_sum()
    );
    Ok(diagram)
}

fn first_non_finite_row<F: Float>(features: ArrayView2<F>) -> Option<usize> {
    features
        .rows()
        .into_iter()
        .position(|row| row.iter().any(|x| !x.is_finite()))
}

fn validate_query<L, F, M>(
    model: &PhcModel<L, F, M>,
    query: ArrayView1<F>,
) -> Result<(), InputError>
where
    L: Clone + Eq + Hash + Debug + Ord,
    F: Float,
{
    if model.n_classes() == 0 {
        return Err(InputError::EmptyModel);
    }
    if query.len() != model.dimension() {
        return Err(InputError::MismatchedDimensions {
            expected: model.dimension(),
            found: query.len(),
        });
    }
    if query.iter().any(|x| !x.is_finite()) {
        return Err(InputError::NonFiniteQuery);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array2, array};
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;
    use phc_helpers::LInfDist;
    use rips_persistence::PersistencePair;

    fn two_clusters() -> LabeledDataset<u32, f64> {
        LabeledDataset::new(
            array![
                [0.0, 0.0],
                [1.0, 0.0],
                [0.0, 1.0],
                [10.0, 10.0],
                [11.0, 10.0],
                [10.0, 11.0]
            ],
            vec![1, 1, 1, 2, 2, 2],
        )
        .unwrap()
    }

    fn phc(max_scale: f64) -> PersistentHomologyClassifier<f64> {
        PersistentHomologyClassifier::new(PhcConfig::new(max_scale))
    }

    #[test]
    fn test_fit_two_clusters() {
        let model = phc(5.0).fit(&two_clusters()).unwrap();

        assert_eq!(model.classes(), &[1, 2]);
        assert_eq!(model.dimension(), 2);
        assert_eq!(model.max_scale(), 5.0);
        for (_, diagram) in model.iter() {
            // two merges at length 1 plus the clamped essential component
            assert_eq!(diagram.len(), 3);
            assert_abs_diff_eq!(diagram.death_sum(), 7.0);
        }
        assert_eq!(
            model.class_cloud(&2).unwrap(),
            array![[10.0, 10.0], [11.0, 10.0], [10.0, 11.0]]
        );
    }

    #[test]
    fn test_predict_end_to_end() {
        let classifier = phc(5.0);
        let model = classifier.fit(&two_clusters()).unwrap();
        let query = array![0.5, 0.5];

        let scores = classifier.scores(&model, query.view()).unwrap();
        // the query joins class 1 through three edges of length sqrt(0.5)
        let expected = 3.0 * 0.5_f64.sqrt() - 2.0;
        assert_abs_diff_eq!(scores.score(&1).unwrap(), expected, epsilon = 1e-12);
        // class 2 gains an isolated component clamped to the max scale
        assert_abs_diff_eq!(scores.score(&2).unwrap(), 5.0, epsilon = 1e-12);

        assert_eq!(classifier.predict(&model, query.view()).unwrap(), 1);
        assert_eq!(
            classifier.predict(&model, array![10.4, 10.3].view()).unwrap(),
            2
        );
    }

    #[test]
    fn test_fit_clamps_infinite_deaths() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let features = Array2::from_shape_fn((60, 2), |_| rng.random_range(0.0..20.0));
        let labels = (0..60).map(|i| (i % 3) as u32 + 1).collect();
        let dataset = LabeledDataset::new(features, labels).unwrap();

        let model = phc(1.5).fit(&dataset).unwrap();
        assert_eq!(model.n_classes(), 3);
        for diagram in model.diagrams() {
            assert_eq!(diagram.essential_count(), 0);
            assert!(diagram.iter().all(|p| p.death.is_finite() && p.death <= 1.5));
        }
    }

    #[test]
    fn test_fit_is_deterministic() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        let features = Array2::from_shape_fn((45, 3), |_| rng.random_range(-1.0..1.0));
        let labels = (0..45).map(|i| if i < 20 { 4u32 } else { 9 }).collect();
        let dataset = LabeledDataset::new(features, labels).unwrap();

        let classifier = phc(0.8);
        let first = classifier.fit(&dataset).unwrap();
        let second = classifier.fit(&dataset).unwrap();
        assert_eq!(first, second);

        let query = array![0.1, -0.2, 0.3];
        assert_eq!(
            classifier.scores(&first, query.view()).unwrap(),
            classifier.scores(&second, query.view()).unwrap()
        );
    }

    #[test]
    fn test_query_equal_to_training_point() {
        let classifier = phc(5.0);
        let model = classifier.fit(&two_clusters()).unwrap();

        // a duplicate merges at length 0 and leaves the diagram unchanged
        let scores = classifier.scores(&model, array![1.0, 0.0].view()).unwrap();
        assert_eq!(scores.score(&1), Some(0.0));
        assert!(scores.score(&2).unwrap() > 0.0);
        assert_eq!(classifier.predict(&model, array![11.0, 10.0].view()).unwrap(), 2);
    }

    #[test]
    fn test_ties_resolve_to_last_class_by_default() {
        // mirror images around x = 5.5, so the query perturbs both equally
        let dataset = LabeledDataset::new(
            array![[0.0, 0.0], [1.0, 0.0], [10.0, 0.0], [11.0, 0.0]],
            vec![1u32, 1, 2, 2],
        )
        .unwrap();
        let classifier = phc(5.0);
        let model = classifier.fit(&dataset).unwrap();
        let query = array![5.5, 0.0];

        let scores = classifier.scores(&model, query.view()).unwrap();
        assert_eq!(scores.score(&1), scores.score(&2));
        assert_abs_diff_eq!(scores.score(&1).unwrap(), 4.5);

        for _ in 0..10 {
            assert_eq!(classifier.predict(&model, query.view()).unwrap(), 2);
        }

        let first_wins = PersistentHomologyClassifier::new(
            PhcConfig::new(5.0).with_tie_break(TieBreak::FirstWins),
        );
        assert_eq!(first_wins.predict(&model, query.view()).unwrap(), 1);
    }

    #[test]
    fn test_far_query_ties_every_class() {
        let classifier = phc(5.0);
        let model = classifier.fit(&two_clusters()).unwrap();
        let query = array![100.0, -100.0];

        let scores = classifier.scores(&model, query.view()).unwrap();
        assert!(scores.iter().all(|(_, s)| *s == 5.0));
        assert_eq!(scores.best_index(TieBreak::LastWins), Some(1));
        assert_eq!(scores.best_index(TieBreak::FirstWins), Some(0));
        assert_eq!(classifier.predict(&model, query.view()).unwrap(), 2);
    }

    #[test]
    fn test_predict_rejects_mismatched_dimension() {
        let classifier = phc(5.0);
        let model = classifier.fit(&two_clusters()).unwrap();

        let err = classifier
            .predict(&model, array![0.5, 0.5, 0.5].view())
            .unwrap_err();
        assert_eq!(
            err,
            PhcError::InvalidInput(InputError::MismatchedDimensions { expected: 2, found: 3 })
        );

        let err = classifier
            .predict(&model, array![f64::NAN, 0.5].view())
            .unwrap_err();
        assert_eq!(err, PhcError::InvalidInput(InputError::NonFiniteQuery));
    }

    #[test]
    fn test_fit_rejects_empty_class() {
        let dataset = two_clusters().with_classes([1, 2, 3]);
        let err = phc(5.0).fit(&dataset).unwrap_err();
        assert_eq!(err, PhcError::InvalidInput(InputError::EmptyClass("3".into())));
    }

    #[test]
    fn test_fit_rejects_bad_input() {
        let err = phc(0.0).fit(&two_clusters()).unwrap_err();
        assert_eq!(err, PhcError::InvalidInput(InputError::InvalidScale(0.0)));

        let err = phc(-2.0).fit(&two_clusters()).unwrap_err();
        assert!(err.is_invalid_input());

        let empty = LabeledDataset::<u32, f64>::new(Array2::zeros((0, 2)), vec![]).unwrap();
        assert_eq!(
            phc(1.0).fit(&empty).unwrap_err(),
            PhcError::InvalidInput(InputError::EmptyDataSet)
        );

        let nan = LabeledDataset::new(array![[0.0, 0.0], [f64::INFINITY, 1.0]], vec![1u32, 2])
            .unwrap();
        assert_eq!(
            phc(1.0).fit(&nan).unwrap_err(),
            PhcError::InvalidInput(InputError::NonFiniteFeature { row: 1 })
        );
    }

    #[test]
    fn test_single_point_classes() {
        let dataset =
            LabeledDataset::new(array![[0.0, 0.0], [4.0, 0.0]], vec![1u32, 2]).unwrap();
        let classifier = phc(3.0);
        let model = classifier.fit(&dataset).unwrap();
        assert_eq!(model.diagram(&1).unwrap().pairs(), &[PersistencePair::new(0.0, 3.0)]);

        // the query sits 1.0 from class 1 and 3.0 from class 2
        assert_eq!(classifier.predict(&model, array![1.0, 0.0].view()).unwrap(), 1);
    }

    #[test]
    fn test_predict_batch() {
        let classifier = phc(5.0);
        let model = classifier.fit(&two_clusters()).unwrap();
        let queries = array![[0.2, 0.3], [10.5, 10.5], [0.9, 0.1]];
        assert_eq!(
            classifier.predict_batch(&model, queries.view()).unwrap(),
            vec![1, 2, 1]
        );

        let wrong = array![[0.2, 0.3, 0.0]];
        assert!(classifier.predict_batch(&model, wrong.view()).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_string_labels() {
        let dataset = LabeledDataset::new(
            array![[0.0, 0.0], [0.5, 0.0], [8.0, 8.0], [8.5, 8.0]],
            vec!["setosa", "setosa", "virginica", "virginica"],
        )
        .unwrap();
        let classifier = phc(2.0);
        let model = classifier.fit(&dataset).unwrap();
        assert_eq!(model.classes(), &["setosa", "virginica"]);
        assert_eq!(
            classifier.predict(&model, array![8.2, 8.1].view()).unwrap(),
            "virginica"
        );
    }

    #[derive(Debug, Clone)]
    struct FailingFiltration;

    impl Filtration<f64> for FailingFiltration {
        fn diagram(
            &self,
            _cloud: ArrayView2<f64>,
            _threshold: f64,
        ) -> Result<PersistenceDiagram<f64>, PersistenceError> {
            Err(PersistenceError::EmptyCloud)
        }
    }

    /// Reports a feature dying after the threshold.
    #[derive(Debug, Clone)]
    struct OvershootingFiltration;

    impl Filtration<f64> for OvershootingFiltration {
        fn diagram(
            &self,
            _cloud: ArrayView2<f64>,
            threshold: f64,
        ) -> Result<PersistenceDiagram<f64>, PersistenceError> {
            Ok(PersistenceDiagram::new(vec![PersistencePair::new(
                0.0,
                threshold * 2.0,
            )]))
        }
    }

    #[test]
    fn test_filtration_failure_aborts_fit() {
        let classifier =
            PersistentHomologyClassifier::with_filtration(PhcConfig::new(5.0), FailingFiltration);
        let err = classifier.fit(&two_clusters()).unwrap_err();
        assert!(err.is_computation());
        assert!(matches!(
            err,
            PhcError::Computation { source: PersistenceError::EmptyCloud, .. }
        ));
    }

    /// Rips filtration that refuses clouds of more than three points far
    /// from the origin, so it passes on the training clusters and fails on
    /// class 2 once a query is added.
    #[derive(Debug, Clone)]
    struct CappedFiltration;

    impl Filtration<f64> for CappedFiltration {
        fn diagram(
            &self,
            cloud: ArrayView2<f64>,
            threshold: f64,
        ) -> Result<PersistenceDiagram<f64>, PersistenceError> {
            if cloud.nrows() > 3 && cloud[[0, 0]] >= 10.0 {
                return Err(PersistenceError::NonFiniteCoordinate(3));
            }
            RipsH0::new().diagram(cloud, threshold)
        }
    }

    #[test]
    fn test_filtration_failure_aborts_predict() {
        let classifier =
            PersistentHomologyClassifier::with_filtration(PhcConfig::new(5.0), CappedFiltration);
        let model = classifier.fit(&two_clusters()).unwrap();
        let query = array![0.5, 0.5];

        let err = classifier.scores(&model, query.view()).unwrap_err();
        assert!(err.is_computation());
        assert!(matches!(
            &err,
            PhcError::Computation {
                class,
                source: PersistenceError::NonFiniteCoordinate(3),
            } if class == "2"
        ));
        assert_eq!(classifier.predict(&model, query.view()).unwrap_err(), err);
        assert_eq!(crate::predict(&model, query.view()).unwrap_err(), err);
    }

    #[test]
    fn test_predict_uses_model_filtration() {
        // nearest point is class 1 under L-infinity and class 2 under L2
        let dataset =
            LabeledDataset::new(array![[3.0, 3.0], [0.0, 3.5]], vec![1, 2]).unwrap();
        let query = array![0.0, 0.0];

        let chebyshev = PersistentHomologyClassifier::with_filtration(
            PhcConfig::new(10.0),
            RipsH0::with_metric(LInfDist),
        );
        let model = chebyshev.fit(&dataset).unwrap();
        assert_eq!(model.filtration().metric(), &LInfDist);

        let scores = chebyshev.scores(&model, query.view()).unwrap();
        assert_abs_diff_eq!(scores.score(&1).unwrap(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(scores.score(&2).unwrap(), 3.5, epsilon = 1e-12);
        assert_eq!(chebyshev.predict(&model, query.view()).unwrap(), 1);

        // a default classifier and the free function follow the model
        assert_eq!(phc(10.0).predict(&model, query.view()).unwrap(), 1);
        assert_eq!(crate::predict(&model, query.view()).unwrap(), 1);

        let euclidean = phc(10.0).fit(&dataset).unwrap();
        assert_eq!(crate::predict(&euclidean, query.view()).unwrap(), 2);
    }

    #[test]
    fn test_overshooting_diagram_is_rejected() {
        let classifier = PersistentHomologyClassifier::with_filtration(
            PhcConfig::new(5.0),
            OvershootingFiltration,
        );
        let err = classifier.fit(&two_clusters()).unwrap_err();
        assert!(matches!(
            err,
            PhcError::Computation {
                source: PersistenceError::Malformed { index: 0, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_predict_uses_model_scale() {
        let model = phc(5.0).fit(&two_clusters()).unwrap();
        let other = phc(1.0);
        let scores = other.scores(&model, array![100.0, 100.0].view()).unwrap();
        assert!(scores.iter().all(|(_, s)| *s == 5.0));
    }

    #[test]
    fn test_class_scores_best() {
        let scores = ClassScores::new(vec![(1, 0.3), (2, 0.1), (3, 0.1), (4, 0.2)]);
        assert_eq!(scores.best(TieBreak::LastWins), Some(&3));
        assert_eq!(scores.best(TieBreak::FirstWins), Some(&2));

        let empty: ClassScores<u32, f64> = ClassScores::new(vec![]);
        assert_eq!(empty.best(TieBreak::LastWins), None);
    }
}
