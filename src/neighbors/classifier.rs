//! K-Nearest-Neighbors Classifier
use crate::{
    data::{
        dataset::RealNumber,
        instance::{validate_labeled, Instance},
    },
    error::ClassifierError,
    metrics::confusion::ClassificationMetrics,
    utils::collections::{frequencies, sort_by_value_ascending, sort_by_value_descending},
};
use log::debug;
use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;

const MIN_TRAINING_RECORDS: usize = 2;

/// K-nearest-neighbors classifier over numeric feature vectors.
///
/// The training set is stored verbatim: row `i` of the feature matrix belongs
/// to label `i`. Features are not scaled. Every neighbor gets one vote.
///
/// # Examples
///
/// ```
/// use rusty_classifiers::data::instance::Instance;
/// use rusty_classifiers::neighbors::classifier::KNeighborsClassifier;
///
/// let model = KNeighborsClassifier::new(&[
///     Instance::labeled(vec![1.0, 1.1], "A"),
///     Instance::labeled(vec![1.0, 1.0], "A"),
///     Instance::labeled(vec![0.0, 0.0], "B"),
///     Instance::labeled(vec![0.0, 0.1], "B"),
/// ])
/// .unwrap();
///
/// let label = model.classify(&Instance::unlabeled(vec![0.0, 0.0]), 3).unwrap();
/// assert_eq!(label, "B");
/// ```
#[derive(Clone, Debug)]
pub struct KNeighborsClassifier<T: RealNumber> {
    x: DMatrix<T>,
    y: Vec<String>,
}

impl<T: RealNumber> ClassificationMetrics for KNeighborsClassifier<T> {}

impl<T: RealNumber> KNeighborsClassifier<T> {
    /// Stores a labeled training set.
    ///
    /// # Errors
    ///
    /// Fails with fewer than 2 instances, instances without features, instances
    /// whose widths differ, or unlabeled instances.
    pub fn new(instances: &[Instance<T>]) -> Result<Self, ClassifierError> {
        if instances.len() < MIN_TRAINING_RECORDS {
            return Err(ClassifierError::TooFewInstances {
                required: MIN_TRAINING_RECORDS,
                actual: instances.len(),
            });
        }
        let ncols = instances[0].nfeatures();
        if ncols == 0 {
            return Err(ClassifierError::NoFeatures);
        }
        validate_labeled(instances, ncols)?;

        let values = instances
            .iter()
            .flat_map(|instance| instance.features().iter().copied())
            .collect::<Vec<_>>();
        let x = DMatrix::from_row_slice(instances.len(), ncols, &values);
        let y = instances
            .iter()
            .filter_map(Instance::label)
            .map(str::to_string)
            .collect::<Vec<_>>();

        debug!(
            "Stored {} training records with {} features for nearest-neighbor search",
            x.nrows(),
            x.ncols()
        );
        Ok(Self { x, y })
    }

    /// Number of stored training records.
    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.x.ncols()
    }

    pub fn labels(&self) -> &[String] {
        &self.y
    }

    /// Euclidean distance from `query` to every stored record, in row order.
    ///
    /// # Errors
    ///
    /// Fails when the query width differs from the training width.
    pub fn distances(&self, query: &Instance<T>) -> Result<DVector<T>, ClassifierError> {
        self.check_query(query)?;
        let features = query.features();

        let square_diffs = DMatrix::from_fn(self.x.nrows(), self.x.ncols(), |r, c| {
            let diff = self.x[(r, c)] - features[c];
            diff * diff
        });

        Ok(DVector::from_iterator(
            square_diffs.nrows(),
            square_diffs.row_iter().map(|row| row.sum().sqrt()),
        ))
    }

    /// Classifies `query` by majority vote among its `k` nearest records.
    ///
    /// Records at equal distance keep their training order, and labels with
    /// equal votes are ranked by their first appearance among the neighbors.
    ///
    /// # Errors
    ///
    /// Fails when the query width differs from the training width or `k` is
    /// outside `1..=nrows`.
    pub fn classify(&self, query: &Instance<T>, k: usize) -> Result<String, ClassifierError> {
        if k < 1 || k > self.nrows() {
            return Err(ClassifierError::InvalidK {
                k,
                max: self.nrows(),
            });
        }
        let distances = self.distances(query)?;

        let neighbors = self.nearest_labels(&distances, k);
        let votes = sort_by_value_descending(frequencies(&neighbors));

        Ok(votes
            .into_iter()
            .next()
            .map(|(label, _)| label.to_string())
            .unwrap_or_default())
    }

    /// Classifies many queries in parallel with the same `k`.
    pub fn classify_all(
        &self,
        queries: &[Instance<T>],
        k: usize,
    ) -> Result<Vec<String>, ClassifierError> {
        queries
            .par_iter()
            .map(|query| self.classify(query, k))
            .collect()
    }

    fn nearest_labels(&self, distances: &DVector<T>, k: usize) -> Vec<&str> {
        let labeled_distances = self
            .y
            .iter()
            .map(String::as_str)
            .zip(distances.iter().copied())
            .collect::<Vec<_>>();

        sort_by_value_ascending(labeled_distances)
            .into_iter()
            .take(k)
            .map(|(label, _)| label)
            .collect()
    }

    fn check_query(&self, query: &Instance<T>) -> Result<(), ClassifierError> {
        if query.nfeatures() != self.nfeatures() {
            return Err(ClassifierError::QueryDimensionMismatch {
                expected: self.nfeatures(),
                actual: query.nfeatures(),
            });
        }
        Ok(())
    }
}
