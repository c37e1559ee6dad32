//! Decision Tree Classifier
use super::node::DecisionNode;
use crate::{
    data::{
        dataset::{CategoricalValue, Dataset},
        instance::Instance,
    },
    error::ClassifierError,
    metrics::confusion::ClassificationMetrics,
    utils::{
        collections::{frequencies, most_frequent},
        math::log2,
    },
};
use log::{debug, info};
use rayon::prelude::*;
use std::hash::Hash;

/// Shannon entropy (base 2) of the label distribution in `labels`.
///
/// An empty slice has zero entropy, and zero-probability terms contribute zero.
pub fn entropy<L: Eq + Hash + Clone>(labels: &[L]) -> f64 {
    let total = labels.len() as f64;
    frequencies(labels)
        .into_iter()
        .map(|(_, count)| count as f64 / total)
        .filter(|&prob| prob > 0.0)
        .fold(0.0, |entropy, prob| entropy - prob * log2(prob))
}

/// ID3 decision tree classifier over discrete feature values.
///
/// # Examples
///
/// ```
/// use rusty_classifiers::data::dataset::Dataset;
/// use rusty_classifiers::data::instance::Instance;
/// use rusty_classifiers::trees::classifier::DecisionTreeClassifier;
///
/// let dataset = Dataset::new(
///     vec!["outlook".to_string(), "windy".to_string()],
///     vec![
///         Instance::labeled(vec!["sunny", "no"], "play"),
///         Instance::labeled(vec!["rainy", "yes"], "stay"),
///         Instance::labeled(vec!["rainy", "no"], "play"),
///     ],
/// );
///
/// let mut tree = DecisionTreeClassifier::new();
/// tree.fit(&dataset).unwrap();
///
/// let prediction = tree.predict(&Instance::unlabeled(vec!["rainy", "yes"])).unwrap();
/// assert_eq!(prediction.as_deref(), Some("stay"));
/// ```
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier<T: CategoricalValue> {
    root: Option<DecisionNode<T>>,
    attributes: Vec<String>,
}

impl<T: CategoricalValue> Default for DecisionTreeClassifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CategoricalValue> ClassificationMetrics for DecisionTreeClassifier<T> {}

impl<T: CategoricalValue> DecisionTreeClassifier<T> {
    /// Creates an unfitted classifier.
    pub fn new() -> Self {
        Self {
            root: None,
            attributes: Vec::new(),
        }
    }

    /// Returns the root of the fitted tree.
    pub fn root(&self) -> Option<&DecisionNode<T>> {
        self.root.as_ref()
    }

    /// Returns the attribute names the tree was fitted with.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Builds the decision tree from a dataset and keeps it for prediction.
    ///
    /// # Errors
    ///
    /// Fails when the dataset breaks the training contract, see [`Dataset::validate`].
    pub fn fit(&mut self, dataset: &Dataset<T>) -> Result<String, ClassifierError> {
        info!(
            "Fitting decision tree on {} instances with {} attributes",
            dataset.nrows(),
            dataset.nfeatures()
        );

        let root = Self::build(dataset)?;
        info!("Built decision tree: {}", root);

        self.root = Some(root);
        self.attributes = dataset.attributes().to_vec();
        Ok("Finished building the tree.".into())
    }

    /// Builds a decision tree from a dataset without keeping it.
    ///
    /// The root is always a branch. Building twice from the same dataset gives equal trees.
    pub fn build(dataset: &Dataset<T>) -> Result<DecisionNode<T>, ClassifierError> {
        dataset.validate()?;
        Ok(Self::build_tree(dataset))
    }

    /// Predicts the label of one instance.
    ///
    /// `Ok(None)` means the instance carries a value the tree never saw at the
    /// level where the walk stopped.
    ///
    /// # Errors
    ///
    /// Fails if the tree wasn't built yet or the instance width doesn't match the
    /// attributes the tree was fitted with.
    pub fn predict(&self, instance: &Instance<T>) -> Result<Option<String>, ClassifierError> {
        let root = self.root.as_ref().ok_or(ClassifierError::NotFitted)?;
        if instance.nfeatures() != self.attributes.len() {
            return Err(ClassifierError::QueryDimensionMismatch {
                expected: self.attributes.len(),
                actual: instance.nfeatures(),
            });
        }
        Ok(root.classify(instance, &self.attributes).map(str::to_string))
    }

    /// Predicts the labels of many instances in parallel.
    pub fn predict_all(
        &self,
        instances: &[Instance<T>],
    ) -> Result<Vec<Option<String>>, ClassifierError> {
        instances
            .par_iter()
            .map(|instance| self.predict(instance))
            .collect()
    }

    /// Weighted entropy of the labels after partitioning on the feature at `index`.
    pub fn expected_messiness(dataset: &Dataset<T>, index: usize) -> f64 {
        let total = dataset.nrows() as f64;
        dataset
            .distinct_values(index)
            .iter()
            .map(|value| {
                let labels = dataset
                    .instances()
                    .iter()
                    .filter(|instance| instance.feature(index) == Some(value))
                    .filter_map(Instance::label)
                    .collect::<Vec<_>>();
                labels.len() as f64 / total * entropy(&labels)
            })
            .fold(0.0, |messiness, weighted| messiness + weighted)
    }

    /// Returns the index of the feature with the smallest expected messiness and that messiness.
    ///
    /// Only a strictly smaller messiness replaces the current best, so ties go
    /// to the lowest index.
    pub fn choose_feature(dataset: &Dataset<T>) -> (usize, f64) {
        let mut best_index = 0;
        let mut min_messiness = f64::MAX;

        for index in 0..dataset.nfeatures() {
            let messiness = Self::expected_messiness(dataset, index);
            if messiness < min_messiness {
                min_messiness = messiness;
                best_index = index;
            }
        }
        (best_index, min_messiness)
    }

    fn build_tree(dataset: &Dataset<T>) -> DecisionNode<T> {
        let (attributes, instances) = dataset.into_parts();
        let (index, messiness) = Self::choose_feature(dataset);
        debug!(
            "Splitting {} instances on '{}' (messiness {:.4}, {} attributes left)",
            instances.len(),
            attributes[index],
            messiness,
            attributes.len()
        );

        let children = dataset
            .distinct_values(index)
            .into_iter()
            .map(|value| {
                let group = dataset.partition(index, &value);
                let child = Self::resolve_partition(&group, index);
                (value, child)
            })
            .collect();

        DecisionNode::Branch {
            attribute: attributes[index].clone(),
            children,
        }
    }

    fn resolve_partition(group: &Dataset<T>, index: usize) -> DecisionNode<T> {
        let labels = group.labels();

        match frequencies(&labels).as_slice() {
            [(label, _)] => DecisionNode::Terminal(label.to_string()),
            _ if group.nfeatures() <= 1 => {
                DecisionNode::Terminal(most_frequent(&labels).unwrap_or_default().to_string())
            }
            _ => Self::build_tree(&group.without_attribute(index)),
        }
    }
}
