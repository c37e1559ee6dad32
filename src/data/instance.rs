use crate::error::ClassifierError;
use crate::utils::collections::copy_skipping_index;

/// A single example: an ordered list of feature values plus an optional label.
///
/// Unlabeled instances are classification inputs; labeled ones are used for training.
/// Instances are never mutated, `without_feature` derives a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance<F> {
    features: Vec<F>,
    label: Option<String>,
}

impl<F> Instance<F> {
    /// Creates an instance to be classified.
    pub fn unlabeled(features: Vec<F>) -> Self {
        Self {
            features,
            label: None,
        }
    }

    /// Creates a training instance.
    pub fn labeled(features: Vec<F>, label: impl Into<String>) -> Self {
        Self {
            features,
            label: Some(label.into()),
        }
    }

    pub fn features(&self) -> &[F] {
        &self.features
    }

    pub fn feature(&self, index: usize) -> Option<&F> {
        self.features.get(index)
    }

    /// Returns the label, if this instance has one.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_labeled(&self) -> bool {
        self.label.as_deref().is_some_and(|label| !label.is_empty())
    }

    pub fn nfeatures(&self) -> usize {
        self.features.len()
    }
}

impl<F: Clone> Instance<F> {
    /// Returns a copy of this instance with the feature at `index` removed.
    pub fn without_feature(&self, index: usize) -> Self {
        Self {
            features: copy_skipping_index(&self.features, index),
            label: self.label.clone(),
        }
    }
}

/// Checks that every instance is labeled and carries exactly `expected` features.
pub(crate) fn validate_labeled<F>(
    instances: &[Instance<F>],
    expected: usize,
) -> Result<(), ClassifierError> {
    for (index, instance) in instances.iter().enumerate() {
        if instance.nfeatures() != expected {
            return Err(ClassifierError::FeatureCountMismatch {
                index,
                expected,
                actual: instance.nfeatures(),
            });
        }
        if !instance.is_labeled() {
            return Err(ClassifierError::MissingLabel { index });
        }
    }
    Ok(())
}
