use thiserror::Error;

/// Errors raised by the classifiers when their inputs break the training or
/// classification contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    #[error("At least one instance is required.")]
    EmptyInstances,
    #[error("At least one attribute name is required.")]
    EmptyAttributes,
    #[error("At least 1 feature is required.")]
    NoFeatures,
    #[error("At least {required} training records are required, got {actual}.")]
    TooFewInstances { required: usize, actual: usize },
    #[error("Instance {index} has {actual} features, expected {expected}.")]
    FeatureCountMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Instance {index} has no label.")]
    MissingLabel { index: usize },
    #[error("The number of neighbors must be between 1 and {max}, got {k}.")]
    InvalidK { k: usize, max: usize },
    #[error("Query has {actual} features but the model was trained on {expected}.")]
    QueryDimensionMismatch { expected: usize, actual: usize },
    #[error("Tree wasn't built yet.")]
    NotFitted,
    #[error("Predictions and labels are of different sizes ({expected} vs {actual}).")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Train size should be between 0.0 and 1.0, got {0}.")]
    InvalidTrainSize(f64),
}
