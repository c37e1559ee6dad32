/// K-nearest-neighbors classifier
pub mod classifier;
