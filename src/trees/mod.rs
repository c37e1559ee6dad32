/// ID3 decision tree classifier
pub mod classifier;
/// Decision tree nodes
pub mod node;
