/// Confusion-matrix based classification metrics
pub mod confusion;
