/// Order-preserving counting, sorting and copying helpers
pub mod collections;
/// Logarithms of arbitrary base
pub mod math;
