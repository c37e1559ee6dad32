/// Value traits and the attribute-aligned `Dataset`
pub mod dataset;
/// Labeled and unlabeled instances
pub mod instance;
/// Delimited text ingestion
pub mod reader;
