//! # Rusty-classifiers
//!
//! `rusty-classifiers` provides two supervised classifiers over labeled instances:
//! an ID3 decision tree for discrete features and a k-nearest-neighbors
//! classifier for numeric feature vectors.
//! It also contains utilities for reading delimited training data and for
//! evaluating predictions.
//!
//! ## Getting Started
//!
//! To use `rusty-classifiers`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-classifiers = "*"
//! ```
//!
//! ## Example Usage
//!
//! As a quick example, here's how you can build a decision tree from a tab-delimited
//! dataset and classify a new instance with it:
//!
//! ```rust
//! use rusty_classifiers::data::instance::Instance;
//! use rusty_classifiers::data::reader::read_delimited;
//! use rusty_classifiers::trees::classifier::DecisionTreeClassifier;
//!
//! let text = "outlook\twindy\tclass\n\
//!             sunny\tno\tplay\n\
//!             rainy\tyes\tstay\n\
//!             rainy\tno\tplay\n";
//! let dataset = read_delimited::<String, _>(text.as_bytes(), b'\t').unwrap();
//!
//! let mut tree = DecisionTreeClassifier::new();
//! tree.fit(&dataset).unwrap();
//!
//! let query = Instance::unlabeled(vec!["rainy".to_string(), "yes".to_string()]);
//! assert_eq!(tree.predict(&query).unwrap().as_deref(), Some("stay"));
//! ```

/// Instances, datasets and data ingestion
pub mod data;
/// Error type shared by the classifiers
pub mod error;
/// Functions for evaluating model performance
pub mod metrics;
/// Nearest-neighbors classification
pub mod neighbors;
/// Decision trees
pub mod trees;
/// Numeric and collection helpers
pub mod utils;
