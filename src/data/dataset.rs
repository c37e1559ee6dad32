use crate::data::instance::{validate_labeled, Instance};
use crate::error::ClassifierError;
use crate::utils::collections::copy_skipping_index;
use num_traits::{Float, FromPrimitive, Num, ToPrimitive};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::cmp::PartialOrd;
use std::collections::HashSet;
use std::fmt::{self, Display};
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

pub trait DataValue:
    Debug
    + Clone
    + Copy
    + Num
    + FromPrimitive
    + ToPrimitive
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + Display
    + 'static
{
}

impl<T> DataValue for T where
    T: Debug
        + Clone
        + Copy
        + Num
        + FromPrimitive
        + ToPrimitive
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + Send
        + Sync
        + Display
        + 'static
{
}

pub trait Number: DataValue + PartialOrd {}
impl<T> Number for T where T: DataValue + PartialOrd {}

/// Numeric feature values usable by the nearest-neighbors classifier.
pub trait RealNumber: Number + Float {}
impl<T> RealNumber for T where T: Number + Float {}

/// Discrete feature values usable by the decision tree: anything that can be
/// compared for equality and hashed.
pub trait CategoricalValue: Debug + Clone + Eq + Hash + Send + Sync + Display + 'static {}
impl<T> CategoricalValue for T where T: Debug + Clone + Eq + Hash + Send + Sync + Display + 'static {}

/// Training instances together with the names of their feature columns.
///
/// `attributes[i]` names the feature at position `i` of every instance.
/// Removing an attribute removes the same position from every instance.
pub struct Dataset<T> {
    pub attributes: Vec<String>,
    pub instances: Vec<Instance<T>>,
}

impl<T: Debug> Debug for Dataset<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset {{")?;
        writeln!(f, "    attributes: {:?},", self.attributes)?;
        writeln!(f, "    instances: [")?;

        for instance in &self.instances {
            write!(f, "        [")?;
            for feature in instance.features() {
                write!(f, "{:?}, ", feature)?;
            }
            writeln!(f, "] -> {:?},", instance.label())?;
        }

        write!(f, "    ]\n}}")
    }
}

impl<T> Dataset<T> {
    pub fn new(attributes: Vec<String>, instances: Vec<Instance<T>>) -> Self {
        Self {
            attributes,
            instances,
        }
    }

    pub fn into_parts(&self) -> (&[String], &[Instance<T>]) {
        (&self.attributes, &self.instances)
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn instances(&self) -> &[Instance<T>] {
        &self.instances
    }

    pub fn is_not_empty(&self) -> bool {
        !(self.attributes.is_empty() || self.instances.is_empty())
    }

    pub fn nrows(&self) -> usize {
        self.instances.len()
    }

    pub fn nfeatures(&self) -> usize {
        self.attributes.len()
    }

    /// Labels of the labeled instances, in row order.
    pub fn labels(&self) -> Vec<&str> {
        self.instances.iter().filter_map(Instance::label).collect()
    }

    /// Checks the training contract: at least one instance and one attribute,
    /// every instance labeled and as wide as the attribute list.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.instances.is_empty() {
            return Err(ClassifierError::EmptyInstances);
        }
        if self.attributes.is_empty() {
            return Err(ClassifierError::EmptyAttributes);
        }
        validate_labeled(&self.instances, self.attributes.len())
    }
}

impl<T: Clone> Dataset<T> {
    /// Drops the attribute at `index` together with the matching feature of every instance.
    pub fn without_attribute(&self, index: usize) -> Self {
        Self::new(
            copy_skipping_index(&self.attributes, index),
            self.instances
                .iter()
                .map(|instance| instance.without_feature(index))
                .collect(),
        )
    }

    pub fn train_test_split(
        &self,
        train_size: f64,
        seed: Option<u64>,
    ) -> Result<(Self, Self), ClassifierError> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err(ClassifierError::InvalidTrainSize(train_size));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.nrows()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.nrows() as f64 * train_size).floor() as usize;
        let (train_indices, test_indices) = indices.split_at(train_size);

        let select = |indices: &[usize]| {
            indices
                .iter()
                .map(|&index| self.instances[index].clone())
                .collect::<Vec<_>>()
        };

        Ok((
            Self::new(self.attributes.clone(), select(train_indices)),
            Self::new(self.attributes.clone(), select(test_indices)),
        ))
    }
}

impl<T: CategoricalValue> Dataset<T> {
    /// Distinct values of the feature at `index`, in the order they first appear.
    pub fn distinct_values(&self, index: usize) -> Vec<T> {
        let mut seen = HashSet::new();
        self.instances
            .iter()
            .filter_map(|instance| instance.feature(index))
            .filter(|&value| seen.insert(value))
            .cloned()
            .collect()
    }

    /// The instances whose feature at `index` equals `value`, keeping every attribute.
    pub fn partition(&self, index: usize, value: &T) -> Self {
        Self::new(
            self.attributes.clone(),
            self.instances
                .iter()
                .filter(|instance| instance.feature(index) == Some(value))
                .cloned()
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> Dataset<&'static str> {
        Dataset::new(
            vec!["outlook".to_string(), "windy".to_string()],
            vec![
                Instance::labeled(vec!["sunny", "no"], "play"),
                Instance::labeled(vec!["rainy", "yes"], "stay"),
                Instance::labeled(vec!["sunny", "yes"], "play"),
                Instance::labeled(vec!["overcast", "no"], "play"),
            ],
        )
    }

    #[test]
    fn test_dataset_into_parts() {
        let dataset = weather();
        let (attributes, instances) = dataset.into_parts();
        assert_eq!(attributes, &["outlook", "windy"]);
        assert_eq!(instances.len(), 4);
        assert_eq!(dataset.nfeatures(), 2);
    }

    #[test]
    fn test_dataset_formatting() {
        let dataset = Dataset::new(
            vec!["x".to_string()],
            vec![Instance::labeled(vec![1], "a"), Instance::unlabeled(vec![2])],
        );

        let expected_str = "\
Dataset {
    attributes: [\"x\"],
    instances: [
        [1, ] -> Some(\"a\"),
        [2, ] -> None,
    ]
}";
        assert_eq!(format!("{:?}", dataset), expected_str);
    }

    #[test]
    fn test_dataset_is_not_empty() {
        assert!(weather().is_not_empty());
        let empty: Dataset<i32> = Dataset::new(vec!["x".to_string()], vec![]);
        assert!(!empty.is_not_empty());
    }

    #[test]
    fn test_dataset_validate() {
        assert!(weather().validate().is_ok());

        let empty: Dataset<i32> = Dataset::new(vec!["x".to_string()], vec![]);
        assert_eq!(empty.validate(), Err(ClassifierError::EmptyInstances));

        let no_attributes = Dataset::new(vec![], vec![Instance::labeled(vec![1], "a")]);
        assert_eq!(no_attributes.validate(), Err(ClassifierError::EmptyAttributes));

        let ragged = Dataset::new(
            vec!["x".to_string(), "y".to_string()],
            vec![
                Instance::labeled(vec![1, 2], "a"),
                Instance::labeled(vec![1, 2, 3], "b"),
            ],
        );
        assert!(matches!(
            ragged.validate(),
            Err(ClassifierError::FeatureCountMismatch { index: 1, .. })
        ));
    }

    #[test]
    fn test_dataset_distinct_values_in_first_seen_order() {
        assert_eq!(weather().distinct_values(0), vec!["sunny", "rainy", "overcast"]);
        assert_eq!(weather().distinct_values(1), vec!["no", "yes"]);
    }

    #[test]
    fn test_dataset_partition() {
        let sunny = weather().partition(0, &"sunny");
        assert_eq!(sunny.nrows(), 2);
        assert_eq!(sunny.nfeatures(), 2);
        assert_eq!(sunny.labels(), vec!["play", "play"]);
    }

    #[test]
    fn test_dataset_without_attribute() {
        let dataset = weather();
        let reduced = dataset.without_attribute(0);
        assert_eq!(reduced.attributes(), &["windy"]);
        assert!(reduced.instances().iter().all(|i| i.nfeatures() == 1));
        assert_eq!(reduced.instances()[1].features(), &["yes"]);
        assert_eq!(dataset.nfeatures(), 2);
    }

    #[test]
    fn test_dataset_train_test_split() {
        let (train, test) = weather().train_test_split(0.75, None).unwrap();
        assert_eq!(train.nrows(), 3);
        assert_eq!(test.nrows(), 1);
        assert_eq!(train.attributes(), test.attributes());
    }

    #[test]
    fn test_dataset_train_test_split_with_seed_is_reproducible() {
        let (first, _) = weather().train_test_split(0.5, Some(1000)).unwrap();
        let (second, _) = weather().train_test_split(0.5, Some(1000)).unwrap();
        assert_eq!(first.instances(), second.instances());
    }

    #[test]
    fn test_dataset_train_test_split_rejects_bad_size() {
        assert_eq!(
            weather().train_test_split(1.5, None).err(),
            Some(ClassifierError::InvalidTrainSize(1.5))
        );
    }
}
