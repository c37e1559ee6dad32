use crate::data::dataset::CategoricalValue;
use crate::data::instance::Instance;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

/// Decision tree node
///
/// A `Branch` tests a single attribute and maps every value observed for it
/// during training to a child node. A `Terminal` carries the resolved label.
#[derive(Clone, Debug, PartialEq)]
pub enum DecisionNode<T: CategoricalValue> {
    Terminal(String),
    Branch {
        attribute: String,
        children: HashMap<T, DecisionNode<T>>,
    },
}

impl<T: CategoricalValue> DecisionNode<T> {
    /// Walks the tree for `instance`, whose features are laid out as `attributes`.
    ///
    /// Returns `None` when the walk reaches a branch whose attribute isn't in
    /// `attributes` or whose children don't include the instance's value.
    pub fn classify<'a>(&'a self, instance: &Instance<T>, attributes: &[String]) -> Option<&'a str> {
        match self {
            DecisionNode::Terminal(label) => Some(label.as_str()),
            DecisionNode::Branch {
                attribute,
                children,
            } => {
                let index = attributes.iter().position(|name| name == attribute)?;
                let value = instance.feature(index)?;
                children.get(value)?.classify(instance, attributes)
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DecisionNode::Terminal(_))
    }

    /// Number of branch levels on the longest path; a terminal node has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            DecisionNode::Terminal(_) => 0,
            DecisionNode::Branch { children, .. } => {
                1 + children.values().map(DecisionNode::depth).max().unwrap_or(0)
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            DecisionNode::Terminal(_) => 1,
            DecisionNode::Branch { children, .. } => {
                children.values().map(DecisionNode::leaf_count).sum()
            }
        }
    }
}

impl<T: CategoricalValue> Display for DecisionNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DecisionNode::Terminal(label) => write!(f, "{}", label),
            DecisionNode::Branch {
                attribute,
                children,
            } => {
                write!(f, "{{{}: {{", attribute)?;
                for (i, (value, child)) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", value, child)?;
                }
                write!(f, "}}}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes() -> Vec<String> {
        vec!["outlook".to_string(), "windy".to_string()]
    }

    // {outlook: {sunny: play, rainy: {windy: {yes: stay, no: play}}}}
    fn tree() -> DecisionNode<&'static str> {
        let windy = DecisionNode::Branch {
            attribute: "windy".to_string(),
            children: HashMap::from([
                ("yes", DecisionNode::Terminal("stay".to_string())),
                ("no", DecisionNode::Terminal("play".to_string())),
            ]),
        };
        DecisionNode::Branch {
            attribute: "outlook".to_string(),
            children: HashMap::from([
                ("sunny", DecisionNode::Terminal("play".to_string())),
                ("rainy", windy),
            ]),
        }
    }

    #[test]
    fn test_classify_terminal_at_root_level() {
        let instance = Instance::unlabeled(vec!["sunny", "yes"]);
        assert_eq!(tree().classify(&instance, &attributes()), Some("play"));
    }

    #[test]
    fn test_classify_descends_into_subtree() {
        let instance = Instance::unlabeled(vec!["rainy", "yes"]);
        assert_eq!(tree().classify(&instance, &attributes()), Some("stay"));

        let instance = Instance::unlabeled(vec!["rainy", "no"]);
        assert_eq!(tree().classify(&instance, &attributes()), Some("play"));
    }

    #[test]
    fn test_classify_unseen_value_is_no_match() {
        let instance = Instance::unlabeled(vec!["overcast", "no"]);
        assert_eq!(tree().classify(&instance, &attributes()), None);

        let instance = Instance::unlabeled(vec!["rainy", "maybe"]);
        assert_eq!(tree().classify(&instance, &attributes()), None);
    }

    #[test]
    fn test_classify_unknown_attribute_is_no_match() {
        let instance = Instance::unlabeled(vec!["sunny", "yes"]);
        let other = vec!["humidity".to_string(), "windy".to_string()];
        assert_eq!(tree().classify(&instance, &other), None);
    }

    #[test]
    fn test_depth_and_leaf_count() {
        assert_eq!(tree().depth(), 2);
        assert_eq!(tree().leaf_count(), 3);
        assert!(!tree().is_terminal());
        assert!(DecisionNode::<&str>::Terminal("x".to_string()).is_terminal());
    }

    #[test]
    fn test_display_single_branch() {
        let node = DecisionNode::Branch {
            attribute: "windy".to_string(),
            children: HashMap::from([("yes", DecisionNode::Terminal("stay".to_string()))]),
        };
        assert_eq!(node.to_string(), "{windy: {yes: stay}}");
    }
}
