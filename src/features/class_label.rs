use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Serializer};

use crate::utils::classes::invert_map;

use super::FeatureError;

/// An ordered vocabulary of label names, where each name's position is its class id
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassLabel {
    names: Vec<String>,
    label2id: HashMap<String, usize>,
}

impl ClassLabel {
    /// Build a vocabulary, rejecting empty or duplicated names
    pub fn new<I, S>(names: I) -> Result<Self, FeatureError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(FeatureError::Empty);
        }

        let label2id: HashMap<String, usize> = invert_map(names.iter().cloned().enumerate());

        if label2id.len() != names.len() {
            let duplicate = names
                .iter()
                .enumerate()
                .find(|(id, name)| label2id.get(*name) != Some(id))
                .map(|(_, name)| name.clone())
                .unwrap_or_default();

            return Err(FeatureError::DuplicateLabel(duplicate));
        }

        Ok(Self { names, label2id })
    }

    /// The number of classes
    pub fn num_classes(&self) -> usize {
        self.names.len()
    }

    /// The label names, in class id order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Convert a label name to its class id
    pub fn str2int(&self, name: &str) -> Result<usize, FeatureError> {
        self.label2id
            .get(name)
            .copied()
            .ok_or_else(|| FeatureError::UnknownLabel(name.to_string()))
    }

    /// Convert a class id to its label name
    pub fn int2str(&self, id: usize) -> Result<&str, FeatureError> {
        self.names
            .get(id)
            .map(String::as_str)
            .ok_or(FeatureError::OutOfRange {
                id,
                num_classes: self.num_classes(),
            })
    }

    /// A map from class ids to label names
    pub fn id2label(&self) -> BTreeMap<usize, String> {
        self.names.iter().cloned().enumerate().collect()
    }
}

impl Serialize for ClassLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.names.serialize(serializer)
    }
}
