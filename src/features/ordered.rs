use std::{collections::HashSet, ops::Deref};

use serde::{ser::SerializeMap, Serialize, Serializer};

use super::{Feature, FeatureError};

/// Column name to feature mapping, kept in the column order of the source files.
///
/// The order is load-bearing: the n-th whitespace-separated field of a corpus line
/// is interpreted as the n-th feature, so a misordered schema silently assigns
/// labels to the wrong column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedFeatures(Vec<(String, Feature)>);

impl OrderedFeatures {
    /// Build a schema, rejecting repeated column names
    pub fn new<I, S>(columns: I) -> Result<Self, FeatureError>
    where
        I: IntoIterator<Item = (S, Feature)>,
        S: Into<String>,
    {
        let columns: Vec<(String, Feature)> = columns
            .into_iter()
            .map(|(name, feature)| (name.into(), feature))
            .collect();

        let mut seen = HashSet::with_capacity(columns.len());
        for (name, _) in &columns {
            if !seen.insert(name.as_str()) {
                return Err(FeatureError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self(columns))
    }

    /// Column names in file order
    pub fn column_names(&self) -> Vec<&str> {
        self.0.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Look up a column's feature by name
    pub fn get(&self, name: &str) -> Option<&Feature> {
        self.0
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, feature)| feature)
    }

    /// The zero-based field index of a column within a corpus line
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|(column, _)| column == name)
    }
}

impl Deref for OrderedFeatures {
    type Target = [(String, Feature)];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Serialize for OrderedFeatures {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, feature) in &self.0 {
            map.serialize_entry(name, feature)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn schema() -> OrderedFeatures {
        OrderedFeatures::new([
            ("tokens", Feature::text_sequence()),
            ("ner", Feature::label_sequence(["O", "B-LOC"]).unwrap()),
        ])
        .unwrap()
    }

    #[test]
    fn test_keeps_declaration_order() {
        let features = schema();

        assert_eq!(features.column_names(), vec!["tokens", "ner"]);
        assert_eq!(features.position("ner"), Some(1));
        assert_eq!(features.get("tokens"), Some(&Feature::text_sequence()));
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn test_rejects_duplicate_columns() {
        let result = OrderedFeatures::new([
            ("tokens", Feature::text_sequence()),
            ("tokens", Feature::text_sequence()),
        ]);

        assert_eq!(result, Err(FeatureError::DuplicateColumn("tokens".into())));
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let json = serde_json::to_string(&schema()).unwrap();

        assert!(json.find("\"tokens\"").unwrap() < json.find("\"ner\"").unwrap());
    }
}
