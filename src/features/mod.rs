use serde::Serialize;

/// Categorical labels
pub mod class_label;

/// Ordered column schemas
pub mod ordered;

pub use class_label::ClassLabel;
pub use ordered::OrderedFeatures;

/// The type of a single feature column
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "feature", rename_all = "snake_case")]
pub enum Feature {
    /// Free-form text
    Text,

    /// A categorical label drawn from a fixed vocabulary
    ClassLabel(ClassLabel),

    /// A variable-length sequence of the inner feature
    Sequence(Box<Feature>),
}

impl Feature {
    /// Wrap a feature in a sequence
    pub fn sequence(feature: Feature) -> Self {
        Feature::Sequence(Box::new(feature))
    }

    /// A sequence of text tokens
    pub fn text_sequence() -> Self {
        Self::sequence(Feature::Text)
    }

    /// A sequence of labels drawn from the given vocabulary
    pub fn label_sequence<I, S>(names: I) -> Result<Self, FeatureError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::sequence(Feature::ClassLabel(ClassLabel::new(names)?)))
    }

    /// The class label at the innermost level of this feature, if any
    pub fn class_label(&self) -> Option<&ClassLabel> {
        match self {
            Feature::Text => None,
            Feature::ClassLabel(label) => Some(label),
            Feature::Sequence(inner) => inner.class_label(),
        }
    }
}

/// Feature Error
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FeatureError {
    /// A label vocabulary must have at least one name
    #[error("a class label needs at least one name")]
    Empty,

    /// The same label appears twice in a vocabulary
    #[error("duplicate label {0}")]
    DuplicateLabel(String),

    /// The same column name appears twice in a schema
    #[error("duplicate column {0}")]
    DuplicateColumn(String),

    /// The label is not part of the vocabulary
    #[error("unknown label {0}")]
    UnknownLabel(String),

    /// The class id is larger than the vocabulary
    #[error("class id {id} is out of range for {num_classes} classes")]
    OutOfRange {
        /// The requested class id
        id: usize,

        /// The number of classes in the vocabulary
        num_classes: usize,
    },
}
