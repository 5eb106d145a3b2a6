use derive_new::new;
use serde::Serialize;

use crate::features::OrderedFeatures;

/// Tag vocabularies
pub mod tags;

/// Ordered feature schemas and builder configs
pub mod configs;

/// The generic CoNLL builder capability
pub mod builder;

pub use builder::{ConllDatasetBuilder, ExampleGenerator, SplitGenerators};
pub use configs::{
    CONLL_2002_ES_CONFIG, CONLL_2002_ES_ORDERED_FEATURES, CONLL_2002_NL_CONFIG,
    CONLL_2002_NL_ORDERED_FEATURES, CONLL_2003_CONFIG, CONLL_2003_ORDERED_FEATURES,
};

/// A named variant of a CoNLL dataset, describing how to read its files
#[derive(Clone, Debug, PartialEq, Eq, Serialize, new)]
pub struct ConllBuilderConfig {
    /// The config name (e.g., "es")
    #[new(into)]
    pub name: String,

    /// The character separating the columns of a line
    pub separator: char,

    /// The columns of a line, in file order
    pub ordered_features: OrderedFeatures,
}
