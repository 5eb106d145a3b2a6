//! Ordered feature schemas and builder configs for the CoNLL family of corpora.
//!
//! The order of the features must match the order of the columns in the input files.

use lazy_static::lazy_static;

use crate::features::{Feature, FeatureError, OrderedFeatures};

use super::{
    tags::{
        CHUNK_TAGS, CONLL_2002_ES_POS_TAGS, CONLL_2002_NL_POS_TAGS, CONLL_2002_SEPARATOR,
        CONLL_2003_POS_TAGS, NER_TAGS,
    },
    ConllBuilderConfig,
};

fn tokens_pos_ner(pos_tags: &[&str]) -> Result<OrderedFeatures, FeatureError> {
    OrderedFeatures::new([
        ("tokens", Feature::text_sequence()),
        ("pos", Feature::label_sequence(pos_tags.iter().copied())?),
        ("ner", Feature::label_sequence(NER_TAGS.iter().copied())?),
    ])
}

fn tokens_pos_chunks_ner() -> Result<OrderedFeatures, FeatureError> {
    OrderedFeatures::new([
        ("tokens", Feature::text_sequence()),
        ("pos", Feature::label_sequence(CONLL_2003_POS_TAGS.iter().copied())?),
        ("chunks", Feature::label_sequence(CHUNK_TAGS.iter().copied())?),
        ("ner", Feature::label_sequence(NER_TAGS.iter().copied())?),
    ])
}

// The vocabularies are duplicate-free literals, so building from them cannot fail
lazy_static! {
    /// Used by: conll2002 (es)
    pub static ref CONLL_2002_ES_ORDERED_FEATURES: OrderedFeatures =
        tokens_pos_ner(CONLL_2002_ES_POS_TAGS).expect("valid conll2002 es schema");

    /// Used by: conll2002 (nl)
    pub static ref CONLL_2002_NL_ORDERED_FEATURES: OrderedFeatures =
        tokens_pos_ner(CONLL_2002_NL_POS_TAGS).expect("valid conll2002 nl schema");

    /// Used by: conll2003
    pub static ref CONLL_2003_ORDERED_FEATURES: OrderedFeatures =
        tokens_pos_chunks_ner().expect("valid conll2003 schema");

    /// Spanish CoNLL-2002
    pub static ref CONLL_2002_ES_CONFIG: ConllBuilderConfig = ConllBuilderConfig::new(
        "es",
        CONLL_2002_SEPARATOR,
        CONLL_2002_ES_ORDERED_FEATURES.clone(),
    );

    /// Dutch CoNLL-2002
    pub static ref CONLL_2002_NL_CONFIG: ConllBuilderConfig = ConllBuilderConfig::new(
        "nl",
        CONLL_2002_SEPARATOR,
        CONLL_2002_NL_ORDERED_FEATURES.clone(),
    );

    /// English CoNLL-2003
    pub static ref CONLL_2003_CONFIG: ConllBuilderConfig = ConllBuilderConfig::new(
        "conll2003",
        CONLL_2002_SEPARATOR,
        CONLL_2003_ORDERED_FEATURES.clone(),
    );
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    fn num_classes(config: &ConllBuilderConfig, column: &str) -> usize {
        config
            .ordered_features
            .get(column)
            .and_then(Feature::class_label)
            .map(|label| label.num_classes())
            .unwrap_or_default()
    }

    #[test]
    fn test_column_order_matches_files() {
        assert_eq!(
            CONLL_2002_ES_CONFIG.ordered_features.column_names(),
            vec!["tokens", "pos", "ner"]
        );
        assert_eq!(
            CONLL_2002_NL_CONFIG.ordered_features.column_names(),
            vec!["tokens", "pos", "ner"]
        );
        assert_eq!(
            CONLL_2003_CONFIG.ordered_features.column_names(),
            vec!["tokens", "pos", "chunks", "ner"]
        );
    }

    #[test]
    fn test_vocabularies_are_unique_and_non_empty() {
        let vocabularies: [&[&str]; 5] = [
            CONLL_2002_ES_POS_TAGS,
            CONLL_2002_NL_POS_TAGS,
            CONLL_2003_POS_TAGS,
            CHUNK_TAGS,
            NER_TAGS,
        ];

        for tags in vocabularies {
            let unique: HashSet<_> = tags.iter().collect();

            assert!(!tags.is_empty());
            assert_eq!(unique.len(), tags.len());
        }
    }

    #[test]
    fn test_label_columns_use_named_vocabularies() {
        assert_eq!(num_classes(&CONLL_2002_ES_CONFIG, "pos"), 60);
        assert_eq!(num_classes(&CONLL_2002_NL_CONFIG, "pos"), 12);
        assert_eq!(num_classes(&CONLL_2002_NL_CONFIG, "ner"), 9);
        assert_eq!(num_classes(&CONLL_2003_CONFIG, "pos"), 47);
        assert_eq!(num_classes(&CONLL_2003_CONFIG, "chunks"), 23);
        assert_eq!(num_classes(&CONLL_2003_CONFIG, "tokens"), 0);
    }

    #[test]
    fn test_configs_share_separator() {
        for config in [
            &*CONLL_2002_ES_CONFIG,
            &*CONLL_2002_NL_CONFIG,
            &*CONLL_2003_CONFIG,
        ] {
            assert_eq!(config.separator, ' ');
        }
    }

    #[test]
    fn test_outside_tag_is_class_zero() {
        let ner = CONLL_2003_CONFIG
            .ordered_features
            .get("ner")
            .and_then(Feature::class_label)
            .unwrap();

        assert_eq!(ner.str2int("O"), Ok(0));
        assert_eq!(ner.int2str(8), Ok("I-MISC"));
    }
}
