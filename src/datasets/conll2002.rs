use async_trait::async_trait;
use log::info;
use url::Url;

use crate::download::{DownloadManager, UrlMap};

use super::{
    conll::{
        ConllBuilderConfig, ConllDatasetBuilder, ExampleGenerator, SplitGenerators,
        CONLL_2002_ES_CONFIG, CONLL_2002_NL_CONFIG,
    },
    BuilderError, DatasetInfo, Split,
};

/// The name of the CoNLL-2002 dataset
pub static DATASET: &str = "conll2002";

static DESCRIPTION: &str = "
The shared task of CoNLL-2002 concerns language-independent named entity
recognition. The types of named entities include: persons, locations,
organizations and names of miscellaneous entities that do not belong to the
previous three groups. The participants of the shared task were offered training
and test data for at least two languages. Information sources other than the
training data might have been used in this shared task.
";

static CITATION: &str = r#"
@inproceedings{tjong-kim-sang-2002-introduction,
    title = "Introduction to the {C}o{NLL}-2002 Shared Task: Language-Independent Named Entity Recognition",
    author = "Tjong Kim Sang, Erik F.",
    booktitle = "{COLING}-02: The 6th Conference on Natural Language Learning 2002 ({C}o{NLL}-2002)",
    year = "2002",
    url = "https://aclanthology.org/W02-2024",
}
"#;

/// The dataset homepage
pub static HOMEPAGE: &str = "https://aclanthology.org/W02-2024/";

/// Where the corpus files are hosted
pub static BASE_URL: &str =
    "https://raw.githubusercontent.com/teropa/nlp/master/resources/corpora/conll2002/";

/// The remote file name prefix for each config
pub static CONFIG_NAME_TO_FILE_NAME: &[(&str, &str); 2] = &[("es", "esp"), ("nl", "ned")];

/// The names of the available builder configs
pub static CONFIG_NAMES: &[&str; 2] = &["es", "nl"];

/// All builder configs, in declaration order
pub fn builder_configs() -> [&'static ConllBuilderConfig; 2] {
    [&*CONLL_2002_ES_CONFIG, &*CONLL_2002_NL_CONFIG]
}

/// The remote file suffix for each split
pub fn file_suffix(split: Split) -> &'static str {
    match split {
        Split::Train => ".train",
        Split::Dev => ".testa",
        Split::Test => ".testb",
    }
}

/// Builder for the CoNLL-2002 Spanish and Dutch named entity corpora
#[derive(Clone, Debug)]
pub struct Conll2002 {
    config: ConllBuilderConfig,
}

impl Conll2002 {
    /// Select one of the builder configs by name (e.g., "es")
    pub fn new(config_name: &str) -> Result<Self, BuilderError> {
        let config = builder_configs()
            .into_iter()
            .find(|config| config.name == config_name)
            .ok_or_else(|| BuilderError::UnknownConfig {
                dataset: DATASET.to_string(),
                config: config_name.to_string(),
            })?;

        Ok(Self::from_config(config.clone()))
    }

    /// Use an arbitrary builder config
    pub fn from_config(config: ConllBuilderConfig) -> Self {
        Self { config }
    }

    /// The remote file name prefix for the selected config
    pub fn file_name(&self) -> Result<&'static str, BuilderError> {
        CONFIG_NAME_TO_FILE_NAME
            .iter()
            .find(|(name, _)| *name == self.config.name)
            .map(|(_, file_name)| *file_name)
            .ok_or_else(|| BuilderError::MissingFileName(self.config.name.clone()))
    }

    /// The download url for each split
    pub fn urls(&self) -> Result<UrlMap, BuilderError> {
        let file_name = self.file_name()?;
        let base = Url::parse(BASE_URL)?;

        Split::ALL
            .into_iter()
            .map(|split| -> Result<(Split, Url), BuilderError> {
                let url = base.join(&format!("{}{}", file_name, file_suffix(split)))?;

                Ok((split, url))
            })
            .collect()
    }
}

#[async_trait]
impl ConllDatasetBuilder for Conll2002 {
    const NAME: &'static str = "conll2002";
    const VERSION: &'static str = "1.0.0";
    const RELEASE_NOTES: &'static [(&'static str, &'static str)] =
        &[("1.0.0", "Initial release.")];

    fn builder_config(&self) -> &ConllBuilderConfig {
        &self.config
    }

    fn info(&self) -> Result<DatasetInfo, BuilderError> {
        self.create_dataset_info(DESCRIPTION, HOMEPAGE, CITATION)
    }

    async fn split_generators<G: ExampleGenerator>(
        &self,
        dl_manager: &dyn DownloadManager,
        generator: &G,
    ) -> Result<SplitGenerators<G::Examples>, BuilderError> {
        let urls = self.urls()?;

        info!("Downloading {} ({}) splits", DATASET, self.config.name);
        let dl_paths = dl_manager.download(&urls).await?;

        let mut generators = SplitGenerators::new();
        for split in Split::ALL {
            let path = dl_paths
                .get(&split)
                .ok_or(BuilderError::MissingSplit(split))?;

            info!("Generating {} examples from {}", split, path.display());
            let examples = self.generate_examples(generator, path).await?;

            generators.insert(split, examples);
        }

        Ok(generators)
    }
}
