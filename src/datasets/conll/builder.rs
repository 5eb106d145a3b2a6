use std::{collections::BTreeMap, path::Path};

use async_trait::async_trait;

use crate::{
    datasets::{BuilderError, DatasetInfo, Split, Version},
    download::DownloadManager,
};

use super::ConllBuilderConfig;

/// Generated examples for each split
pub type SplitGenerators<E> = BTreeMap<Split, E>;

/// Turns one downloaded CoNLL file into examples, reading its columns according to the
/// config's separator and ordered features
#[async_trait]
pub trait ExampleGenerator: Send + Sync {
    /// The examples produced for a single file
    type Examples: Send;

    /// Generate the examples for the file at the given path
    async fn generate_examples(
        &self,
        config: &ConllBuilderConfig,
        path: &Path,
    ) -> anyhow::Result<Self::Examples>;
}

/// A dataset made of CoNLL-formatted files, parameterized by a builder config
#[async_trait]
pub trait ConllDatasetBuilder: Send + Sync {
    /// The dataset name
    const NAME: &'static str;

    /// The dataset version, as a major.minor.patch literal
    const VERSION: &'static str;

    /// Release notes keyed by version
    const RELEASE_NOTES: &'static [(&'static str, &'static str)];

    /// The selected builder config
    fn builder_config(&self) -> &ConllBuilderConfig;

    /// Returns the dataset metadata
    fn info(&self) -> Result<DatasetInfo, BuilderError>;

    /// Download the source files and generate the examples for every split
    async fn split_generators<G: ExampleGenerator>(
        &self,
        dl_manager: &dyn DownloadManager,
        generator: &G,
    ) -> Result<SplitGenerators<G::Examples>, BuilderError>;

    /// Build the metadata for the selected config from the dataset's descriptive text
    fn create_dataset_info(
        &self,
        description: &str,
        homepage: &str,
        citation: &str,
    ) -> Result<DatasetInfo, BuilderError> {
        let version: Version = Self::VERSION.parse()?;

        let release_notes = Self::RELEASE_NOTES
            .iter()
            .map(|(version, notes)| (version.to_string(), notes.to_string()))
            .collect();

        let config = self.builder_config();

        Ok(DatasetInfo::new(
            Self::NAME.to_string(),
            config.name.clone(),
            version,
            release_notes,
            description.trim().to_string(),
            homepage.to_string(),
            citation.trim().to_string(),
            config.ordered_features.clone(),
        ))
    }

    /// Generate examples for one downloaded file using the selected config
    async fn generate_examples<G: ExampleGenerator>(
        &self,
        generator: &G,
        path: &Path,
    ) -> Result<G::Examples, BuilderError> {
        generator
            .generate_examples(self.builder_config(), path)
            .await
            .map_err(|source| BuilderError::Generate {
                path: path.to_path_buf(),
                source: source.into(),
            })
    }
}
