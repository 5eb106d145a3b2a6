use std::path::Path;

use async_trait::async_trait;
use conll_datasets::{
    datasets::{
        conll::{ConllBuilderConfig, ConllDatasetBuilder, ExampleGenerator},
        conll2002::{Conll2002, DATASET},
        BuilderError, Split,
    },
    download::{DownloadError, LocalMirror},
};
use pretty_assertions::assert_eq;

/// Counts the non-empty lines of a file and checks they have one field per column
struct LineCounter;

#[async_trait]
impl ExampleGenerator for LineCounter {
    type Examples = usize;

    async fn generate_examples(
        &self,
        config: &ConllBuilderConfig,
        path: &Path,
    ) -> anyhow::Result<Self::Examples> {
        let contents = tokio::fs::read_to_string(path).await?;
        let lines: Vec<&str> = contents.lines().filter(|line| !line.is_empty()).collect();

        for line in &lines {
            let fields = line.split(config.separator).count();
            anyhow::ensure!(
                fields == config.ordered_features.len(),
                "expected {} columns, found {}",
                config.ordered_features.len(),
                fields
            );
        }

        Ok(lines.len())
    }
}

async fn write_mirror(data_dir: &Path, files: &[(&str, &str)]) -> LocalMirror {
    let mirror = LocalMirror::for_dataset(data_dir, DATASET);
    tokio::fs::create_dir_all(mirror.root()).await.unwrap();

    for (name, contents) in files {
        tokio::fs::write(mirror.root().join(name), contents)
            .await
            .unwrap();
    }

    mirror
}

#[tokio::test]
async fn test_spanish_splits_from_local_mirror() {
    let dir = tempfile::tempdir().unwrap();
    let mirror = write_mirror(
        dir.path(),
        &[
            ("esp.train", "Melbourne NP B-LOC\n( Fpa O\n\nAustralia NP B-LOC\n"),
            ("esp.testa", "Sao NC B-LOC\nPaulo VMI I-LOC\n"),
            ("esp.testb", "La DA O\n"),
        ],
    )
    .await;

    let splits = Conll2002::new("es")
        .unwrap()
        .split_generators(&mirror, &LineCounter)
        .await
        .unwrap();

    assert_eq!(splits[&Split::Train], 3);
    assert_eq!(splits[&Split::Dev], 2);
    assert_eq!(splits[&Split::Test], 1);
}

#[tokio::test]
async fn test_missing_split_file() {
    let dir = tempfile::tempdir().unwrap();
    let mirror = write_mirror(
        dir.path(),
        &[("ned.train", "De Art O\n"), ("ned.testa", "De Art O\n")],
    )
    .await;

    let err = Conll2002::new("nl")
        .unwrap()
        .split_generators(&mirror, &LineCounter)
        .await
        .unwrap_err();

    match err {
        BuilderError::Download(DownloadError::Missing { url, path }) => {
            assert!(url.as_str().ends_with("/ned.testb"));
            assert_eq!(path, mirror.root().join("ned.testb"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_malformed_file_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let mirror = write_mirror(
        dir.path(),
        &[
            ("ned.train", "De Art O\n"),
            ("ned.testa", "De Art\n"),
            ("ned.testb", "De Art O\n"),
        ],
    )
    .await;

    let err = Conll2002::new("nl")
        .unwrap()
        .split_generators(&mirror, &LineCounter)
        .await
        .unwrap_err();

    match err {
        BuilderError::Generate { path, source } => {
            assert_eq!(path, mirror.root().join("ned.testa"));
            assert_eq!(source.to_string(), "expected 3 columns, found 2");
        }
        other => panic!("unexpected error: {other}"),
    }
}
