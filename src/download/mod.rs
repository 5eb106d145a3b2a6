use std::{collections::BTreeMap, path::PathBuf};

use async_trait::async_trait;
use url::Url;

use crate::datasets::Split;

/// A download manager over an already-populated local directory
pub mod local;

pub use local::LocalMirror;

/// Remote files to fetch, keyed by split
pub type UrlMap = BTreeMap<Split, Url>;

/// Local paths of fetched files, keyed by split
pub type PathMap = BTreeMap<Split, PathBuf>;

/// Fetches remote files and hands back local paths
#[async_trait]
pub trait DownloadManager: Send + Sync {
    /// Download every url in the map, returning a local path for each split
    async fn download(&self, urls: &UrlMap) -> Result<PathMap, DownloadError>;
}

/// Download Error
#[derive(thiserror::Error, Debug)]
pub enum DownloadError {
    /// The file for the given url is not available locally
    #[error("{url} has not been downloaded to {}", path.display())]
    Missing {
        /// The remote url
        url: Url,

        /// Where the file was expected
        path: PathBuf,
    },

    /// The url does not name a file
    #[error("no file name in url {0}")]
    InvalidUrl(Url),

    /// Filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
