use std::path::{Path, PathBuf};

use async_trait::async_trait;
use derive_new::new;
use log::debug;
use url::Url;

use crate::utils::files;

use super::{DownloadError, DownloadManager, PathMap, UrlMap};

/// Resolves urls to files that were already placed in a local directory, named by the
/// last segment of each url (e.g., `esp.train`)
#[derive(Clone, Debug, new)]
pub struct LocalMirror {
    /// The directory holding the downloaded files
    #[new(into)]
    root: PathBuf,
}

impl LocalMirror {
    /// The mirror for a dataset under the top-level data directory
    pub fn for_dataset(data_dir: impl AsRef<Path>, dataset: &str) -> Self {
        Self::new(data_dir.as_ref().join("datasets").join(dataset))
    }

    /// The directory holding the downloaded files
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The local path a url resolves to
    pub fn local_path(&self, url: &Url) -> Result<PathBuf, DownloadError> {
        let file_name = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| DownloadError::InvalidUrl(url.clone()))?;

        Ok(self.root.join(file_name))
    }
}

#[async_trait]
impl DownloadManager for LocalMirror {
    async fn download(&self, urls: &UrlMap) -> Result<PathMap, DownloadError> {
        let mut paths = PathMap::new();

        for (split, url) in urls {
            let path = self.local_path(url)?;

            if !files::is_file(&path).await? {
                return Err(DownloadError::Missing {
                    url: url.clone(),
                    path,
                });
            }

            debug!("{} split of {} found at {}", split, url, path.display());
            paths.insert(*split, path);
        }

        Ok(paths)
    }
}
