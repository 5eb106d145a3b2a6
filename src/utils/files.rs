use std::path::Path;

use tokio::{fs, io};

/// Check whether the given path points at an existing regular file
pub async fn is_file(path: &Path) -> io::Result<bool> {
    match fs::metadata(path).await {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_is_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("esp.train");

        assert!(!is_file(&path).await.unwrap());
        assert!(!is_file(dir.path()).await.unwrap());

        fs::write(&path, "La DA O\n").await.unwrap();
        assert!(is_file(&path).await.unwrap());
    }
}
