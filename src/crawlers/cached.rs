use crate::crawlers::crawler::PageSource;
use crate::error::{HarvestError, Result};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads previously saved pages from a local directory
pub struct CachedSource {
    data_dir: PathBuf,
}

impl CachedSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl PageSource for CachedSource {
    fn name(&self) -> &'static str {
        "cached"
    }

    async fn fetch(&mut self, item: &str) -> Result<Option<String>> {
        let path = self.data_dir.join(item);
        match tokio::fs::read_to_string(&path).await {
            Ok(html) => Ok(Some(html)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                ::log::warn!("Skipping missing file: {}", path.display());
                Ok(None)
            }
            Err(e) => Err(HarvestError::io(&path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_file_relative_to_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("york.html"), "<html></html>").unwrap();

        let mut source = CachedSource::new(dir.path());
        assert_eq!(
            source.fetch("york.html").await.unwrap().as_deref(),
            Some("<html></html>")
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = CachedSource::new(dir.path());
        assert_eq!(source.fetch("gone.html").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unreadable_item_stops() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("a_directory")).unwrap();

        let mut source = CachedSource::new(dir.path());
        assert!(matches!(
            source.fetch("a_directory").await,
            Err(HarvestError::Io { .. })
        ));
    }
}
