use super::PostSource;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Default payload file name, resolved against the working directory.
pub const DEFAULT_POSTS_FILE: &str = "posts.json";

/// Reads the post payload from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(DEFAULT_POSTS_FILE)
    }
}

impl PostSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send {
        let path = self.path.clone();
        async move { tokio::fs::read(path).await }
    }
}
