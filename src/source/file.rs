use async_trait::async_trait;

use crate::source::{Fetched, ValueSource};

/// Reads the placeholder text as a file path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

#[async_trait]
impl ValueSource for FileSource {
    async fn fetch(&self, inner: &str) -> Fetched {
        match tokio::fs::read(inner).await {
            Ok(bytes) => Fetched::ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => Fetched::degraded(String::new(), format!("{}: {}", inner, e)),
        }
    }
}
