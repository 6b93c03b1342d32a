use crate::model::LoadError;
use crate::source::DatasetSource;
use reqwest::Client;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Reads the dataset from a local JSON file.
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Value, LoadError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        info!("Read {} bytes from {}", content.len(), self.path.display());
        Ok(serde_json::from_str(&content)?)
    }
}

/// Downloads the dataset over HTTP.
pub struct HttpSource {
    pub client: Client,
    pub url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder()
            .user_agent("CookerCatalog/0.1")
            .timeout(timeout)
            .build()?;

        Ok(Self { client, url: url.into() })
    }
}

#[async_trait::async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Value, LoadError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::InvalidResponse(status.as_u16()));
        }

        let body = response.text().await?;
        info!("Downloaded {} bytes from {} [{}]", body.len(), self.url, status);
        Ok(serde_json::from_str(&body)?)
    }
}

/// HTTP for `http://`/`https://` locations, local file otherwise.
pub fn source_for(location: &str, timeout: Duration) -> Result<Box<dyn DatasetSource>, LoadError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}
