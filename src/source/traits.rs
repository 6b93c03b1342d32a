use crate::model::LoadError;
use serde_json::Value;

#[async_trait::async_trait]
pub trait DatasetSource: Send + Sync {
    /// Location shown in logs.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Value, LoadError>;
}
