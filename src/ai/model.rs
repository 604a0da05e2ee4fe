use async_trait::async_trait;

use super::ModelError;

/// A single-shot text completion backend.
///
/// One call in, one completion out. Implementations must not retry.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}
