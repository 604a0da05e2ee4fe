use log::debug;
use std::sync::Arc;

use super::{ModelError, TextModel};
use crate::prompt::{EnhancedPrompt, PolishedPrompt};

/// Prepended to the enhanced prompt so the model rewrites it instead of answering it.
pub const POLISHING_INSTRUCTION: &str = "Below is a user prompt. Improve the clarity, specificity, \
and structure of the prompt. Do not answer the prompt. Only return the revised version of the \
prompt, ready for input into an AI assistant.\n\nPrompt:\n";

#[derive(Clone)]
pub struct Polisher {
    model: Arc<dyn TextModel>,
}

impl Polisher {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Asks the model for a rewrite of `enhanced`.
    ///
    /// Exactly one model call per invocation. Errors come back untouched.
    pub async fn polish(&self, enhanced: &EnhancedPrompt) -> Result<PolishedPrompt, ModelError> {
        let input = format!("{POLISHING_INSTRUCTION}{enhanced}");
        debug!("Polishing prompt, input length: {}", input.len());

        let output = self.model.generate(&input).await?;
        Ok(PolishedPrompt::new(output.trim().to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{FakeModel, Reply};
    use super::*;
    use crate::enhance::enhance;

    #[tokio::test]
    async fn test_polish_wraps_in_instruction() {
        let model = Arc::new(FakeModel::new(Reply::Echo));
        let polisher = Polisher::new(model.clone());
        let enhanced = enhance("Write a haiku");

        let polished = polisher.polish(&enhanced).await.unwrap();

        assert_eq!(
            polished.as_str(),
            format!("{POLISHING_INSTRUCTION}{enhanced}")
        );
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_polish_trims_model_output() {
        let model = Arc::new(FakeModel::new(Reply::Fixed("\n  A sharper prompt.  \n")));
        let polisher = Polisher::new(model);

        let polished = polisher.polish(&enhance("x")).await.unwrap();
        assert_eq!(polished, "A sharper prompt.");
    }

    #[tokio::test]
    async fn test_polish_calls_model_each_time() {
        let model = Arc::new(FakeModel::new(Reply::Fixed("same")));
        let polisher = Polisher::new(model.clone());
        let enhanced = enhance("repeat me");

        polisher.polish(&enhanced).await.unwrap();
        polisher.polish(&enhanced).await.unwrap();

        assert_eq!(model.calls(), 2);
    }

    #[tokio::test]
    async fn test_polish_propagates_failure_once() {
        let model = Arc::new(FakeModel::new(Reply::Fail("quota exceeded")));
        let polisher = Polisher::new(model.clone());

        let err = polisher.polish(&enhance("x")).await.unwrap_err();

        assert!(matches!(err, ModelError::Other(ref m) if m == "quota exceeded"));
        assert_eq!(model.calls(), 1);
    }
}
