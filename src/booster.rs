use log::debug;
use std::sync::Arc;

use crate::ai::{ModelError, Polisher, TextModel};
use crate::enhance::enhance;
use crate::prompt::PolishedPrompt;

/// Raw prompt in, polished prompt out: heuristics first, then one model rewrite.
#[derive(Clone)]
pub struct PromptBooster {
    polisher: Polisher,
}

impl PromptBooster {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self {
            polisher: Polisher::new(model),
        }
    }

    pub async fn boost(&self, raw: &str) -> Result<PolishedPrompt, ModelError> {
        let enhanced = enhance(raw);
        debug!(
            "Enhanced prompt from {} to {} bytes",
            raw.len(),
            enhanced.as_str().len()
        );
        self.polisher.polish(&enhanced).await
    }
}
