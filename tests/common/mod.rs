use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use prompt_booster::config::ServerConfig;
use prompt_booster::{ModelError, PromptBooster, TextModel};

pub const EXTENSION_ORIGIN: &str = "chrome-extension://jejbdolnndbgmjmjnbefbdnhnkgoafdh";

/// Model stub returning a canned result and counting calls.
pub struct StubModel {
    reply: Result<&'static str, &'static str>,
    calls: AtomicUsize,
}

impl StubModel {
    pub fn replying(text: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextModel for StubModel {
    async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            Ok(text) => Ok(text.to_string()),
            Err(message) => Err(ModelError::Other(message.to_string())),
        }
    }
}

pub fn booster_with(model: Arc<StubModel>) -> PromptBooster {
    PromptBooster::new(model)
}

pub fn server_config() -> ServerConfig {
    ServerConfig {
        allowed_origin: EXTENSION_ORIGIN.to_string(),
        ..ServerConfig::default()
    }
}
