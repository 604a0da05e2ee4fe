pub mod error;
pub mod gemini_client;
pub mod model;
pub mod polisher;

pub use error::ModelError;
pub use gemini_client::{ApiKey, GeminiClient};
pub use model::TextModel;
pub use polisher::{Polisher, POLISHING_INSTRUCTION};
