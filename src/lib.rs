pub mod ai;
pub mod booster;
pub mod cli;
pub mod config;
pub mod enhance;
pub mod prompt;
pub mod server;

pub use ai::{ModelError, TextModel};
pub use booster::PromptBooster;
pub use cli::{Cli, CommandHandler, Commands};
pub use config::Settings;
pub use enhance::enhance;
pub use prompt::{EnhancedPrompt, PolishedPrompt};
