pub mod stages;

pub use stages::Stage;

use crate::prompt::EnhancedPrompt;

/// Runs every heuristic stage over the raw prompt, in order.
///
/// Each stage trims what came before it and appends its own guidance block,
/// so the trimmed raw text always leads the result and the quality block
/// always ends it. Empty input is fine: the result is then just the six
/// blocks.
pub fn enhance(raw: &str) -> EnhancedPrompt {
    let text = Stage::ALL
        .iter()
        .fold(raw.to_string(), |text, stage| stage.apply(&text));

    EnhancedPrompt::new(text.trim().to_string())
}
