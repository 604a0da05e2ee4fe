//! The fixed heuristic stages applied to every raw prompt.

const CLARITY: &str = "\n\nPlease be specific and clear. Replace vague terms with concrete details, \
and add constraints such as length, format, and style if applicable. \
Specify the desired output structure.";

const CONTEXT: &str = "\n\nInclude relevant background information and specify the purpose or goal. \
If relevant, consider the target audience.";

const OUTPUT_FORMAT: &str = "\n\nStructure the output clearly: use numbered lists, bullet points, \
headers, or specific formats like JSON if suitable.";

const EXAMPLES: &str = "\n\nFor example, you can provide 1–2 input/output samples illustrating \
the desired format or content.";

const STEP_BY_STEP: &str =
    "\n\nPlease think step-by-step, explain your reasoning, and show your work.";

const QUALITY: &str =
    "\n\nBe accurate and thorough. If uncertain, please say so. Double-check your reasoning.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Clarity,
    Context,
    OutputFormat,
    Examples,
    StepByStep,
    Quality,
}

impl Stage {
    /// Application order. Changing it changes every enhanced prompt.
    pub const ALL: [Stage; 6] = [
        Stage::Clarity,
        Stage::Context,
        Stage::OutputFormat,
        Stage::Examples,
        Stage::StepByStep,
        Stage::Quality,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Clarity => "clarity",
            Stage::Context => "context",
            Stage::OutputFormat => "output-format",
            Stage::Examples => "examples",
            Stage::StepByStep => "step-by-step",
            Stage::Quality => "quality",
        }
    }

    /// Guidance block appended by this stage, including its leading blank line.
    pub fn suffix(self) -> &'static str {
        match self {
            Stage::Clarity => CLARITY,
            Stage::Context => CONTEXT,
            Stage::OutputFormat => OUTPUT_FORMAT,
            Stage::Examples => EXAMPLES,
            Stage::StepByStep => STEP_BY_STEP,
            Stage::Quality => QUALITY,
        }
    }

    pub fn apply(self, text: &str) -> String {
        let trimmed = text.trim();
        let suffix = self.suffix();

        let mut out = String::with_capacity(trimmed.len() + suffix.len());
        out.push_str(trimmed);
        out.push_str(suffix);
        out
    }
}
