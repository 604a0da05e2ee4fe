use std::fmt;

/// Prompt text after the heuristic stages have run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancedPrompt(String);

/// Prompt text as rewritten by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolishedPrompt(String);

macro_rules! prompt_text {
    ($name:ident) => {
        impl $name {
            pub(crate) fn new(text: String) -> Self {
                Self(text)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

prompt_text!(EnhancedPrompt);
prompt_text!(PolishedPrompt);
