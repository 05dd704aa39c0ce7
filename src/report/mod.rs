pub mod client;
pub mod html;
pub mod prompt;

/// Outcome of the optional summarization path. Only `Summary` carries real
/// report text; every other variant downgrades to an explanatory message
/// and never blocks the numeric artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiOutcome {
    Disabled,
    NoKey,
    NoPrompt,
    Failed(String),
    Summary(String),
}

impl AiOutcome {
    pub fn message(&self) -> String {
        match self {
            AiOutcome::Disabled => "AI analysis was not enabled.".to_string(),
            AiOutcome::NoKey => client::NO_API_KEY_PLACEHOLDER.to_string(),
            AiOutcome::NoPrompt => {
                "AI analysis skipped: no identifiable mutation or score column.".to_string()
            }
            AiOutcome::Failed(err) => format!("AI analysis failed: {}", err),
            AiOutcome::Summary(text) => text.clone(),
        }
    }

    pub fn summary_text(&self) -> Option<&str> {
        match self {
            AiOutcome::Summary(text) => Some(text),
            _ => None,
        }
    }
}
