//! Boundary to the external generative-language service.
//!
//! Callers receive an [`AiOutcome`]: either the model's text or a fixed
//! fallback sentence tagged with the failure kind. Errors never escape.

mod error;
pub mod gemini;
pub mod prompts;

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::models::{GuestMeal, MaintenanceRequest, MessFeedback};

pub use error::{AiError, AiErrorKind};
pub use gemini::GeminiClient;

pub const SUMMARY_FALLBACK: &str = "Could not generate summary at this time.";
pub const CHAT_FALLBACK: &str = "I'm having trouble connecting to the server.";

/// A text-generation backend. One attempt per call, no retries.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<String, AiError>;
}

/// Snapshot of every entity collection, sent along with each chat message.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    pub maintenance_requests: Vec<MaintenanceRequest>,
    pub mess_feedbacks: Vec<MessFeedback>,
    pub guest_meals: Vec<GuestMeal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiOutcome {
    Generated(String),
    Fallback {
        kind: AiErrorKind,
        text: &'static str,
    },
}

impl AiOutcome {
    /// What the dashboard shows: model text, or the fallback sentence.
    pub fn text(&self) -> &str {
        match self {
            AiOutcome::Generated(text) => text.as_str(),
            AiOutcome::Fallback { text, .. } => *text,
        }
    }

    pub fn error_kind(&self) -> Option<AiErrorKind> {
        match self {
            AiOutcome::Generated(_) => None,
            AiOutcome::Fallback { kind, .. } => Some(*kind),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.error_kind().is_some()
    }

    fn settle(operation: &str, result: Result<String, AiError>, fallback: &'static str) -> Self {
        let error = match result {
            Ok(text) if !text.trim().is_empty() => return AiOutcome::Generated(text),
            Ok(_) => AiError::EmptyResponse,
            Err(e) => e,
        };
        let kind = error.kind();
        log::error!("AI {operation} failed ({kind:?}): {error}");
        AiOutcome::Fallback { kind, text: fallback }
    }
}

/// Feedback summaries and chat answers grounded in dashboard data.
#[derive(Clone)]
pub struct Assistant {
    model: Arc<dyn LanguageModel>,
    institute: String,
}

impl Assistant {
    pub fn new(model: Arc<dyn LanguageModel>, institute: impl Into<String>) -> Self {
        Self {
            model,
            institute: institute.into(),
        }
    }

    /// Two-sentence summary plus one actionable improvement.
    pub async fn summarize(&self, feedbacks: &[MessFeedback]) -> AiOutcome {
        let result = match prompts::summary_prompt(&self.institute, feedbacks) {
            Ok(prompt) => self.model.generate(&prompt, None).await,
            Err(e) => Err(e),
        };
        AiOutcome::settle("summarize", result, SUMMARY_FALLBACK)
    }

    pub async fn chat(&self, message: &str, context: &ChatContext) -> AiOutcome {
        let system = prompts::chat_system_instruction(&self.institute);
        let result = match prompts::chat_prompt(&self.institute, message, context) {
            Ok(prompt) => self.model.generate(&prompt, Some(&system)).await,
            Err(e) => Err(e),
        };
        AiOutcome::settle("chat", result, CHAT_FALLBACK)
    }
}
