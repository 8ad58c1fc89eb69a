use crate::models::MessFeedback;

use super::{AiError, ChatContext};

pub fn summary_prompt(institute: &str, feedbacks: &[MessFeedback]) -> Result<String, AiError> {
    let payload = serde_json::to_string(feedbacks)?;
    Ok(format!(
        "Analyze the following mess feedback from {institute} students and provide a \
         2-sentence summary and one actionable improvement: {payload}"
    ))
}

pub fn chat_prompt(institute: &str, message: &str, context: &ChatContext) -> Result<String, AiError> {
    let payload = serde_json::to_string(context)?;
    Ok(format!(
        "You are the {institute} Hostel & Mess Assistant. Use this context: {payload}. \
         User asks: {message}"
    ))
}

pub fn chat_system_instruction(institute: &str) -> String {
    format!(
        "You are a helpful assistant for {institute} hostel residents. Be polite, concise, \
         and provide accurate info based on the provided data."
    )
}
