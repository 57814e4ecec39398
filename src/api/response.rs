use crate::error::GenerationError;
use serde_json::Value;

/// Pull the assistant text out of a chat-completions response body.
pub fn extract_content(response_json: &Value) -> Result<String, GenerationError> {
    if let Some(message) = extract_error_message(response_json) {
        return Err(GenerationError::new(message));
    }

    let choices = response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| GenerationError::new("No choices in response"))?;

    let first_choice = choices
        .first()
        .ok_or_else(|| GenerationError::new("Empty choices array"))?;

    let message = first_choice
        .get("message")
        .ok_or_else(|| GenerationError::new("No message in response"))?;

    message
        .get("content")
        .and_then(|c| c.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| GenerationError::new("No content in response"))
}

/// Some providers answer 200 with an `{"error": {...}}` body.
pub fn extract_error_message(response_json: &Value) -> Option<String> {
    let error = response_json.get("error")?;
    error
        .get("message")
        .and_then(|m| m.as_str())
        .map(|s| s.to_string())
        .or_else(|| error.as_str().map(|s| s.to_string()))
}
