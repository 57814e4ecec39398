use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Message {
    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RequestBody {
    pub model: String,
    pub messages: Vec<Message>,
    pub stream: bool,
}

impl RequestBody {
    /// A single-turn, non-streaming request carrying one instruction.
    pub fn for_instruction(model: &str, instruction: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![Message::user(instruction)],
            stream: false,
        }
    }
}
