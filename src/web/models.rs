use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    // Option so an explicit `null` is accepted as well as a missing field.
    #[serde(default)]
    pub history: Option<Vec<ChatMessage>>,
    #[serde(default)]
    pub options: Option<HashMap<String, Value>>,
}

impl ChatRequest {
    pub fn history(&self) -> &[ChatMessage] {
        self.history.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
