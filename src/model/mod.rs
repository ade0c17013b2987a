use std::sync::Arc;
use anyhow::Result;
use log::info;

use crate::web::models::ChatMessage;

pub mod keywords;

/// Produces recycling guidance for chat messages and uploaded images.
///
/// The keyword implementation is a stand-in for an external
/// completion/vision provider, which would implement this same trait.
pub trait Advisor: Send + Sync {
    fn chat_reply(&self, message: &str, history: &[ChatMessage]) -> Result<String>;

    fn analyze_image(&self, content: &[u8], filename: &str) -> Result<String>;
}

// Canned responses picked by keyword; history and image bytes are ignored.
pub struct KeywordAdvisor;

impl Advisor for KeywordAdvisor {
    fn chat_reply(&self, message: &str, _history: &[ChatMessage]) -> Result<String> {
        Ok(keywords::select_chat_response(message).to_string())
    }

    fn analyze_image(&self, _content: &[u8], filename: &str) -> Result<String> {
        Ok(keywords::select_image_response(filename).to_string())
    }
}

pub struct ModelManager {
    pub model: Arc<dyn Advisor>,
}

impl ModelManager {
    pub fn new() -> Self {
        info!("Using keyword advisor for recycling guidance");
        Self::with_advisor(Arc::new(KeywordAdvisor))
    }

    pub fn with_advisor(model: Arc<dyn Advisor>) -> Self {
        Self { model }
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new()
    }
}
