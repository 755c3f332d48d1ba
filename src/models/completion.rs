use serde::{Deserialize, Serialize};

/// One block of a Messages API response.
///
/// Only `text` blocks carry answer text. Everything else (`tool_use`,
/// `thinking`, future kinds) decodes to `Other` and is dropped on extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

/// A single completion returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub content: Vec<ContentBlock>,
}

impl Completion {
    pub fn new(content: Vec<ContentBlock>) -> Self {
        Self { content }
    }

    /// Convenience constructor for a completion holding one text block
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![ContentBlock::Text { text: text.into() }])
    }

    /// Concatenate text blocks in order, without separators
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Other => None,
            })
            .collect()
    }
}

/// Texts of the two independent completions, kept by call position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionPair {
    pub first: String,
    pub second: String,
}
