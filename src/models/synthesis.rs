//! Parsing of the synthesis completion and layout of the final tool output

use super::completion::CompletionPair;
use std::fmt;

/// Separates the merged answer from the attribution note
pub const SOURCES_DELIMITER: &str = "---";

/// Rendered in the attribution section when the model omitted the delimiter
pub const MISSING_SOURCES_NOTE: &str = "No source attribution provided.";

/// The synthesis completion split into answer and attribution.
///
/// The text is untrusted model output. It is split on the first `---`; anything
/// after it, further delimiters included, belongs to the sources note. Without a
/// delimiter the whole text is the answer and `sources` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisResult {
    pub answer: String,
    pub sources: Option<String>,
}

impl SynthesisResult {
    pub fn parse(text: &str) -> Self {
        match text.split_once(SOURCES_DELIMITER) {
            Some((answer, sources)) => Self {
                answer: answer.trim().to_string(),
                sources: Some(sources.trim().to_string()),
            },
            None => Self {
                answer: text.trim().to_string(),
                sources: None,
            },
        }
    }

    /// Whether the delimiter was present
    pub fn is_well_formed(&self) -> bool {
        self.sources.is_some()
    }
}

/// Final text artifact returned by the `twosplit` tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse {
    pub synthesis: SynthesisResult,
    pub outputs: CompletionPair,
}

impl ToolResponse {
    pub fn new(synthesis: SynthesisResult, outputs: CompletionPair) -> Self {
        Self { synthesis, outputs }
    }

    pub fn sources_note(&self) -> &str {
        self.synthesis
            .sources
            .as_deref()
            .unwrap_or(MISSING_SOURCES_NOTE)
    }
}

impl fmt::Display for ToolResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{answer}\n\n=== AI 1 Output ===\n{first}\n\n=== AI 2 Output ===\n{second}\n\n=== Source Attribution ===\n{sources}",
            answer = self.synthesis.answer,
            first = self.outputs.first,
            second = self.outputs.second,
            sources = self.sources_note(),
        )
    }
}
