//! Prompt templates for the twosplit flow
//!
//! Both templates are fixed text. Only the user prompt and the two candidate
//! responses are substituted in.

/// Appended to the user prompt for the two candidate calls
pub const SINGLE_ANSWER_INSTRUCTION: &str =
    "Provide exactly one response. Do not provide multiple options or ask follow-up questions.";

/// Prompt sent for each of the two independent completions
pub fn enhanced_prompt(prompt: &str) -> String {
    format!("{prompt}\n\n{SINGLE_ANSWER_INSTRUCTION}")
}

/// Prompt asking the model to select or merge the two candidates.
///
/// `prompt` is the original user prompt, not the enhanced one.
pub fn synthesis_prompt(prompt: &str, first: &str, second: &str) -> String {
    format!(
        r#"You are tasked with creating the best possible response by either selecting one response entirely or combining elements from both responses. Here are two responses to this prompt: "{prompt}"

Response 1:
{first}

Response 2:
{second}

Your task:
1. Create the best possible response by either:
   - Using one response entirely if it's clearly superior
   - OR combining the best elements from both responses
2. Then list which parts came from which response

Important: {instruction}

Format your response exactly like this:
[Your complete response with no explanations or commentary]
---
SOURCES:
[List which parts came from Response 1 vs Response 2]"#,
        prompt = prompt,
        first = first,
        second = second,
        instruction = SINGLE_ANSWER_INSTRUCTION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhanced_prompt_appends_instruction() {
        assert_eq!(
            enhanced_prompt("What is 2+2?"),
            format!("What is 2+2?\n\n{}", SINGLE_ANSWER_INSTRUCTION)
        );
    }

    #[test]
    fn test_synthesis_prompt_embeds_inputs() {
        let prompt = synthesis_prompt("Name a color", "Red", "Blue");
        assert!(prompt.contains("to this prompt: \"Name a color\""));
        assert!(prompt.contains("Response 1:\nRed\n"));
        assert!(prompt.contains("Response 2:\nBlue\n"));
        assert!(prompt.contains("\n---\nSOURCES:\n"));
        assert!(!prompt.contains(&enhanced_prompt("Name a color")));
    }
}
