use super::error::TwosplitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Claude models the `twosplit` tool accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelId {
    #[serde(rename = "claude-3-opus-latest")]
    Claude3OpusLatest,
    #[serde(rename = "claude-3-5-sonnet-latest")]
    Claude35SonnetLatest,
    #[serde(rename = "claude-3-5-haiku-latest")]
    Claude35HaikuLatest,
    #[serde(rename = "claude-3-haiku-20240307")]
    Claude3Haiku20240307,
}

impl ModelId {
    /// Every accepted model, in the order advertised to clients
    pub const ALL: [ModelId; 4] = [
        ModelId::Claude3OpusLatest,
        ModelId::Claude35SonnetLatest,
        ModelId::Claude35HaikuLatest,
        ModelId::Claude3Haiku20240307,
    ];

    /// Identifier sent to the Messages API
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Claude3OpusLatest => "claude-3-opus-latest",
            ModelId::Claude35SonnetLatest => "claude-3-5-sonnet-latest",
            ModelId::Claude35HaikuLatest => "claude-3-5-haiku-latest",
            ModelId::Claude3Haiku20240307 => "claude-3-haiku-20240307",
        }
    }

    /// Comma separated list of all identifiers, used in error messages and
    /// the tool description
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(ModelId::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = TwosplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                TwosplitError::Validation(format!(
                    "Invalid model. Must be one of: {}",
                    Self::allowed_list()
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_model() {
        for model in ModelId::ALL {
            assert_eq!(model.as_str().parse::<ModelId>().unwrap(), model);
        }
    }

    #[test]
    fn test_rejects_unknown_model() {
        let err = "gpt-4o".parse::<ModelId>().unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid model. Must be one of: "));
        for model in ModelId::ALL {
            assert!(message.contains(model.as_str()));
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("Claude-3-Opus-Latest".parse::<ModelId>().is_err());
        assert!(" claude-3-opus-latest".parse::<ModelId>().is_err());
    }

    #[test]
    fn test_serde_uses_api_names() {
        let json = serde_json::to_string(&ModelId::Claude35HaikuLatest).unwrap();
        assert_eq!(json, "\"claude-3-5-haiku-latest\"");
    }
}
