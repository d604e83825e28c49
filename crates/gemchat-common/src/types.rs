use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of model names the front-end can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ModelId {
    #[default]
    #[serde(rename = "gemini-flash-latest")]
    FlashLatest,
    #[serde(rename = "gemini-flash-lite-latest")]
    FlashLiteLatest,
    #[serde(rename = "gemini-2.5-pro")]
    Gemini25Pro,
    #[serde(rename = "gemini-2.5-flash")]
    Gemini25Flash,
    #[serde(rename = "gemini-2.5-flash-lite")]
    Gemini25FlashLite,
}

impl ModelId {
    pub const ALL: [ModelId; 5] = [
        ModelId::FlashLatest,
        ModelId::FlashLiteLatest,
        ModelId::Gemini25Pro,
        ModelId::Gemini25Flash,
        ModelId::Gemini25FlashLite,
    ];

    /// Model name as used in the Generative Language API path.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::FlashLatest => "gemini-flash-latest",
            ModelId::FlashLiteLatest => "gemini-flash-lite-latest",
            ModelId::Gemini25Pro => "gemini-2.5-pro",
            ModelId::Gemini25Flash => "gemini-2.5-flash",
            ModelId::Gemini25FlashLite => "gemini-2.5-flash-lite",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown model identifier: {0}")]
pub struct UnknownModelId(pub String);

impl FromStr for ModelId {
    type Err = UnknownModelId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ModelId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownModelId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_flash_latest() {
        assert_eq!(ModelId::default().as_str(), "gemini-flash-latest");
    }

    #[test]
    fn parse_every_known_name() {
        for id in ModelId::ALL {
            assert_eq!(id.as_str().parse::<ModelId>().unwrap(), id);
        }
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(" gemini-2.5-pro ".parse::<ModelId>().unwrap(), ModelId::Gemini25Pro);
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "bad-id".parse::<ModelId>().unwrap_err();
        assert_eq!(err, UnknownModelId("bad-id".into()));
        assert_eq!(err.to_string(), "unknown model identifier: bad-id");
    }

    #[test]
    fn serde_uses_api_names() {
        let json = serde_json::to_string(&ModelId::Gemini25FlashLite).unwrap();
        assert_eq!(json, "\"gemini-2.5-flash-lite\"");
        let parsed: ModelId = serde_json::from_str("\"gemini-flash-lite-latest\"").unwrap();
        assert_eq!(parsed, ModelId::FlashLiteLatest);
    }
}
