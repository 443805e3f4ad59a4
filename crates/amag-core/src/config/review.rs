//! Typed review configuration and its defaults

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored setting.
///
/// Values that fit `T` are parsed; anything else (a numeric model name, a
/// timeout written as a string, an unknown CLI) is kept verbatim so that
/// reading and writing the file back never drops what the user stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Setting<T> {
    Typed(T),
    Raw(Value),
}

impl<T> Setting<T> {
    /// The parsed value, if the stored one fits the field.
    pub fn typed(&self) -> Option<&T> {
        match self {
            Self::Typed(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

impl<T> From<T> for Setting<T> {
    fn from(value: T) -> Self {
        Self::Typed(value)
    }
}

/// Assistant CLI backing a review role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewCli {
    #[serde(rename = "codex")]
    Codex,
    #[serde(rename = "claude")]
    Claude,
    #[serde(rename = "gemini-cli")]
    GeminiCli,
}

/// Reasoning effort requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThinkingLevel {
    Max,
    High,
    Medium,
    Low,
    None,
}

/// Settings for one review role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRoleConfig {
    pub cli: Setting<Option<ReviewCli>>,
    pub model: Setting<Option<String>>,
    pub thinking: Setting<ThinkingLevel>,
}

/// The `review` section: two roles and a shared timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewConfig {
    pub consultant: ReviewRoleConfig,
    pub critic: ReviewRoleConfig,
    pub timeout_ms: Setting<u64>,
}

/// Root of `.amag/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmagConfig {
    pub review: ReviewConfig,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            consultant: ReviewRoleConfig {
                cli: Some(ReviewCli::Claude).into(),
                model: Some("claude-opus-4-6".to_string()).into(),
                thinking: ThinkingLevel::Max.into(),
            },
            critic: ReviewRoleConfig {
                cli: Some(ReviewCli::Codex).into(),
                model: Some("gpt-5.2".to_string()).into(),
                thinking: ThinkingLevel::Medium.into(),
            },
            timeout_ms: Setting::Typed(120_000),
        }
    }
}

impl Default for AmagConfig {
    fn default() -> Self {
        Self {
            review: ReviewConfig::default(),
        }
    }
}
