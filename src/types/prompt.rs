//! Prompt values accepted by [`generate_prompt`](crate::traits::LanguageModel::generate_prompt).
//!
//! A prompt value is anything that can be flattened into the plain string a
//! completion model receives.

use serde::{Deserialize, Serialize};

/// Something that can be rendered into a single prompt string.
pub trait PromptValue: Send + Sync {
    fn to_prompt_string(&self) -> String;
}

/// A plain string prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringPromptValue(pub String);

impl PromptValue for StringPromptValue {
    fn to_prompt_string(&self) -> String {
        self.0.clone()
    }
}

impl PromptValue for String {
    fn to_prompt_string(&self) -> String {
        self.clone()
    }
}

impl PromptValue for &str {
    fn to_prompt_string(&self) -> String {
        (*self).to_string()
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    /// Prefix used when a conversation is flattened into one prompt.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::User => "Human",
            Self::Assistant => "AI",
        }
    }
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// A conversation rendered as `Role: content` lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatPromptValue(pub Vec<ChatMessage>);

impl PromptValue for ChatPromptValue {
    fn to_prompt_string(&self) -> String {
        self.0
            .iter()
            .map(|m| format!("{}: {}", m.role.prefix(), m.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_prompt_value_flattens_with_role_prefixes() {
        let value = ChatPromptValue(vec![
            ChatMessage::system("be brief"),
            ChatMessage::user("hi"),
            ChatMessage::assistant("hello"),
        ]);
        assert_eq!(
            value.to_prompt_string(),
            "System: be brief\nHuman: hi\nAI: hello"
        );
    }

    #[test]
    fn string_values_render_verbatim() {
        assert_eq!(StringPromptValue("abc".into()).to_prompt_string(), "abc");
        assert_eq!("xyz".to_prompt_string(), "xyz");
    }
}
