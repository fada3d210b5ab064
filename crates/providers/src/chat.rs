//! Conversational AI seams.
//!
//! A [`ChatConnector`] turns credentials plus a system instruction into a live
//! [`ChatSession`]. Sessions keep their own history, so callers only ever send
//! the newest user message.

use anyhow::Result;
use std::fmt;
use std::sync::Arc;
use zeroize::Zeroizing;

/// API key kept in a buffer that is wiped on drop
#[derive(Clone)]
pub struct ApiKey(Zeroizing<String>);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Zeroizing::new(key.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Everything needed to open a session
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_key: ApiKey,
    pub model: String,
    pub system_instruction: String,
}

/// An open conversation with a remote model
#[async_trait::async_trait]
pub trait ChatSession: Send + Sync {
    /// Send one user message and return the model's reply text
    async fn send_message(&self, message: &str) -> Result<String>;
}

/// Factory for chat sessions
#[async_trait::async_trait]
pub trait ChatConnector: Send + Sync {
    async fn connect(&self, config: ChatConfig) -> Result<Arc<dyn ChatSession>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_is_redacted() {
        let key = ApiKey::new("secret-value");
        assert_eq!(key.expose(), "secret-value");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");

        let config = ChatConfig {
            api_key: key,
            model: "gemini-2.0-flash".into(),
            system_instruction: String::new(),
        };
        assert!(!format!("{:?}", config).contains("secret-value"));
    }
}
