pub mod content;
pub mod errors;

pub mod settings {
    use serde::{Deserialize, Serialize};

    fn default_chat_model() -> String {
        "gemini-2.0-flash".into()
    }

    fn default_chat_api_base() -> String {
        "https://generativelanguage.googleapis.com/v1beta".into()
    }

    fn default_timeout_secs() -> u64 {
        45
    }

    fn default_relay_base_url() -> String {
        "https://formsubmit.co/ajax/".into()
    }

    fn default_banner_secs() -> u64 {
        10
    }

    /// Chat assistant settings
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ChatSettings {
        #[serde(default = "default_chat_model")]
        pub model: String, // e.g., "gemini-2.0-flash"
        /// Root of the generative-language REST API
        #[serde(default = "default_chat_api_base")]
        pub api_base: String,
        #[serde(default = "default_timeout_secs")]
        pub timeout_secs: u64,
    }

    /// Contact form settings
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ContactSettings {
        /// Form relay base; the owner's email is appended as the last segment
        #[serde(default = "default_relay_base_url")]
        pub relay_base_url: String,
        /// How long the "sent" banner stays up
        #[serde(default = "default_banner_secs")]
        pub success_banner_secs: u64,
    }

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct PortfolioSettings {
        #[serde(default)]
        pub chat: ChatSettings,
        #[serde(default)]
        pub contact: ContactSettings,
    }

    impl Default for ChatSettings {
        fn default() -> Self {
            Self {
                model: default_chat_model(),
                api_base: default_chat_api_base(),
                timeout_secs: default_timeout_secs(),
            }
        }
    }

    impl Default for ContactSettings {
        fn default() -> Self {
            Self {
                relay_base_url: default_relay_base_url(),
                success_banner_secs: default_banner_secs(),
            }
        }
    }
}

pub mod agent_api {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Role {
        User,
        Assistant,
    }

    impl Role {
        pub fn as_str(&self) -> &'static str {
            match self {
                Role::User => "user",
                Role::Assistant => "assistant",
            }
        }
    }

    /// One turn of the chat transcript
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ChatMessage {
        pub role: Role,
        pub content: String,
        /// Local wall-clock time the turn was recorded ("HH:MM")
        #[serde(default)]
        pub timestamp: String,
    }

    impl ChatMessage {
        pub fn new(role: Role, content: impl Into<String>) -> Self {
            Self {
                role,
                content: content.into(),
                timestamp: chrono::Local::now().format("%H:%M").to_string(),
            }
        }

        pub fn user(content: impl Into<String>) -> Self {
            Self::new(Role::User, content)
        }

        pub fn assistant(content: impl Into<String>) -> Self {
            Self::new(Role::Assistant, content)
        }

        pub fn is_user(&self) -> bool {
            self.role == Role::User
        }
    }
}

#[cfg(test)]
mod tests {
    use super::agent_api::{ChatMessage, Role};
    use super::settings::PortfolioSettings;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let json = r#"{ "chat": { "model": "gemini-1.5-flash" } }"#;
        let settings: PortfolioSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.chat.model, "gemini-1.5-flash");
        assert_eq!(settings.chat.timeout_secs, 45);
        assert_eq!(settings.contact.relay_base_url, "https://formsubmit.co/ajax/");
        assert_eq!(settings.contact.success_banner_secs, 10);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = ChatMessage::assistant("hi");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["role"], "assistant");
        assert_eq!(msg.timestamp.len(), 5);
        assert_eq!(Role::User.as_str(), "user");
    }
}
