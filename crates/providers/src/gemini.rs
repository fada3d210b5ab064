use crate::chat::{ApiKey, ChatConfig, ChatConnector, ChatSession};
use anyhow::{anyhow, Result};
use parking_lot::Mutex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::agent_api::{ChatMessage, Role};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

/// Stateless `generateContent` client
pub struct GeminiClient {
    http: Client,
    api_key: ApiKey,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(api_base: &str, model: &str, api_key: ApiKey, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: Client::builder().timeout(timeout).build()?,
            api_key,
            model: model.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One round trip: prior turns plus the new message, with an optional system instruction
    pub async fn generate(
        &self,
        system_instruction: Option<&str>,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);

        let mut contents: Vec<GeminiContent> = history
            .iter()
            .map(|m| GeminiContent {
                // Gemini expects roles: "user" | "model".
                role: Some(
                    match m.role {
                        Role::User => "user",
                        Role::Assistant => "model",
                    }
                    .to_string(),
                ),
                parts: vec![GeminiPart {
                    text: m.content.clone(),
                }],
            })
            .collect();
        contents.push(GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart {
                text: message.to_string(),
            }],
        });

        let req = GeminiRequest {
            contents,
            system_instruction: system_instruction.map(|text| GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: text.to_string(),
                }],
            }),
        };

        let resp = self
            .http
            .post(url)
            .header("x-goog-api-key", self.api_key.expose())
            .json(&req)
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let body = body.trim();
            if body.is_empty() {
                return Err(anyhow!("gemini error: {}", status));
            }
            let body = if body.chars().count() > 800 {
                format!("{}...", body.chars().take(800).collect::<String>())
            } else {
                body.to_string()
            };
            return Err(anyhow!("gemini error: {}\n{}", status, body));
        }

        let body: GeminiResponse = resp.json().await?;
        let text = body
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| {
                c.parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        Ok(text)
    }
}

/// A conversation that remembers its successful turns
pub struct GeminiChat {
    id: Uuid,
    client: GeminiClient,
    system_instruction: String,
    history: Mutex<Vec<ChatMessage>>,
}

impl GeminiChat {
    pub fn new(client: GeminiClient, system_instruction: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            client,
            system_instruction,
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn history(&self) -> Vec<ChatMessage> {
        self.history.lock().clone()
    }
}

#[async_trait::async_trait]
impl ChatSession for GeminiChat {
    async fn send_message(&self, message: &str) -> Result<String> {
        let history = self.history.lock().clone();
        tracing::debug!(session = %self.id, turns = history.len(), "sending chat message");

        let reply = self
            .client
            .generate(Some(&self.system_instruction), &history, message)
            .await?;

        let mut history = self.history.lock();
        history.push(ChatMessage::user(message));
        history.push(ChatMessage::assistant(reply.clone()));
        Ok(reply)
    }
}

/// Opens [`GeminiChat`] sessions against one API root
pub struct GeminiConnector {
    api_base: String,
    timeout: Duration,
}

impl GeminiConnector {
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_base: api_base.into(),
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl ChatConnector for GeminiConnector {
    async fn connect(&self, config: ChatConfig) -> Result<Arc<dyn ChatSession>> {
        let client = GeminiClient::new(&self.api_base, &config.model, config.api_key, self.timeout)?;
        let chat = GeminiChat::new(client, config.system_instruction);
        tracing::info!(session = %chat.id(), model = %config.model, "gemini chat session opened");
        Ok(Arc::new(chat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve;

    fn reply_body(text: &str) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    fn chat_for(base: &str) -> GeminiChat {
        let client = GeminiClient::new(
            base,
            "gemini-2.0-flash",
            ApiKey::new("test-key"),
            Duration::from_secs(5),
        )
        .unwrap();
        GeminiChat::new(client, "You are a portfolio assistant.".to_string())
    }

    #[tokio::test]
    async fn test_chat_carries_history_between_turns() {
        let (base, server) = serve(vec![
            (200, reply_body("Hello!")),
            (200, reply_body("He knows Rust.")),
        ]);
        let chat = chat_for(&base);

        assert_eq!(chat.send_message("hi").await.unwrap(), "Hello!");
        assert_eq!(
            chat.send_message("what can he do?").await.unwrap(),
            "He knows Rust."
        );

        let requests = server.join().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(
            requests[0].url,
            "/models/gemini-2.0-flash:generateContent"
        );
        assert_eq!(requests[0].header("x-goog-api-key"), Some("test-key"));

        let second: serde_json::Value = serde_json::from_str(&requests[1].body).unwrap();
        let contents = second["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["parts"][0]["text"], "what can he do?");
        assert_eq!(
            second["system_instruction"]["parts"][0]["text"],
            "You are a portfolio assistant."
        );
        assert_eq!(chat.history().len(), 4);
    }

    #[tokio::test]
    async fn test_error_status_is_reported_and_not_recorded() {
        let (base, server) = serve(vec![(500, r#"{"error":"boom"}"#.to_string())]);
        let chat = chat_for(&base);

        let err = chat.send_message("hi").await.unwrap_err();
        assert!(err.to_string().contains("gemini error: 500"));
        assert!(chat.history().is_empty());
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_missing_candidates_yield_empty_text() {
        let (base, server) = serve(vec![(200, "{}".to_string())]);
        let chat = chat_for(&base);

        assert_eq!(chat.send_message("hi").await.unwrap(), "");
        server.join().unwrap();
    }
}
