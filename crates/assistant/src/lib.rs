//! Portfolio chat assistant
//!
//! Owns the visitor-facing transcript and the (lazily opened) model session:
//! - builds the system instruction from the portfolio content
//! - opens at most one session, retrying on the next message after a failure
//! - turns missing keys and network failures into fixed assistant replies

pub mod credentials;
pub mod prompts;

pub use credentials::ApiKeyResolver;
pub use prompts::get_system_instruction;

use parking_lot::Mutex;
use providers::chat::{ChatConfig, ChatConnector, ChatSession};
use shared::agent_api::ChatMessage;
use shared::content::Portfolio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const KEY_MISSING_REPLY: &str =
    "API Key is missing. Please set PORTFOLIO_API_KEY at build time or API_KEY at runtime.";
pub const CONNECTION_TROUBLE_REPLY: &str =
    "I'm having trouble connecting right now. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Absent,
    Initializing,
    Ready,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("API key is missing")]
    MissingKey,

    #[error("Failed to open chat session: {0}")]
    Connect(#[from] anyhow::Error),
}

/// Clears the loading flag however `send` exits
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct ChatSessionFlow {
    connector: Arc<dyn ChatConnector>,
    credentials: ApiKeyResolver,
    portfolio: Portfolio,
    model: String,
    session: tokio::sync::Mutex<Option<Arc<dyn ChatSession>>>,
    state: Mutex<SessionState>,
    transcript: Mutex<Vec<ChatMessage>>,
    loading: AtomicBool,
}

impl ChatSessionFlow {
    pub fn new(
        connector: Arc<dyn ChatConnector>,
        credentials: ApiKeyResolver,
        portfolio: Portfolio,
        model: impl Into<String>,
    ) -> Self {
        let greeting = format!(
            "Hi there! I'm {}'s AI assistant. Ask me anything about their projects, skills, or experience.",
            portfolio.personal.first_name()
        );
        Self {
            connector,
            credentials,
            portfolio,
            model: model.into(),
            session: tokio::sync::Mutex::new(None),
            state: Mutex::new(SessionState::Absent),
            transcript: Mutex::new(vec![ChatMessage::assistant(greeting)]),
            loading: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> SessionState {
        *self.state.lock()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Snapshot of the conversation so far
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.lock().clone()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Return the open session, opening it first if needed.
    ///
    /// Concurrent callers queue behind one initializer; a failure leaves the
    /// session absent so the next call tries again.
    pub async fn ensure_session(&self) -> Result<Arc<dyn ChatSession>, SessionError> {
        let mut slot = self.session.lock().await;
        if let Some(session) = slot.as_ref() {
            return Ok(session.clone());
        }

        *self.state.lock() = SessionState::Initializing;
        let result = self.open_session().await;
        match &result {
            Ok(session) => {
                *slot = Some(session.clone());
                *self.state.lock() = SessionState::Ready;
            }
            Err(e) => {
                tracing::error!(error = %e, "chat session not available");
                *self.state.lock() = SessionState::Absent;
            }
        }
        result
    }

    async fn open_session(&self) -> Result<Arc<dyn ChatSession>, SessionError> {
        let api_key = self.credentials.resolve().ok_or_else(|| {
            tracing::error!(
                "API key is missing. Set {} at build time or {} at runtime.",
                credentials::BUILD_TIME_VAR,
                credentials::RUNTIME_VAR
            );
            SessionError::MissingKey
        })?;

        let config = ChatConfig {
            api_key,
            model: self.model.clone(),
            system_instruction: get_system_instruction(&self.portfolio),
        };
        Ok(self.connector.connect(config).await?)
    }

    /// Post a visitor message and wait for the assistant's answer.
    ///
    /// Returns `None` (and records nothing) for blank text or while another
    /// reply is still pending. Otherwise the user turn and exactly one
    /// assistant turn are appended, and the assistant text is returned.
    pub async fn send(&self, text: &str) -> Option<String> {
        let message = text.trim();
        if message.is_empty() {
            return None;
        }
        if self.loading.swap(true, Ordering::AcqRel) {
            tracing::debug!("ignoring message while a reply is pending");
            return None;
        }
        let _loading = LoadingGuard(&self.loading);

        self.transcript.lock().push(ChatMessage::user(message));

        let reply = match self.ensure_session().await {
            Ok(session) => match session.send_message(message).await {
                Ok(reply) => reply,
                Err(e) => {
                    tracing::error!(error = %e, "chat error");
                    CONNECTION_TROUBLE_REPLY.to_string()
                }
            },
            Err(SessionError::MissingKey) => KEY_MISSING_REPLY.to_string(),
            Err(SessionError::Connect(_)) => CONNECTION_TROUBLE_REPLY.to_string(),
        };

        self.transcript
            .lock()
            .push(ChatMessage::assistant(reply.clone()));
        Some(reply)
    }
}
