//! Application state: theme, contact form, chat panel and the background runtime
//!
//! Network work runs on one shared tokio runtime. Chat results land in the
//! [`ChatSessionFlow`] transcript; contact results come back over a channel
//! that the UI polls each frame.

use assistant::{ApiKeyResolver, ChatSessionFlow};
use providers::{FormRelay, FormSubmitRelay, GeminiConnector};
use services::{
    ContactFlow, ContactForm, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore,
    ThemeController,
};
use shared::content::Portfolio;
use shared::settings::PortfolioSettings;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::style::EguiRoot;

/// Page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    /// Sections reachable from the navigation bar
    pub const NAV: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

pub struct AppState {
    pub portfolio: Portfolio,
    pub settings: PortfolioSettings,
    pub theme: ThemeController,
    pub contact: ContactForm,
    pub chat: Arc<ChatSessionFlow>,
    pub chat_open: bool,
    pub chat_input: String,
    /// Section the next frame should scroll to
    pub scroll_to: Option<Section>,
    pub email_copied_at: Option<Instant>,
    contact_flow: Arc<ContactFlow>,
    contact_rx: Option<Receiver<bool>>,
    runtime: tokio::runtime::Runtime,
}

impl AppState {
    /// Wire the production providers from settings
    pub fn from_settings(settings: PortfolioSettings) -> anyhow::Result<Self> {
        let portfolio = Portfolio::builtin();
        let timeout = Duration::from_secs(settings.chat.timeout_secs);

        let store: Arc<dyn PreferenceStore> = match crate::utils::preferences_path() {
            Some(path) => Arc::new(FilePreferenceStore::open(path)),
            None => {
                tracing::warn!("no config directory, theme preference will not persist");
                Arc::new(MemoryPreferenceStore::new())
            }
        };

        let relay: Arc<dyn FormRelay> = Arc::new(FormSubmitRelay::new(
            &settings.contact.relay_base_url,
            timeout,
        )?);
        let contact_flow = Arc::new(ContactFlow::new(relay, portfolio.personal.email));

        let chat = Arc::new(ChatSessionFlow::new(
            Arc::new(GeminiConnector::new(settings.chat.api_base.clone(), timeout)),
            ApiKeyResolver::from_build_env(),
            portfolio,
            settings.chat.model.clone(),
        ));

        Self::new(settings, portfolio, store, contact_flow, chat)
    }

    pub fn new(
        settings: PortfolioSettings,
        portfolio: Portfolio,
        store: Arc<dyn PreferenceStore>,
        contact_flow: Arc<ContactFlow>,
        chat: Arc<ChatSessionFlow>,
    ) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("portfolio-net")
            .enable_all()
            .build()?;
        let banner = Duration::from_secs(settings.contact.success_banner_secs);

        Ok(Self {
            portfolio,
            theme: ThemeController::load(store),
            contact: ContactForm::new(banner),
            settings,
            chat,
            chat_open: false,
            chat_input: String::new(),
            scroll_to: None,
            email_copied_at: None,
            contact_flow,
            contact_rx: None,
            runtime,
        })
    }

    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme.toggle(&mut EguiRoot(ctx));
    }

    /// Validate the form and, if valid, deliver it in the background
    pub fn submit_contact(&mut self, ctx: &egui::Context) {
        let Some(payload) = self.contact.prepare() else {
            return;
        };
        let (tx, rx) = channel();
        self.contact_rx = Some(rx);

        let flow = self.contact_flow.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let delivered = flow.deliver(&payload).await;
            let _ = tx.send(delivered);
            ctx.request_repaint();
        });
    }

    /// Apply a finished delivery and fire expired banner timers.
    /// Returns how long until the next timer fires, if any is pending.
    pub fn poll_contact(&mut self, now: Instant) -> Option<Duration> {
        if let Some(rx) = &self.contact_rx {
            if let Ok(delivered) = rx.try_recv() {
                self.contact.complete(delivered, now);
                self.contact_rx = None;
            }
        }
        self.contact.tick(now);
        self.contact
            .success_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Show or hide the chat window; showing it starts the session
    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
        if self.chat_open {
            let chat = self.chat.clone();
            self.runtime.spawn(async move {
                // Failures are logged by the flow and retried on the next message
                let _ = chat.ensure_session().await;
            });
        }
    }

    /// Send the drafted chat message in the background
    pub fn send_chat(&mut self, ctx: &egui::Context) {
        if self.chat.is_loading() || self.chat_input.trim().is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.chat_input);
        let chat = self.chat.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            chat.send(&text).await;
            ctx.request_repaint();
        });
    }

    /// The CV as something `open_link` can hand to the system
    pub fn resume_location(&self) -> String {
        services::links::resume_location(
            &crate::utils::asset_root(),
            self.portfolio.personal.resume,
        )
    }

    pub fn copy_email(&mut self, ctx: &egui::Context) {
        let email = self.portfolio.personal.email.to_string();
        ctx.output_mut(|o| o.copied_text = email);
        self.email_copied_at = Some(Instant::now());
    }

    /// "Copied" feedback lasts two seconds
    pub fn email_recently_copied(&self, now: Instant) -> bool {
        self.email_copied_at
            .map_or(false, |at| now.duration_since(at) < Duration::from_secs(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use providers::{ChatConfig, ChatConnector, ChatSession, ContactPayload};
    use services::SubmitStatus;

    struct NoopRelay {
        fail: bool,
    }

    #[async_trait::async_trait]
    impl FormRelay for NoopRelay {
        async fn deliver(&self, _recipient: &str, _payload: &ContactPayload) -> Result<()> {
            if self.fail {
                anyhow::bail!("relay down")
            }
            Ok(())
        }
    }

    struct RefusingConnector;

    #[async_trait::async_trait]
    impl ChatConnector for RefusingConnector {
        async fn connect(&self, _config: ChatConfig) -> Result<Arc<dyn ChatSession>> {
            anyhow::bail!("offline")
        }
    }

    fn state_with_relay(fail: bool) -> AppState {
        let portfolio = Portfolio::builtin();
        let chat = Arc::new(ChatSessionFlow::new(
            Arc::new(RefusingConnector),
            ApiKeyResolver::new(None, "PORTFOLIO_APP_TEST_KEY_UNSET"),
            portfolio,
            "gemini-2.0-flash",
        ));
        let flow = Arc::new(ContactFlow::new(Arc::new(NoopRelay { fail }), "owner@example.com"));
        AppState::new(
            PortfolioSettings::default(),
            portfolio,
            Arc::new(MemoryPreferenceStore::new()),
            flow,
            chat,
        )
        .unwrap()
    }

    fn wait_for_contact(state: &mut AppState) {
        let started = Instant::now();
        while state.contact.is_submitting() {
            assert!(started.elapsed() < Duration::from_secs(5), "delivery never finished");
            state.poll_contact(Instant::now());
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_contact_submission_roundtrip() {
        let ctx = egui::Context::default();
        let mut state = state_with_relay(false);
        state.contact.name = "Ada".into();
        state.contact.email = "ada@example.com".into();
        state.contact.message = "Hello".into();

        state.submit_contact(&ctx);
        assert!(state.contact.is_submitting());
        wait_for_contact(&mut state);

        assert_eq!(state.contact.status(), SubmitStatus::Success);
        assert!(state.contact.name.is_empty());
        let remaining = state.poll_contact(Instant::now()).unwrap();
        assert!(remaining <= Duration::from_secs(10));
    }

    #[test]
    fn test_failed_delivery_reports_error() {
        let ctx = egui::Context::default();
        let mut state = state_with_relay(true);
        state.contact.email = "ada@example.com".into();

        state.submit_contact(&ctx);
        wait_for_contact(&mut state);
        assert_eq!(state.contact.status(), SubmitStatus::Error);
        assert_eq!(state.poll_contact(Instant::now()), None);
    }

    #[test]
    fn test_invalid_email_does_not_submit() {
        let ctx = egui::Context::default();
        let mut state = state_with_relay(false);
        state.contact.email = "nope".into();

        state.submit_contact(&ctx);
        assert!(!state.contact.is_submitting());
        assert!(state.contact.email_error().is_some());
    }

    #[test]
    fn test_chat_send_without_key_replies_in_transcript() {
        let ctx = egui::Context::default();
        let mut state = state_with_relay(false);
        state.toggle_chat();
        assert!(state.chat_open);

        state.chat_input = "hello".into();
        state.send_chat(&ctx);
        assert!(state.chat_input.is_empty());

        let started = Instant::now();
        loop {
            let transcript = state.chat.transcript();
            if transcript.len() >= 3 {
                assert_eq!(transcript[1].content, "hello");
                assert_eq!(transcript[2].content, assistant::KEY_MISSING_REPLY);
                break;
            }
            assert!(started.elapsed() < Duration::from_secs(5), "no reply");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_resume_resolves_next_to_executable() {
        let state = state_with_relay(false);
        let location = state.resume_location();
        let expected = crate::utils::asset_root()
            .join("assets")
            .join("Anurag_Kumar_Singh_Resume.pdf");
        assert_eq!(location, expected.display().to_string());
    }

    #[test]
    fn test_nav_lists_five_sections() {
        let labels: Vec<_> = Section::NAV.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["About", "Skills", "Projects", "Experience", "Contact"]);
    }
}
