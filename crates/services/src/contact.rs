//! Contact form state and submission
//!
//! The form validates the email locally, hands a payload to a [`FormRelay`],
//! and tracks an idle/success/error status. Every success arms a banner timer
//! that later forces the status back to idle. Timers are never cancelled, so
//! an older one can end a newer banner early. Callers drive them with
//! [`ContactForm::tick`].

use providers::formsubmit::{ContactPayload, FormRelay};
use regex::Regex;
use shared::errors::FormError;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

/// How long the success banner stays up
pub const SUCCESS_BANNER: Duration = Duration::from_secs(10);

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// `local@domain.tld`, no whitespace, exactly one `@` on each side of the split
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
        .is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    email_error: Option<FormError>,
    status: SubmitStatus,
    submitting: bool,
    banner_timers: Vec<Instant>,
    banner: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(SUCCESS_BANNER)
    }
}

impl ContactForm {
    pub fn new(banner: Duration) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            email_error: None,
            status: SubmitStatus::Idle,
            submitting: false,
            banner_timers: Vec::new(),
            banner,
        }
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn email_error(&self) -> Option<&FormError> {
        self.email_error.as_ref()
    }

    /// Called whenever the user edits the email field
    pub fn clear_email_error(&mut self) {
        self.email_error = None;
    }

    pub fn validate(&mut self) -> Result<(), FormError> {
        if is_valid_email(&self.email) {
            Ok(())
        } else {
            self.email_error = Some(FormError::InvalidEmail);
            Err(FormError::InvalidEmail)
        }
    }

    /// Validate and mark the form in flight.
    ///
    /// Returns `None` when validation fails or a submission is already running;
    /// no request may be sent in that case.
    pub fn prepare(&mut self) -> Option<ContactPayload> {
        if self.submitting || self.validate().is_err() {
            return None;
        }
        self.submitting = true;
        self.status = SubmitStatus::Idle;
        Some(ContactPayload::new(&self.name, &self.email, &self.message))
    }

    /// Record the relay outcome
    pub fn complete(&mut self, delivered: bool, now: Instant) {
        self.submitting = false;
        if delivered {
            self.status = SubmitStatus::Success;
            self.name.clear();
            self.email.clear();
            self.message.clear();
            self.banner_timers.push(now + self.banner);
        } else {
            self.status = SubmitStatus::Error;
        }
    }

    /// Earliest pending banner timer
    pub fn success_deadline(&self) -> Option<Instant> {
        self.banner_timers.iter().min().copied()
    }

    /// Fire expired banner timers; each one resets the status to idle.
    /// Returns true if the status changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let pending = self.banner_timers.len();
        self.banner_timers.retain(|deadline| *deadline > now);
        if self.banner_timers.len() == pending || self.status == SubmitStatus::Idle {
            return false;
        }
        self.status = SubmitStatus::Idle;
        true
    }
}

/// Sends contact forms to the site owner through a relay
pub struct ContactFlow {
    relay: Arc<dyn FormRelay>,
    recipient: String,
}

impl ContactFlow {
    pub fn new(relay: Arc<dyn FormRelay>, recipient: impl Into<String>) -> Self {
        Self {
            relay,
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Hand one payload to the relay; failures are logged and reported as false
    pub async fn deliver(&self, payload: &ContactPayload) -> bool {
        match self.relay.deliver(&self.recipient, payload).await {
            Ok(()) => {
                tracing::info!(from = %payload.email, "contact message delivered");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "form submission failed");
                false
            }
        }
    }

    /// Validate, deliver and record the outcome in one go
    pub async fn submit(&self, form: &mut ContactForm) -> SubmitStatus {
        let Some(payload) = form.prepare() else {
            return form.status();
        };
        let delivered = self.deliver(&payload).await;
        form.complete(delivered, Instant::now());
        form.status()
    }
}
