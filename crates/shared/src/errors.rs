//! Error types shared between the flows and the view layer.

/// Contact form validation failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}
