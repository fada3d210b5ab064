//! Portfolio services: theme preference, contact form flow, outbound links.

pub mod contact;
pub mod links;
pub mod theme;

pub use contact::{ContactFlow, ContactForm, SubmitStatus};
pub use theme::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, StyleRoot, ThemeController};
