//! Outbound link builders: WhatsApp deep link, mail, phone, maps, repositories.

use std::path::Path;

const WHATSAPP_WEB: &str = "https://web.whatsapp.com/";

/// Keep only ASCII digits, the format wa.me expects (country code included)
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Pre-filled greeting sent through WhatsApp
pub fn whatsapp_message(owner_first_name: &str, message: &str) -> String {
    let body = if message.is_empty() {
        String::new()
    } else {
        format!("Message: {}\n\n", message)
    };
    format!(
        "Hi! {}...\n\nI visited your portfolio and would like to discuss a potential project.\n\n{}Looking forward to hearing from you!\n\nBest regards,",
        owner_first_name, body
    )
}

/// wa.me link for the owner's phone, or the web client when there are no digits
pub fn whatsapp_link(phone: &str, owner_first_name: &str, message: &str) -> String {
    let digits = phone_digits(phone);
    if digits.is_empty() {
        return WHATSAPP_WEB.to_string();
    }
    format!(
        "https://wa.me/{}?text={}",
        digits,
        urlencoding::encode(&whatsapp_message(owner_first_name, message))
    )
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{}", email)
}

pub fn tel_link(phone: &str) -> String {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", compact)
}

pub fn maps_link(location: &str) -> String {
    format!(
        "https://maps.google.com/maps?q={}",
        urlencoding::encode(location)
    )
}

/// Repository references may omit the scheme ("github.com/user/repo.git")
pub fn repository_url(reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        reference.to_string()
    } else {
        format!("https://{}", reference)
    }
}

/// Where to open the CV from: URLs pass through, file references are
/// resolved against `asset_root`
pub fn resume_location(asset_root: &Path, reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        reference.to_string()
    } else {
        asset_root.join(reference).display().to_string()
    }
}
