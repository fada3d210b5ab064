//! FormSubmit relay client
//!
//! Turns a contact form into an email to the site owner without running a
//! backend: the payload is POSTed as JSON to `<base>/<owner email>`.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use url::Url;

const AUTORESPONSE: &str = "Thank you for contacting me. I will get back to you shortly.";

/// JSON body understood by FormSubmit's ajax endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
    #[serde(rename = "_template")]
    pub template: &'static str,
    #[serde(rename = "_captcha")]
    pub captcha: &'static str,
    #[serde(rename = "_autoresponse")]
    pub autoresponse: &'static str,
}

impl ContactPayload {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            subject: format!("Portfolio: New Message from {}", name),
            template: "table",
            captcha: "false",
            autoresponse: AUTORESPONSE,
        }
    }
}

/// Anything that can deliver a contact payload to the owner
#[async_trait::async_trait]
pub trait FormRelay: Send + Sync {
    /// Ok only when the relay accepted the message
    async fn deliver(&self, recipient: &str, payload: &ContactPayload) -> Result<()>;
}

pub struct FormSubmitRelay {
    http: Client,
    base: Url,
}

impl FormSubmitRelay {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            http: Client::builder().timeout(timeout).build()?,
            base,
        })
    }

    /// Endpoint for one recipient address
    pub fn endpoint(&self, recipient: &str) -> Result<Url> {
        Ok(self.base.join(recipient)?)
    }
}

#[async_trait::async_trait]
impl FormRelay for FormSubmitRelay {
    async fn deliver(&self, recipient: &str, payload: &ContactPayload) -> Result<()> {
        let url = self.endpoint(recipient)?;
        let response = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(anyhow!("FormSubmit error: {} - {}", status, body.trim()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve;

    #[test]
    fn test_payload_field_names() {
        let payload = ContactPayload::new("Ada", "ada@example.com", "Hello");
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["name"], "Ada");
        assert_eq!(value["_subject"], "Portfolio: New Message from Ada");
        assert_eq!(value["_template"], "table");
        assert_eq!(value["_captcha"], "false");
        assert_eq!(value["_autoresponse"], AUTORESPONSE);
    }

    #[test]
    fn test_endpoint_appends_recipient() {
        let relay = FormSubmitRelay::new("https://formsubmit.co/ajax", Duration::from_secs(5)).unwrap();
        assert_eq!(
            relay.endpoint("owner@example.com").unwrap().as_str(),
            "https://formsubmit.co/ajax/owner@example.com"
        );
    }

    #[tokio::test]
    async fn test_deliver_posts_json() {
        let (base, server) = serve(vec![(200, r#"{"success":"true"}"#.to_string())]);
        let relay = FormSubmitRelay::new(&format!("{}/ajax/", base), Duration::from_secs(5)).unwrap();

        let payload = ContactPayload::new("Ada", "ada@example.com", "Hello there");
        relay.deliver("owner@example.com", &payload).await.unwrap();

        let requests = server.join().unwrap();
        let req = &requests[0];
        assert_eq!(req.method, "POST");
        assert_eq!(req.url, "/ajax/owner@example.com");
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.header("Accept"), Some("application/json"));

        let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(body["message"], "Hello there");
        assert_eq!(body["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let (base, server) = serve(vec![(422, "bad form".to_string())]);
        let relay = FormSubmitRelay::new(&base, Duration::from_secs(5)).unwrap();

        let payload = ContactPayload::new("Ada", "ada@example.com", "Hello");
        let err = relay.deliver("owner@example.com", &payload).await.unwrap_err();
        assert!(err.to_string().contains("422"));
        server.join().unwrap();
    }
}
