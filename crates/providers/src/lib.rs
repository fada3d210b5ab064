//! Outbound integrations: the Gemini chat API and the FormSubmit relay.

pub mod chat;
pub mod formsubmit;
pub mod gemini;

pub use chat::{ApiKey, ChatConfig, ChatConnector, ChatSession};
pub use formsubmit::{ContactPayload, FormRelay, FormSubmitRelay};
pub use gemini::{GeminiChat, GeminiClient, GeminiConnector};

/// Loopback HTTP server for exercising the real clients
#[cfg(test)]
pub(crate) mod test_server {
    use std::io::Read;
    use std::thread::JoinHandle;

    #[derive(Debug)]
    pub struct CapturedRequest {
        pub method: String,
        pub url: String,
        pub headers: Vec<(String, String)>,
        pub body: String,
    }

    impl CapturedRequest {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        }
    }

    /// Answers one request per canned `(status, body)` pair, then stops
    pub fn serve(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<CapturedRequest>>) {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();

        let handle = std::thread::spawn(move || {
            let mut captured = Vec::new();
            for (status, body) in responses {
                let mut request = server.recv().unwrap();
                let mut content = String::new();
                request.as_reader().read_to_string(&mut content).unwrap();
                captured.push(CapturedRequest {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    headers: request
                        .headers()
                        .iter()
                        .map(|h| (h.field.to_string(), h.value.to_string()))
                        .collect(),
                    body: content,
                });

                let header =
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .unwrap();
                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(header);
                request.respond(response).unwrap();
            }
            captured
        });

        (format!("http://{}", addr), handle)
    }
}
