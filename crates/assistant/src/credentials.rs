//! API key lookup: a key baked in at build time wins, otherwise the runtime
//! environment is consulted. Empty values count as missing.

use providers::chat::ApiKey;
use std::env;

pub const BUILD_TIME_VAR: &str = "PORTFOLIO_API_KEY";
pub const RUNTIME_VAR: &str = "API_KEY";

pub struct ApiKeyResolver {
    build_time: Option<ApiKey>,
    runtime_var: String,
}

impl ApiKeyResolver {
    pub fn new(build_time: Option<&str>, runtime_var: impl Into<String>) -> Self {
        Self {
            build_time: build_time
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(ApiKey::new),
            runtime_var: runtime_var.into(),
        }
    }

    /// `PORTFOLIO_API_KEY` captured by the compiler, then `API_KEY` at runtime
    pub fn from_build_env() -> Self {
        Self::new(option_env!("PORTFOLIO_API_KEY"), RUNTIME_VAR)
    }

    pub fn resolve(&self) -> Option<ApiKey> {
        if let Some(key) = &self.build_time {
            return Some(key.clone());
        }
        env::var(&self.runtime_var)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .map(ApiKey::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_time_key_wins() {
        env::set_var("PORTFOLIO_TEST_KEY_WINS", "runtime");
        let resolver = ApiKeyResolver::new(Some("baked"), "PORTFOLIO_TEST_KEY_WINS");
        assert_eq!(resolver.resolve().unwrap().expose(), "baked");
    }

    #[test]
    fn test_runtime_fallback() {
        env::set_var("PORTFOLIO_TEST_KEY_FALLBACK", " from-env ");
        let resolver = ApiKeyResolver::new(Some(""), "PORTFOLIO_TEST_KEY_FALLBACK");
        assert_eq!(resolver.resolve().unwrap().expose(), "from-env");
    }

    #[test]
    fn test_missing_everywhere() {
        env::set_var("PORTFOLIO_TEST_KEY_EMPTY", "");
        assert!(ApiKeyResolver::new(None, "PORTFOLIO_TEST_KEY_EMPTY").resolve().is_none());
        assert!(ApiKeyResolver::new(None, "PORTFOLIO_TEST_KEY_UNSET").resolve().is_none());
    }
}
