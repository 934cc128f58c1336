/// OAuth 1.0a user-context credentials for the social-trends provider.
///
/// Supplied out-of-band (env vars or a secret store) and handed to the
/// social client explicitly; nothing reads these from global state at
/// request time.
#[derive(Clone, PartialEq, Eq)]
pub struct TwitterCredentials {
    pub api_key: String,
    pub api_key_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl std::fmt::Debug for TwitterCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterCredentials")
            .field("api_key", &"[redacted]")
            .field("api_key_secret", &"[redacted]")
            .field("access_token", &"[redacted]")
            .field("access_token_secret", &"[redacted]")
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub default_geo: String,
    pub host_language: String,
    pub tz_offset_minutes: i32,
    pub twitter: Option<TwitterCredentials>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("default_geo", &self.default_geo)
            .field("host_language", &self.host_language)
            .field("tz_offset_minutes", &self.tz_offset_minutes)
            .field("twitter", &self.twitter.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_credentials() {
        let creds = TwitterCredentials {
            api_key: "key-123".to_string(),
            api_key_secret: "secret-456".to_string(),
            access_token: "token-789".to_string(),
            access_token_secret: "token-secret-000".to_string(),
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("key-123"));
        assert!(!rendered.contains("secret-456"));
        assert!(!rendered.contains("token-789"));
        assert!(rendered.contains("[redacted]"));
    }
}
