use std::time::Duration;

pub struct Config {
    pub request_timeout: Duration,
    pub user_agent: Option<String>,
    pub default_suffix: Option<String>,
    pub max_expirations: Option<usize>,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let timeout_ms: u64 = std::env::var("QD_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let user_agent = non_empty_var("QD_USER_AGENT");
        let default_suffix = non_empty_var("QD_DEFAULT_SUFFIX");
        let max_expirations = non_empty_var("QD_MAX_EXPIRATIONS").and_then(|v| v.parse().ok());
        let log_format = std::env::var("QD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        Self {
            request_timeout: Duration::from_millis(timeout_ms),
            user_agent,
            default_suffix,
            max_expirations,
            log_format,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
