//! Runtime configuration read from the environment (and `.env`, via dotenvy).

use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_API_KEY_VAR: &str = "API_KEY";
/// Chat sends are handled one at a time, so a hung call would hold up every later message.
pub const DEFAULT_AI_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub app_name: String,
    pub institute: String,
    pub ai: AiSettings,
}

#[derive(Debug, Clone)]
pub struct AiSettings {
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_var: String,
    /// `None` waits for the upstream indefinitely (`AI_TIMEOUT_SECS=0`).
    pub timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let timeout = match lookup("AI_TIMEOUT_SECS").map(|raw| (raw.trim().parse::<u64>(), raw)) {
            None => Some(DEFAULT_AI_TIMEOUT),
            Some((Ok(0), _)) => None,
            Some((Ok(secs), _)) => Some(Duration::from_secs(secs)),
            Some((Err(_), raw)) => {
                log::warn!(
                    "AI_TIMEOUT_SECS={raw:?} is not a number of seconds; using {}s",
                    DEFAULT_AI_TIMEOUT.as_secs()
                );
                Some(DEFAULT_AI_TIMEOUT)
            }
        };

        Self {
            bind_addr: get("BIND_ADDR", DEFAULT_BIND_ADDR),
            app_name: get("APP_NAME", "NITJ Hub"),
            institute: get("INSTITUTE_NAME", "NITJ"),
            ai: AiSettings {
                base_url: get("GEMINI_BASE_URL", DEFAULT_BASE_URL),
                model: get("GEMINI_MODEL", DEFAULT_MODEL),
                api_key_var: get("API_KEY_VAR", DEFAULT_API_KEY_VAR),
                timeout,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.institute, "NITJ");
        assert_eq!(cfg.ai.model, DEFAULT_MODEL);
        assert_eq!(cfg.ai.api_key_var, "API_KEY");
        assert_eq!(cfg.ai.timeout, Some(DEFAULT_AI_TIMEOUT));
    }

    #[test]
    fn zero_timeout_waits_forever() {
        let cfg = AppConfig::from_lookup(lookup(&[("AI_TIMEOUT_SECS", "0")]));
        assert!(cfg.ai.timeout.is_none());
    }

    #[test]
    fn overrides_and_timeout_are_read() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("GEMINI_MODEL", "gemini-2.5-flash"),
            ("AI_TIMEOUT_SECS", "30"),
            ("INSTITUTE_NAME", "  "),
        ]));
        assert_eq!(cfg.bind_addr, "0.0.0.0:9000");
        assert_eq!(cfg.ai.model, "gemini-2.5-flash");
        assert_eq!(cfg.ai.timeout, Some(Duration::from_secs(30)));
        assert_eq!(cfg.institute, "NITJ");
    }

    #[test]
    fn bad_timeout_falls_back_to_default() {
        let cfg = AppConfig::from_lookup(lookup(&[("AI_TIMEOUT_SECS", "soon")]));
        assert_eq!(cfg.ai.timeout, Some(DEFAULT_AI_TIMEOUT));
    }
}
