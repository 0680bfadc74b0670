use serde::Deserialize;

pub const DEFAULT_COUNTDOWN_SECS: u32 = 60;
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1_000;
pub const DEFAULT_STORAGE_KEY: &str = "verificationCode";

/// Timings and storage key for the login form. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    /// Cooldown before another code may be requested
    pub countdown_secs: u32,
    /// Simulated latency between the success dialog and clearing the code
    pub submit_delay_ms: u32,
    /// Key of the stored code in the browser's local storage
    pub storage_key: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl LoginConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_contract() {
        let config = LoginConfig::default();
        assert_eq!(config.countdown_secs, 60);
        assert_eq!(config.submit_delay_ms, 1000);
        assert_eq!(config.storage_key, "verificationCode");
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config = LoginConfig::from_json(r#"{ "countdown_secs": 5 }"#).expect("should parse");
        assert_eq!(config.countdown_secs, 5);
        assert_eq!(config.submit_delay_ms, DEFAULT_SUBMIT_DELAY_MS);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = LoginConfig::from_json(r#"{ "countdown_secs": "soon" }"#).expect_err("must fail");
        assert!(err.is_data());
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = LoginConfig::from_json(r#"{ "submit_delay_ms": 10"#).expect_err("must fail");
        assert!(err.is_eof());
        let err = LoginConfig::from_json("not json").expect_err("must fail");
        assert!(err.is_syntax());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(
            LoginConfig::from_json("{}").expect("should parse"),
            LoginConfig::default()
        );
    }
}
