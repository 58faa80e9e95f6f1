use std::str::FromStr;

use strum_macros::{Display, EnumString};

pub const DEFAULT_DETECTION_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_AUTH_URL: &str = "http://localhost:5000";

/// Where predictions come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DetectionMode {
    /// Upload to the prediction service.
    #[default]
    Remote,
    /// Answer from the built-in catalog without touching the network.
    Catalog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub detection_url: String,
    pub auth_url: String,
    pub mode: DetectionMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            detection_url: DEFAULT_DETECTION_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            mode: DetectionMode::Remote,
        }
    }
}

impl AppConfig {
    /// Builds the config from optional raw values, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_values(detection_url: Option<&str>, auth_url: Option<&str>, mode: Option<&str>) -> Self {
        let mode = match mode.map(str::trim).filter(|m| !m.is_empty()) {
            None => DetectionMode::default(),
            Some(raw) => DetectionMode::from_str(&raw.to_lowercase()).unwrap_or_else(|_| {
                log::warn!("Unknown detection mode {:?}, using {}", raw, DetectionMode::default());
                DetectionMode::default()
            }),
        };

        Self {
            detection_url: base_url(detection_url, DEFAULT_DETECTION_URL),
            auth_url: base_url(auth_url, DEFAULT_AUTH_URL),
            mode,
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.auth_url)
    }

    pub fn history_url(&self) -> String {
        format!("{}/auth/history", self.auth_url)
    }

    pub fn user_history_url(&self, user_id: &impl std::fmt::Display) -> String {
        format!("{}/auth/history/{}", self.auth_url, user_id)
    }
}

fn base_url(value: Option<&str>, default: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserId;

    #[test]
    fn unset_values_use_defaults() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn trims_trailing_slashes() {
        let config = AppConfig::from_values(Some("https://detect.example/"), Some("https://auth.example//"), None);
        assert_eq!(config.detection_url, "https://detect.example");
        assert_eq!(config.login_url(), "https://auth.example/auth/login");
    }

    #[test]
    fn parses_mode_case_insensitively() {
        assert_eq!(AppConfig::from_values(None, None, Some("Catalog")).mode, DetectionMode::Catalog);
        assert_eq!(AppConfig::from_values(None, None, Some("remote")).mode, DetectionMode::Remote);
        assert_eq!(AppConfig::from_values(None, None, Some("offline")).mode, DetectionMode::Remote);
    }

    #[test]
    fn history_urls() {
        let config = AppConfig::default();
        assert_eq!(config.history_url(), "http://localhost:5000/auth/history");
        assert_eq!(
            config.user_history_url(&UserId::Number(12)),
            "http://localhost:5000/auth/history/12"
        );
    }
}
