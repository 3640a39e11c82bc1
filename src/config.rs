use serde::Deserialize;
use thiserror::Error;

use crate::countdown::DEFAULT_END_DATE;

/// Id of the optional `<script type="application/json">` block in index.html.
pub const CONFIG_SCRIPT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub edition: String,
    pub tagline: String,
    pub dates: String,
    pub venue: String,
    pub city: String,
    pub contact_email: String,
    /// ISO-8601 target for the registration countdown.
    pub countdown_end: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Global Innovation Summit".into(),
            edition: "2025".into(),
            tagline: "Connecting Global Leaders, Innovators, and Changemakers".into(),
            dates: "September 15-17, 2025".into(),
            venue: "Dubai International Convention Centre".into(),
            city: "Dubai, United Arab Emirates".into(),
            contact_email: "info@globalinnovationsummit.com".into(),
            countdown_end: DEFAULT_END_DATE.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SiteConfig {
    pub fn title(&self) -> String {
        if self.edition.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.edition)
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the embedded config block. No block means defaults; a broken
    /// block is logged and also falls back to defaults.
    pub fn load() -> Self {
        let Some(json) = read_embedded_json(CONFIG_SCRIPT_ID) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(cfg) => {
                gloo::console::log!(format!("site config loaded from #{CONFIG_SCRIPT_ID}"));
                cfg
            }
            Err(e) => {
                gloo::console::warn!(format!("{e}; using defaults"));
                Self::default()
            }
        }
    }
}

fn read_embedded_json(script_id: &str) -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let text = doc.get_element_by_id(script_id)?.text_content()?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_defaults() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(
            r#"{ "edition": "2026", "countdown_end": "2026-03-01T09:00:00Z" }"#,
        )
        .unwrap();
        assert_eq!(cfg.edition, "2026");
        assert_eq!(cfg.countdown_end, "2026-03-01T09:00:00Z");
        assert_eq!(cfg.venue, SiteConfig::default().venue);
        assert_eq!(cfg.title(), "Global Innovation Summit 2026");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("site config JSON is invalid"));
    }

    #[test]
    fn title_without_edition() {
        let cfg = SiteConfig {
            edition: String::new(),
            ..SiteConfig::default()
        };
        assert_eq!(cfg.title(), "Global Innovation Summit");
    }

    #[test]
    fn default_countdown_target() {
        assert_eq!(SiteConfig::default().countdown_end, "2025-04-01T00:00:00");
    }
}
