use crate::constants::NWS_API_BASE;
use crate::messages::Language;

/// Runtime settings for the weather service
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the alert and point endpoints are resolved against
    pub base_url: String,
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: NWS_API_BASE.to_string(),
            language: Language::default(),
        }
    }
}

impl Config {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn alerts_url(&self, region_code: &str) -> String {
        format!("{}/alerts/active?area={}", self.base_url, region_code)
    }

    pub fn points_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}/points/{},{}", self.base_url, latitude, longitude)
    }
}
