use std::env;

const BASE_URL_ENV: &str = "SPLITWELL_API_BASE_URL";

/// Backend endpoint configuration.
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let base_url = env::var(BASE_URL_ENV).expect("SPLITWELL_API_BASE_URL is not set");

        Self { base_url }
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}
