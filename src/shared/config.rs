use std::env;

/// Engine-level configuration. The only external credential is the key for
/// the recommendation generator; a missing key downgrades recommendations to
/// a no-op instead of failing.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub gemini_api_key: Option<String>,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        // Load environment variables from .env if present
        dotenvy::dotenv().ok();

        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Self { gemini_api_key }
    }

    pub fn has_recommendation_credentials(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}
