use crate::modules::provider::infrastructure::external::HttpHandler;
use crate::shared::errors::{AppError, AppResult};
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::{
    GeminiContent, GeminiPart, GeminiRequest, GeminiResponse, GenerationConfig, ResponseSchema,
    SchemaItems,
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Library titles beyond this many add prompt weight without adding signal.
const MAX_CONTEXT_TITLES: usize = 20;
const REQUESTED_TITLES: usize = 5;

/// Client for the external recommendation generator. Consumed as a black
/// box: one request, one response, no streaming.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> AppResult<Self> {
        Self::with_base_url(api_key, GEMINI_API_BASE)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> AppResult<Self> {
        let client = HttpHandler::create_http_client(60, "Shiori-Media-Tracker/1.0")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Ask the generator for candidate titles matching the user's taste.
    ///
    /// Transport failures surface as errors; a response that is not a JSON
    /// array of strings degrades to zero titles instead, since a confused
    /// generator is not an outage.
    pub async fn generate_titles(&self, library_titles: &[String]) -> AppResult<Vec<String>> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: Self::build_prompt(library_titles),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: ResponseSchema {
                    schema_type: "ARRAY".to_string(),
                    items: SchemaItems {
                        schema_type: "STRING".to_string(),
                    },
                },
            },
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, GEMINI_MODEL);
        let response = HttpHandler::execute(
            self.client
                .post(&url)
                .query(&[("key", self.api_key.as_str())])
                .json(&request),
            "Gemini",
            "generate titles",
        )
        .await?;

        let body = response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Gemini response: {}", e)))?;

        let Some(text) = body.first_text() else {
            warn!("Gemini response carried no candidate text");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<String>>(text) {
            Ok(titles) => {
                debug!("Gemini returned {} candidate titles", titles.len());
                Ok(titles)
            }
            Err(e) => {
                warn!("Gemini returned a non-conforming payload, ignoring it: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn build_prompt(library_titles: &[String]) -> String {
        let context = library_titles
            .iter()
            .take(MAX_CONTEXT_TITLES)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "You are an expert librarian with deep knowledge of anime, manga, manhwa, \
             and books, including what fan communities recommend alongside them.\n\
             The user has the following items in their library: {}.\n\
             Task: recommend {} distinct, high-quality anime, manga, manhwa, or books \
             that fit this taste. Mix a couple of widely acclaimed picks with a few \
             hidden gems sharing the same vibe, and avoid items they already have.\n\
             Return ONLY a JSON array of title strings.",
            context, REQUESTED_TITLES
        )
    }
}
