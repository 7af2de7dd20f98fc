pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use http::HttpBackend;
pub use types::*;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Backend returned HTTP {0}")]
    Status(u16),
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid backend URL {0}")]
    Url(String),
}

/// The backend endpoints the search pages talk to.
#[async_trait]
pub trait Backend: Send + Sync + 'static {
    async fn movie_autocomplete(&self, query: &str) -> Result<MovieSuggestions, ApiError>;

    async fn movie_details(&self, movie_id: i64) -> Result<MovieDetailsResponse, ApiError>;

    async fn recommendations(&self, movie_id: i64) -> Result<RecommendationsResponse, ApiError>;

    async fn actor_autocomplete(&self, query: &str) -> Result<ActorSuggestionsResponse, ApiError>;

    async fn actor_details(&self, actor_name: &str) -> Result<ActorDetailsResponse, ApiError>;
}
