use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::{
    ActorDetailsResponse, ActorSuggestionsResponse, ApiError, Backend, MovieDetailsResponse,
    MovieSuggestions, RecommendationsResponse,
};
use crate::config::Config;

/// reqwest-backed [`Backend`].
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url).map_err(|_| ApiError::Url(base_url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
            return Err(ApiError::Url(base_url.to_string()));
        }
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.backend.base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Builds `{base}{path}?{key}={value}` with the value percent-encoded.
fn build_url(base: &str, path: &str, key: &str, value: &str) -> String {
    format!("{}{}?{}={}", base, path, key, urlencoding::encode(value))
}

#[async_trait]
impl Backend for HttpBackend {
    async fn movie_autocomplete(&self, query: &str) -> Result<MovieSuggestions, ApiError> {
        let url = build_url(&self.base_url, "/get_movie_autocomplete", "query", query);
        self.get_json(url).await
    }

    async fn movie_details(&self, movie_id: i64) -> Result<MovieDetailsResponse, ApiError> {
        let url = build_url(
            &self.base_url,
            "/get_movie_details",
            "movie_id",
            &movie_id.to_string(),
        );
        self.get_json(url).await
    }

    async fn recommendations(&self, movie_id: i64) -> Result<RecommendationsResponse, ApiError> {
        let url = build_url(
            &self.base_url,
            "/api/recommendations/",
            "movie_id",
            &movie_id.to_string(),
        );
        self.get_json(url).await
    }

    async fn actor_autocomplete(&self, query: &str) -> Result<ActorSuggestionsResponse, ApiError> {
        let url = build_url(&self.base_url, "/get_actor_autocomplete", "query", query);
        self.get_json(url).await
    }

    async fn actor_details(&self, actor_name: &str) -> Result<ActorDetailsResponse, ApiError> {
        let url = build_url(&self.base_url, "/get_actor_details", "actor_name", actor_name);
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_encodes_value() {
        assert_eq!(
            build_url("http://h", "/get_actor_details", "actor_name", "Zoë Saldaña & co"),
            "http://h/get_actor_details?actor_name=Zo%C3%AB%20Salda%C3%B1a%20%26%20co"
        );
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let backend = HttpBackend::new("http://localhost:8000/", None).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_new_rejects_non_http_url() {
        for url in ["localhost:8000", "ftp://example.org", "file:///tmp/movies"] {
            assert!(matches!(HttpBackend::new(url, None), Err(ApiError::Url(_))), "{}", url);
        }
    }

    #[test]
    fn test_new_rejects_malformed_url() {
        for url in ["http://exa mple.org", "https://[::1", "http://", ""] {
            assert!(matches!(HttpBackend::new(url, None), Err(ApiError::Url(_))), "{}", url);
        }
    }
}
