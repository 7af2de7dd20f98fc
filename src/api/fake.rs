//! In-memory backend for controller tests.
//!
//! Calls are keyed as `endpoint?value` (for example `movie_details?27205`).
//! A key with no canned response fails with HTTP 500.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use super::{
    ActorDetailsResponse, ActorSuggestionsResponse, ApiError, Backend, MovieDetailsResponse,
    MovieSuggestions, RecommendationsResponse,
};

#[derive(Default)]
pub(crate) struct FakeBackend {
    responses: Mutex<HashMap<String, Value>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, key: &str, value: Value) {
        self.responses.lock().insert(key.to_string(), value);
    }

    pub(crate) fn delay(&self, key: &str, delay: Duration) {
        self.delays.lock().insert(key.to_string(), delay);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub(crate) fn count(&self, endpoint: &str) -> usize {
        let prefix = format!("{}?", endpoint);
        self.calls
            .lock()
            .iter()
            .filter(|c| c.starts_with(&prefix))
            .count()
    }

    async fn answer<T: DeserializeOwned>(&self, key: String) -> Result<T, ApiError> {
        self.calls.lock().push(key.clone());

        let delay = self.delays.lock().get(&key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let value = self.responses.lock().get(&key).cloned();
        match value {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Err(ApiError::Status(500)),
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn movie_autocomplete(&self, query: &str) -> Result<MovieSuggestions, ApiError> {
        self.answer(format!("movie_autocomplete?{}", query)).await
    }

    async fn movie_details(&self, movie_id: i64) -> Result<MovieDetailsResponse, ApiError> {
        self.answer(format!("movie_details?{}", movie_id)).await
    }

    async fn recommendations(&self, movie_id: i64) -> Result<RecommendationsResponse, ApiError> {
        self.answer(format!("recommendations?{}", movie_id)).await
    }

    async fn actor_autocomplete(&self, query: &str) -> Result<ActorSuggestionsResponse, ApiError> {
        self.answer(format!("actor_autocomplete?{}", query)).await
    }

    async fn actor_details(&self, actor_name: &str) -> Result<ActorDetailsResponse, ApiError> {
        self.answer(format!("actor_details?{}", actor_name)).await
    }
}
