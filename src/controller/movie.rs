use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{Autocomplete, Generation, Outcome, RecommendationHandles, Recommendations, SearchHandles, SuggestionSource};
use crate::api::{ApiError, Backend, MovieSuggestion};
use crate::config::Config;
use crate::dom::{Display, Region};
use crate::render::{self, RenderError};

/// The movie search page: a dropdown over `/get_movie_autocomplete`.
pub type MoviePage = Autocomplete<MovieSource>;

impl MoviePage {
    /// Movie data page: search and details only.
    pub fn new(backend: Arc<dyn Backend>, config: &Config, handles: SearchHandles) -> Arc<Self> {
        let source = MovieSource {
            backend: Arc::clone(&backend),
            details: MovieDetails::new(backend, Arc::clone(&handles.details), config),
            recommendations: None,
        };
        Arc::new(Self::from_source(source, &handles, config.debounce()))
    }

    /// Recommendation page: details are followed by a recommendation grid.
    pub fn with_recommendations(
        backend: Arc<dyn Backend>,
        config: &Config,
        handles: SearchHandles,
        recommendations: RecommendationHandles,
    ) -> Arc<Self> {
        let source = MovieSource {
            backend: Arc::clone(&backend),
            details: MovieDetails::new(Arc::clone(&backend), Arc::clone(&handles.details), config),
            recommendations: Some(Recommendations::new(backend, recommendations, config)),
        };
        Arc::new(Self::from_source(source, &handles, config.debounce()))
    }
}

pub struct MovieSource {
    backend: Arc<dyn Backend>,
    details: MovieDetails,
    recommendations: Option<Recommendations>,
}

#[async_trait]
impl SuggestionSource for MovieSource {
    type Item = MovieSuggestion;

    fn noun(&self) -> &'static str {
        "movies"
    }

    async fn suggest(&self, query: &str) -> Result<Option<Vec<MovieSuggestion>>, ApiError> {
        let response = self.backend.movie_autocomplete(query).await?;
        Ok(Some(response.suggestions))
    }

    fn label(&self, item: &MovieSuggestion) -> String {
        item.label()
    }

    fn render(&self, items: &[MovieSuggestion]) -> Result<String, RenderError> {
        render::movie_suggestions(items)
    }

    async fn select(&self, item: MovieSuggestion) {
        let Some(recommendations) = &self.recommendations else {
            self.details.show(item.id).await;
            return;
        };

        let pending = recommendations.start();
        match self.details.show(item.id).await {
            Outcome::Rendered => recommendations.load(pending, item.id).await,
            Outcome::Failed => recommendations.abandon(pending),
            Outcome::Superseded => {}
        }
    }
}

/// Renders one movie into the details region.
pub struct MovieDetails {
    backend: Arc<dyn Backend>,
    region: Arc<dyn Region>,
    fallback_image: String,
    generation: Generation,
}

impl MovieDetails {
    pub fn new(backend: Arc<dyn Backend>, region: Arc<dyn Region>, config: &Config) -> Self {
        Self {
            backend,
            region,
            fallback_image: config.images.fallback.clone(),
            generation: Generation::default(),
        }
    }

    /// On failure the region keeps whatever it showed before.
    pub async fn show(&self, movie_id: i64) -> Outcome {
        let generation = self.generation.next();
        let result = self.backend.movie_details(movie_id).await;

        if !self.generation.is_current(generation) {
            debug!(movie_id, "discarding stale movie details");
            return Outcome::Superseded;
        }

        let movie = match result.map(|r| r.into_movie()) {
            Ok(Some(movie)) => movie,
            Ok(None) => {
                warn!(movie_id, "backend has no details for movie");
                return Outcome::Failed;
            }
            Err(e) => {
                warn!(movie_id, error = %e, "failed to fetch movie details");
                return Outcome::Failed;
            }
        };

        if movie.poster_path.is_none() {
            debug!(movie_id, "no usable poster, using fallback image");
        }

        match render::movie_detail(&movie, &self.fallback_image) {
            Ok(html) => {
                self.region.set_html(html);
                self.region.set_display(Display::Block);
                Outcome::Rendered
            }
            Err(e) => {
                warn!(movie_id, error = %e, "failed to render movie details");
                Outcome::Failed
            }
        }
    }
}
