use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{Autocomplete, Generation, Outcome, SearchHandles, SuggestionSource};
use crate::api::{ActorSuggestion, ApiError, Backend};
use crate::config::Config;
use crate::dom::{Display, Region};
use crate::render::{self, RenderError};

/// The actor search page: details plus a grid of the actor's movies.
pub type ActorPage = Autocomplete<ActorSource>;

impl ActorPage {
    pub fn new(
        backend: Arc<dyn Backend>,
        config: &Config,
        handles: SearchHandles,
        filmography: Arc<dyn Region>,
    ) -> Arc<Self> {
        let source = ActorSource {
            backend: Arc::clone(&backend),
            details: ActorDetails::new(backend, Arc::clone(&handles.details), filmography, config),
        };
        Arc::new(Self::from_source(source, &handles, config.debounce()))
    }
}

pub struct ActorSource {
    backend: Arc<dyn Backend>,
    details: ActorDetails,
}

#[async_trait]
impl SuggestionSource for ActorSource {
    type Item = ActorSuggestion;

    fn noun(&self) -> &'static str {
        "actors"
    }

    async fn suggest(&self, query: &str) -> Result<Option<Vec<ActorSuggestion>>, ApiError> {
        let response = self.backend.actor_autocomplete(query).await?;
        Ok(response.into_suggestions())
    }

    fn label(&self, item: &ActorSuggestion) -> String {
        item.name.clone()
    }

    fn render(&self, items: &[ActorSuggestion]) -> Result<String, RenderError> {
        render::actor_suggestions(items)
    }

    async fn select(&self, item: ActorSuggestion) {
        self.details.show(&item.name).await;
    }
}

/// Renders an actor's profile and filmography.
pub struct ActorDetails {
    backend: Arc<dyn Backend>,
    region: Arc<dyn Region>,
    filmography: Arc<dyn Region>,
    fallback_image: String,
    generation: Generation,
}

impl ActorDetails {
    pub fn new(
        backend: Arc<dyn Backend>,
        region: Arc<dyn Region>,
        filmography: Arc<dyn Region>,
        config: &Config,
    ) -> Self {
        Self {
            backend,
            region,
            filmography,
            fallback_image: config.images.fallback.clone(),
            generation: Generation::default(),
        }
    }

    /// On failure both regions keep whatever they showed before.
    pub async fn show(&self, actor_name: &str) -> Outcome {
        let generation = self.generation.next();
        let result = self.backend.actor_details(actor_name).await;

        if !self.generation.is_current(generation) {
            debug!(actor = %actor_name, "discarding stale actor details");
            return Outcome::Superseded;
        }

        let actor = match result.map(|r| r.into_actor()) {
            Ok(Some(actor)) => actor,
            Ok(None) => {
                warn!(actor = %actor_name, "backend has no details for actor");
                return Outcome::Failed;
            }
            Err(e) => {
                warn!(actor = %actor_name, error = %e, "failed to fetch actor details");
                return Outcome::Failed;
            }
        };

        let rendered = render::actor_detail(&actor, &self.fallback_image).and_then(|profile| {
            let movies = render::filmography(&actor.movies, &self.fallback_image)?;
            Ok((profile, movies))
        });

        match rendered {
            Ok((profile, movies)) => {
                self.region.set_html(profile);
                self.region.set_display(Display::Block);
                self.filmography.set_html(movies);
                self.filmography.set_display(Display::Grid);
                Outcome::Rendered
            }
            Err(e) => {
                warn!(actor = %actor_name, error = %e, "failed to render actor details");
                Outcome::Failed
            }
        }
    }
}
