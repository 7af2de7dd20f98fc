use std::sync::Arc;
use tracing::{debug, warn};

use super::Generation;
use crate::api::Backend;
use crate::config::Config;
use crate::dom::{Display, Region};
use crate::render;

#[derive(Clone)]
pub struct RecommendationHandles {
    pub recommendations: Arc<dyn Region>,
    pub loading: Arc<dyn Region>,
}

/// Card grid of related movies, fetched after a movie's details are shown.
///
/// The loading indicator goes up in [`start`](Self::start) and comes down
/// once the matching [`load`](Self::load) or [`abandon`](Self::abandon)
/// runs. Whatever the outcome, the grid region ends up visible.
pub struct Recommendations {
    backend: Arc<dyn Backend>,
    region: Arc<dyn Region>,
    loading: Arc<dyn Region>,
    fallback_image: String,
    generation: Generation,
}

impl Recommendations {
    pub fn new(backend: Arc<dyn Backend>, handles: RecommendationHandles, config: &Config) -> Self {
        Self {
            backend,
            region: handles.recommendations,
            loading: handles.loading,
            fallback_image: config.images.fallback.clone(),
            generation: Generation::default(),
        }
    }

    /// A new selection began. Returns the token for `load`/`abandon`.
    pub fn start(&self) -> u64 {
        let generation = self.generation.next();
        self.loading.set_display(Display::Flex);
        self.region.hide();
        generation
    }

    pub async fn load(&self, generation: u64, movie_id: i64) {
        let result = self.backend.recommendations(movie_id).await;

        if !self.generation.is_current(generation) {
            debug!(movie_id, "discarding stale recommendations");
            return;
        }
        self.loading.hide();

        let html = match result {
            Ok(response) if response.success => {
                match render::recommendations(&response.recommendations, &self.fallback_image) {
                    Ok(html) => html,
                    Err(e) => {
                        warn!(movie_id, error = %e, "failed to render recommendations");
                        render::RECOMMENDATIONS_ERROR.to_string()
                    }
                }
            }
            Ok(response) => {
                debug!(movie_id, message = ?response.message, "no recommendations");
                render::NO_RECOMMENDATIONS.to_string()
            }
            Err(e) => {
                warn!(movie_id, error = %e, "failed to fetch recommendations");
                render::RECOMMENDATIONS_ERROR.to_string()
            }
        };

        self.region.set_html(html);
        self.region.set_display(Display::Block);
    }

    /// The details fetch failed, so no recommendations will follow.
    pub fn abandon(&self, generation: u64) {
        if self.generation.is_current(generation) {
            self.loading.hide();
        }
    }
}
