pub mod api;
pub mod config;
pub mod controller;
pub mod dom;
pub mod image;
pub mod render;

use std::sync::Arc;
use tracing::info;

use api::{Backend, HttpBackend};
use controller::{Autocomplete, RecommendationHandles, SearchHandles, SuggestionSource};
use dom::{MemoryInput, MemoryRegion, TextInput};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Backend error: {0}")]
    Api(#[from] api::ApiError),
    #[error("Harness error: {0}")]
    Harness(String),
}

/// Which page the harness drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Movie,
    Recommendations,
    Actor,
}

/// In-memory elements of one page, named as on the real page.
struct Elements {
    input: MemoryInput,
    regions: Vec<(&'static str, MemoryRegion)>,
}

impl Elements {
    fn region(&mut self, name: &'static str) -> MemoryRegion {
        let region = MemoryRegion::new();
        self.regions.push((name, region.clone()));
        region
    }

    fn print(&self) {
        println!("[search] {}", self.input.value());
        for (name, region) in &self.regions {
            if region.is_visible() {
                println!("[{}] display: {}", name, region.display().as_css());
                println!("{}", region.html());
            }
        }
    }
}

/// Drives one page against a live backend: types `query`, shows the
/// dropdown, presses Enter and prints every visible region.
pub async fn run(config: config::Config, kind: PageKind, query: &str) -> Result<(), Error> {
    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::from_config(&config)?);
    info!("Using backend {}", config.backend.base_url);

    let mut elements = Elements {
        input: MemoryInput::new(),
        regions: Vec::new(),
    };
    let handles = SearchHandles {
        input: Arc::new(elements.input.clone()),
        suggestions: Arc::new(elements.region("suggestions")),
        details: Arc::new(elements.region(match kind {
            PageKind::Actor => "actorDetails",
            _ => "movieDetails",
        })),
    };

    match kind {
        PageKind::Movie => {
            let page = controller::MoviePage::new(backend, &config, handles);
            drive(&page, &elements, query).await?;
        }
        PageKind::Recommendations => {
            let recs = RecommendationHandles {
                recommendations: Arc::new(elements.region("movieRecommendations")),
                loading: Arc::new(elements.region("loading-animation")),
            };
            let page = controller::MoviePage::with_recommendations(backend, &config, handles, recs);
            drive(&page, &elements, query).await?;
        }
        PageKind::Actor => {
            let movies = Arc::new(elements.region("actorMovies"));
            let page = controller::ActorPage::new(backend, &config, handles, movies);
            drive(&page, &elements, query).await?;
        }
    }

    elements.print();
    Ok(())
}

async fn drive<S: SuggestionSource>(
    page: &Arc<Autocomplete<S>>,
    elements: &Elements,
    query: &str,
) -> Result<(), Error> {
    let mut typed = String::new();
    let mut pending = Vec::new();
    for c in query.chars() {
        typed.push(c);
        elements.input.set_value(&typed);
        pending.extend(page.on_input());
    }
    for task in pending {
        task.await
            .map_err(|e| Error::Harness(format!("debounce task failed: {}", e)))?;
    }

    elements.print();
    if page.suggestions().is_empty() {
        info!("No suggestions for {:?}", query);
        return Ok(());
    }

    page.on_enter().await;
    Ok(())
}
