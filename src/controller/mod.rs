pub mod actor;
pub mod autocomplete;
pub mod movie;
pub mod recommendations;

pub use actor::{ActorDetails, ActorPage, ActorSource};
pub use autocomplete::{Autocomplete, SuggestionSource};
pub use movie::{MovieDetails, MoviePage, MovieSource};
pub use recommendations::{RecommendationHandles, Recommendations};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::dom::{Region, TextInput};

/// The elements every search page has.
#[derive(Clone)]
pub struct SearchHandles {
    pub input: Arc<dyn TextInput>,
    pub suggestions: Arc<dyn Region>,
    pub details: Arc<dyn Region>,
}

/// How a detail fetch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    Failed,
    /// A newer request took over; nothing was written.
    Superseded,
}

/// Request counter. Work started under an older number must not touch the page.
#[derive(Debug, Default)]
pub(crate) struct Generation(AtomicU64);

impl Generation {
    pub(crate) fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::SeqCst) == generation
    }
}
