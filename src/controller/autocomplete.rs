//! Debounced search-as-you-type dropdown.
//!
//! Keystrokes arm a timer; only the last keystroke of a burst reaches the
//! backend. Every keystroke, Enter, and selection advances a generation
//! counter, and a response is only rendered if no newer event happened
//! while it was in flight.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{Generation, SearchHandles};
use crate::api::ApiError;
use crate::dom::{ClickTarget, Display, Region, TextInput};
use crate::render::{self, RenderError};

/// What a page plugs into the dropdown: where suggestions come from and
/// what happens when one is picked.
#[async_trait]
pub trait SuggestionSource: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;

    /// Plural noun for the error entry, e.g. "movies".
    fn noun(&self) -> &'static str;

    /// `Ok(None)` means the backend answered but had no suggestions to give.
    async fn suggest(&self, query: &str) -> Result<Option<Vec<Self::Item>>, ApiError>;

    /// Text written back into the search box on selection.
    fn label(&self, item: &Self::Item) -> String;

    fn render(&self, items: &[Self::Item]) -> Result<String, RenderError>;

    /// Fetch and render whatever the chosen suggestion leads to.
    async fn select(&self, item: Self::Item);
}

pub struct Autocomplete<S: SuggestionSource> {
    source: S,
    input: Arc<dyn TextInput>,
    dropdown: Arc<dyn Region>,
    debounce: Duration,
    generation: Generation,
    items: Mutex<Vec<S::Item>>,
}

impl<S: SuggestionSource> Autocomplete<S> {
    pub fn from_source(source: S, handles: &SearchHandles, debounce: Duration) -> Self {
        Self {
            source,
            input: Arc::clone(&handles.input),
            dropdown: Arc::clone(&handles.suggestions),
            debounce,
            generation: Generation::default(),
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Suggestions currently listed in the dropdown.
    pub fn suggestions(&self) -> Vec<S::Item> {
        self.items.lock().clone()
    }

    /// Input event. Returns the debounce task, if one was armed.
    pub fn on_input(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let generation = self.generation.next();

        if self.input.value().trim().is_empty() {
            self.items.lock().clear();
            self.dropdown.hide();
            return None;
        }

        let this = Arc::clone(self);
        Some(tokio::spawn(async move {
            tokio::time::sleep(this.debounce).await;
            if !this.generation.is_current(generation) {
                return;
            }

            let query = this.input.value().trim().to_string();
            if query.is_empty() {
                this.dropdown.hide();
                return;
            }
            this.refresh(generation, &query).await;
        }))
    }

    async fn refresh(&self, generation: u64, query: &str) {
        debug!(query = %query, "fetching {} suggestions", self.source.noun());
        let result = self.source.suggest(query).await;

        if !self.generation.is_current(generation) {
            debug!(query = %query, "discarding stale suggestions");
            return;
        }

        let html = match result {
            Ok(Some(items)) => match self.source.render(&items) {
                Ok(html) => {
                    *self.items.lock() = items;
                    html
                }
                Err(e) => {
                    warn!(error = %e, "failed to render suggestions");
                    self.items.lock().clear();
                    render::search_error(self.source.noun())
                }
            },
            Ok(None) => {
                self.items.lock().clear();
                render::NO_RESULTS.to_string()
            }
            Err(e) => {
                warn!(query = %query, error = %e, "{} search failed", self.source.noun());
                self.items.lock().clear();
                render::search_error(self.source.noun())
            }
        };

        self.dropdown.set_html(html);
        self.dropdown.set_display(Display::Block);
    }

    /// Enter key: query right away and take the first suggestion.
    pub async fn on_enter(&self) {
        let generation = self.generation.next();

        let query = self.input.value().trim().to_string();
        if query.is_empty() {
            return;
        }

        match self.source.suggest(&query).await {
            Ok(Some(items)) => {
                if !self.generation.is_current(generation) {
                    debug!(query = %query, "enter superseded");
                    return;
                }
                match items.into_iter().next() {
                    Some(first) => self.select(first).await,
                    None => debug!(query = %query, "no suggestions to select"),
                }
            }
            Ok(None) => debug!(query = %query, "no suggestions to select"),
            Err(e) => warn!(query = %query, error = %e, "{} search failed", self.source.noun()),
        }
    }

    /// Click on the dropdown entry at `index`.
    pub async fn on_suggestion_click(&self, index: usize) {
        let item = self.items.lock().get(index).cloned();
        match item {
            Some(item) => self.select(item).await,
            None => debug!(index, "click on an entry without a suggestion"),
        }
    }

    /// Document-level click; anything outside the box and the dropdown closes it.
    pub fn on_document_click(&self, target: ClickTarget) {
        if target == ClickTarget::Elsewhere {
            self.generation.next();
            self.dropdown.hide();
        }
    }

    pub async fn select(&self, item: S::Item) {
        self.generation.next();

        let label = self.source.label(&item);
        info!(selection = %label, "selected");
        self.input.set_value(&label);
        self.dropdown.hide();

        self.source.select(item).await;
    }
}
