//! Page element handles.
//!
//! Controllers never look elements up themselves; each page is built with
//! the handles it renders into. A browser binding implements these traits
//! over real DOM nodes, the in-memory versions below back the harness and
//! the tests.

use parking_lot::Mutex;
use std::sync::Arc;

/// CSS `display` values the pages switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    None,
    Block,
    Flex,
    Grid,
}

impl Display {
    pub fn as_css(&self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Flex => "flex",
            Display::Grid => "grid",
        }
    }
}

/// A container whose contents are replaced wholesale.
pub trait Region: Send + Sync {
    fn set_html(&self, html: String);
    fn set_display(&self, display: Display);

    fn hide(&self) {
        self.set_display(Display::None);
    }
}

/// The search box.
pub trait TextInput: Send + Sync {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// Where a document-level click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    SearchInput,
    Suggestions,
    Elsewhere,
}

#[derive(Debug, Default)]
struct RegionState {
    html: String,
    display: Display,
    writes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryRegion {
    state: Arc<Mutex<RegionState>>,
}

impl MemoryRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> String {
        self.state.lock().html.clone()
    }

    pub fn display(&self) -> Display {
        self.state.lock().display
    }

    pub fn is_visible(&self) -> bool {
        self.display() != Display::None
    }

    /// Number of `set_html` calls so far.
    pub fn writes(&self) -> usize {
        self.state.lock().writes
    }
}

impl Region for MemoryRegion {
    fn set_html(&self, html: String) {
        let mut state = self.state.lock();
        state.html = html;
        state.writes += 1;
    }

    fn set_display(&self, display: Display) {
        self.state.lock().display = display;
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryInput {
    value: Arc<Mutex<String>>,
}

impl MemoryInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextInput for MemoryInput {
    fn value(&self) -> String {
        self.value.lock().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.lock() = value.to_string();
    }
}
