//! The driver seam: the abstract automation engine the core runs against.
//!
//! [`UiDriver`] is the only surface the core consumes from the underlying
//! engine: element lookup keyed by [`ElementQuery`], a small action set, and
//! probe primitives. Network transport, process management, scheduling and
//! everything else browser-shaped belong to the engine behind this trait.
//!
//! [`MockDriver`] is a first-class in-memory implementation used by the
//! crate's own tests and available to downstream page-object suites as a
//! test double. It matches queries by their canonical string form, so tests
//! double as checks that the core composes the documented addressing strings
//! exactly.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::query::ElementQuery;
use crate::result::{TantearError, TantearResult};

/// Abstract automation engine.
///
/// Probe methods (`count`, `is_visible`, `is_enabled`, `text_content`,
/// `input_value`) never fail: absence reads as zero / `false` / `None`.
/// Action methods fail with [`TantearError::ActionError`] when the query
/// matches nothing actionable at the instant the action is issued; bounded
/// waiting happens above this trait, in [`crate::Handle`].
#[async_trait]
pub trait UiDriver: Send + Sync + std::fmt::Debug {
    /// Number of elements currently matching the query, in document order.
    async fn count(&self, query: &ElementQuery) -> usize;

    /// Whether the first match is visible. `false` on absence.
    async fn is_visible(&self, query: &ElementQuery) -> bool;

    /// Whether the first match is enabled. `false` on absence.
    async fn is_enabled(&self, query: &ElementQuery) -> bool;

    /// Text content of the first match. `None` on absence.
    async fn text_content(&self, query: &ElementQuery) -> Option<String>;

    /// Input value of the first match. `None` on absence.
    async fn input_value(&self, query: &ElementQuery) -> Option<String>;

    /// Click the first match.
    async fn click(&self, query: &ElementQuery) -> TantearResult<()>;

    /// Replace the first match's value with `text`.
    async fn fill(&self, query: &ElementQuery, text: &str) -> TantearResult<()>;

    /// Clear the first match's value.
    async fn clear(&self, query: &ElementQuery) -> TantearResult<()>;

    /// Send a key press to the context (not to a specific element).
    async fn press_key(&self, key: &str) -> TantearResult<()>;
}

/// Recorded state of one mock element.
#[derive(Debug, Clone)]
pub struct MockElement {
    /// Whether the element is visible
    pub visible: bool,
    /// Whether the element is enabled
    pub enabled: bool,
    /// Text content
    pub text: String,
    /// Input value
    pub value: String,
    /// How many elements the query matches
    pub count: usize,
}

impl Default for MockElement {
    fn default() -> Self {
        Self::new()
    }
}

impl MockElement {
    /// A visible, enabled element with empty text and value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            visible: true,
            enabled: true,
            text: String::new(),
            value: String::new(),
            count: 1,
        }
    }

    /// Set the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the input value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the match count.
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Mark the element hidden.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Mark the element disabled.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// In-memory [`UiDriver`] keyed by canonical query strings.
#[derive(Debug, Default)]
pub struct MockDriver {
    elements: Mutex<HashMap<String, MockElement>>,
    clicks: Mutex<Vec<String>>,
    keys: Mutex<Vec<String>>,
    conceal_on_escape: Mutex<Vec<String>>,
}

impl MockDriver {
    /// Create an empty mock context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install an element under a canonical query string.
    pub fn install(&self, query: &str, element: MockElement) {
        let _ = self.lock_elements().insert(query.to_string(), element);
    }

    /// Remove an element.
    pub fn remove(&self, query: &str) {
        let _ = self.lock_elements().remove(query);
    }

    /// Change an installed element's visibility.
    pub fn set_visible(&self, query: &str, visible: bool) {
        if let Some(el) = self.lock_elements().get_mut(query) {
            el.visible = visible;
        }
    }

    /// Hide the element at `query` whenever Escape is pressed. Mimics a
    /// popup that an engine dismisses on cancel.
    pub fn conceal_on_escape(&self, query: &str) {
        self.lock(&self.conceal_on_escape).push(query.to_string());
    }

    /// Canonical query strings of every click issued, in order.
    #[must_use]
    pub fn clicks(&self) -> Vec<String> {
        self.lock(&self.clicks).clone()
    }

    /// Keys pressed, in order.
    #[must_use]
    pub fn pressed_keys(&self) -> Vec<String> {
        self.lock(&self.keys).clone()
    }

    fn lock_elements(&self) -> std::sync::MutexGuard<'_, HashMap<String, MockElement>> {
        self.lock(&self.elements)
    }

    fn lock<'a, T>(&self, mutex: &'a Mutex<T>) -> std::sync::MutexGuard<'a, T> {
        mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn get(&self, query: &ElementQuery) -> Option<MockElement> {
        self.lock_elements().get(&query.to_string()).cloned()
    }

    fn missing(action: &'static str, query: &ElementQuery) -> TantearError {
        TantearError::ActionError {
            action,
            query: query.to_string(),
            message: "no element matches".to_string(),
        }
    }
}

#[async_trait]
impl UiDriver for MockDriver {
    async fn count(&self, query: &ElementQuery) -> usize {
        self.get(query).map_or(0, |el| el.count)
    }

    async fn is_visible(&self, query: &ElementQuery) -> bool {
        self.get(query).is_some_and(|el| el.visible && el.count > 0)
    }

    async fn is_enabled(&self, query: &ElementQuery) -> bool {
        self.get(query).is_some_and(|el| el.enabled && el.count > 0)
    }

    async fn text_content(&self, query: &ElementQuery) -> Option<String> {
        self.get(query).map(|el| el.text)
    }

    async fn input_value(&self, query: &ElementQuery) -> Option<String> {
        self.get(query).map(|el| el.value)
    }

    async fn click(&self, query: &ElementQuery) -> TantearResult<()> {
        if self.get(query).is_none() {
            return Err(Self::missing("click", query));
        }
        self.lock(&self.clicks).push(query.to_string());
        Ok(())
    }

    async fn fill(&self, query: &ElementQuery, text: &str) -> TantearResult<()> {
        let mut elements = self.lock_elements();
        match elements.get_mut(&query.to_string()) {
            Some(el) => {
                el.value = text.to_string();
                Ok(())
            }
            None => Err(Self::missing("fill", query)),
        }
    }

    async fn clear(&self, query: &ElementQuery) -> TantearResult<()> {
        let mut elements = self.lock_elements();
        match elements.get_mut(&query.to_string()) {
            Some(el) => {
                el.value.clear();
                Ok(())
            }
            None => Err(Self::missing("clear", query)),
        }
    }

    async fn press_key(&self, key: &str) -> TantearResult<()> {
        self.lock(&self.keys).push(key.to_string());
        if key == "Escape" {
            let concealed = self.lock(&self.conceal_on_escape).clone();
            let mut elements = self.lock_elements();
            for query in concealed {
                if let Some(el) = elements.get_mut(&query) {
                    el.visible = false;
                }
            }
        }
        Ok(())
    }
}
