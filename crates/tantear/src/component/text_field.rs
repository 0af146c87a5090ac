//! Text-field component with two-tier input resolution.

use std::sync::Arc;

use crate::component::BaseComponent;
use crate::driver::UiDriver;
use crate::handle::Handle;
use crate::query::QueryStep;
use crate::result::TantearResult;
use crate::selector::Selector;
use crate::wait::WaitConfig;

/// Derive the input sub-handle for a field addressed by `selector`.
///
/// If the selector already addresses an input-like node directly (a `name`
/// attribute lookup, or a CSS selector written against `input[...]`), the
/// sub-handle is the outer handle itself; otherwise it is the first `input`
/// descendant. Deterministic per (kind, value shape) so repeated
/// construction always targets the same logical node.
pub(crate) fn input_handle(outer: &Handle, selector: &Selector) -> Handle {
    match selector {
        Selector::Name(_) => outer.clone(),
        Selector::Css(value) if value.contains("input[") => outer.clone(),
        _ => outer
            .descend(QueryStep::Css("input".to_string()))
            .descend(QueryStep::Nth(0)),
    }
}

/// A single-line text input, possibly wrapped in framework chrome.
#[derive(Debug, Clone)]
pub struct TextField {
    base: BaseComponent,
    input: Handle,
}

impl TextField {
    /// Resolve `selector` and bind the field to `driver`.
    #[must_use]
    pub fn new(driver: &Arc<dyn UiDriver>, selector: &Selector) -> Self {
        Self::with_waits(driver, selector, WaitConfig::default())
    }

    /// As [`TextField::new`] with explicit wait bounds.
    #[must_use]
    pub fn with_waits(driver: &Arc<dyn UiDriver>, selector: &Selector, waits: WaitConfig) -> Self {
        let base = BaseComponent::new(driver, selector, waits);
        let input = input_handle(base.handle(), selector);
        Self { base, input }
    }

    /// Fill the input with `text`.
    pub async fn fill(&self, text: &str) -> TantearResult<()> {
        self.input.fill(text).await
    }

    /// Clear the input.
    pub async fn clear(&self) -> TantearResult<()> {
        self.input.clear().await
    }

    /// Current input value, empty string when absent.
    pub async fn value(&self) -> String {
        self.input.value().await
    }

    /// Assert the input's value equals `value` within the wait window.
    pub async fn expect_value(&self, value: &str) -> TantearResult<()> {
        self.input.expect_value(value).await
    }

    /// The outer handle the selector resolved to.
    #[must_use]
    pub fn handle(&self) -> &Handle {
        self.base.handle()
    }

    /// The nested input sub-handle actions are issued against.
    #[must_use]
    pub fn input(&self) -> &Handle {
        &self.input
    }
}
