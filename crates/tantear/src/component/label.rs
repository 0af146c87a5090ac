//! Label component.

use std::sync::Arc;

use crate::component::BaseComponent;
use crate::driver::UiDriver;
use crate::handle::Handle;
use crate::result::TantearResult;
use crate::selector::Selector;
use crate::wait::WaitConfig;

/// A read-only piece of text.
#[derive(Debug, Clone)]
pub struct Label {
    base: BaseComponent,
}

impl Label {
    /// Resolve `selector` and bind the label to `driver`.
    #[must_use]
    pub fn new(driver: &Arc<dyn UiDriver>, selector: &Selector) -> Self {
        Self::with_waits(driver, selector, WaitConfig::default())
    }

    /// As [`Label::new`] with explicit wait bounds.
    #[must_use]
    pub fn with_waits(driver: &Arc<dyn UiDriver>, selector: &Selector, waits: WaitConfig) -> Self {
        Self {
            base: BaseComponent::new(driver, selector, waits),
        }
    }

    /// Visibility probe; `false` on absence.
    pub async fn is_visible(&self) -> bool {
        self.base.handle().is_visible().await
    }

    /// Text content, empty string when absent.
    pub async fn text(&self) -> String {
        self.base.handle().text().await
    }

    /// Assert the label's text equals `text` within the wait window.
    pub async fn expect_text(&self, text: &str) -> TantearResult<()> {
        self.base.handle().expect_text(text).await
    }

    /// Block until the label is visible.
    pub async fn wait_for_visible(&self) -> TantearResult<()> {
        self.base.handle().wait_for_visible().await
    }

    /// The underlying handle.
    #[must_use]
    pub fn handle(&self) -> &Handle {
        self.base.handle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{MockDriver, MockElement};
    use crate::result::TantearError;

    fn fast() -> WaitConfig {
        WaitConfig::new().with_timeout(40).with_poll_interval(5)
    }

    #[tokio::test]
    async fn test_expect_text_match() {
        let mock = Arc::new(MockDriver::new());
        mock.install("css=h1.title", MockElement::new().with_text("Dashboard"));
        let driver: Arc<dyn UiDriver> = mock;
        let label = Label::with_waits(&driver, &Selector::css("h1.title"), fast());
        label.expect_text("Dashboard").await.unwrap();
    }

    #[tokio::test]
    async fn test_expect_text_mismatch_carries_both_values() {
        let mock = Arc::new(MockDriver::new());
        mock.install("css=h1.title", MockElement::new().with_text("Dashboard"));
        let driver: Arc<dyn UiDriver> = mock;
        let label = Label::with_waits(&driver, &Selector::css("h1.title"), fast());
        match label.expect_text("Dashboard2").await.unwrap_err() {
            TantearError::AssertionError {
                expected, actual, ..
            } => {
                assert_eq!(expected, "Dashboard2");
                assert_eq!(actual, "Dashboard");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_wait_for_visible_on_missing_label_times_out() {
        let driver: Arc<dyn UiDriver> = Arc::new(MockDriver::new());
        let label = Label::with_waits(&driver, &Selector::text("Loading"), fast());
        let err = label.wait_for_visible().await.unwrap_err();
        assert!(matches!(err, TantearError::Timeout { .. }));
    }
}
