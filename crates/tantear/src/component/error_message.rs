//! Error-message component.

use std::sync::Arc;

use crate::component::BaseComponent;
use crate::driver::UiDriver;
use crate::handle::Handle;
use crate::result::TantearResult;
use crate::selector::Selector;
use crate::wait::WaitConfig;

/// A validation or failure message. Unlike [`crate::Label`], asserting its
/// text first waits for the message to appear, since error messages are
/// typically rendered in reaction to the step under test.
#[derive(Debug, Clone)]
pub struct ErrorMessage {
    base: BaseComponent,
}

impl ErrorMessage {
    /// Resolve `selector` and bind the message to `driver`.
    #[must_use]
    pub fn new(driver: &Arc<dyn UiDriver>, selector: &Selector) -> Self {
        Self::with_waits(driver, selector, WaitConfig::default())
    }

    /// As [`ErrorMessage::new`] with explicit wait bounds.
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

    /// Wait for the message to become visible, then assert its text.
    pub async fn expect_text(&self, text: &str) -> TantearResult<()> {
        self.base.handle().wait_for_visible().await?;
        self.base.handle().expect_text(text).await
    }

    /// Block until the message is visible.
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
    async fn test_expect_text_on_visible_message() {
        let mock = Arc::new(MockDriver::new());
        mock.install(
            "testid=login-error",
            MockElement::new().with_text("Invalid credentials"),
        );
        let driver: Arc<dyn UiDriver> = mock;
        let message = ErrorMessage::with_waits(&driver, &Selector::test_id("login-error"), fast());
        message.expect_text("Invalid credentials").await.unwrap();
    }

    #[tokio::test]
    async fn test_expect_text_times_out_while_message_hidden() {
        let mock = Arc::new(MockDriver::new());
        mock.install(
            "testid=login-error",
            MockElement::new().with_text("Invalid credentials").hidden(),
        );
        let driver: Arc<dyn UiDriver> = mock;
        let message = ErrorMessage::with_waits(&driver, &Selector::test_id("login-error"), fast());
        let err = message.expect_text("Invalid credentials").await.unwrap_err();
        assert!(matches!(err, TantearError::Timeout { .. }));
    }
}
