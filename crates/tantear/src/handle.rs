//! Lazily bound element handles.
//!
//! A [`Handle`] pairs an execution context with an [`ElementQuery`] and a
//! wait configuration. It never caches a live element reference: every
//! action re-evaluates the query against the context, since the UI mutates
//! between construction and use. "Does not exist yet" is a legal state for a
//! handle; "does not exist when acted upon" is an error from the action.

use std::sync::Arc;

use crate::driver::UiDriver;
use crate::query::{ElementQuery, QueryStep};
use crate::result::{TantearError, TantearResult};
use crate::wait::{Deadline, WaitConfig};

/// Opaque, lazily bound reference to a located UI element.
#[derive(Debug, Clone)]
pub struct Handle {
    driver: Arc<dyn UiDriver>,
    query: ElementQuery,
    waits: WaitConfig,
}

impl Handle {
    /// Bind a query to a context. Normally reached through
    /// [`crate::selector::resolve`] or [`Handle::descend`].
    #[must_use]
    pub fn new(driver: Arc<dyn UiDriver>, query: ElementQuery, waits: WaitConfig) -> Self {
        Self {
            driver,
            query,
            waits,
        }
    }

    /// The addressing strategy this handle re-evaluates on each action.
    #[must_use]
    pub fn query(&self) -> &ElementQuery {
        &self.query
    }

    /// The wait configuration governing this handle's blocking operations.
    #[must_use]
    pub const fn waits(&self) -> WaitConfig {
        self.waits
    }

    /// Derive a handle scoped under this one.
    #[must_use]
    pub fn descend(&self, step: QueryStep) -> Self {
        Self {
            driver: Arc::clone(&self.driver),
            query: self.query.descend(step),
            waits: self.waits,
        }
    }

    pub(crate) fn driver(&self) -> &Arc<dyn UiDriver> {
        &self.driver
    }

    /// Whether at least one element currently matches.
    pub async fn exists(&self) -> bool {
        self.driver.count(&self.query).await > 0
    }

    /// Visibility probe. `false` on absence, never an error.
    pub async fn is_visible(&self) -> bool {
        self.driver.is_visible(&self.query).await
    }

    /// Enabledness probe. `false` on absence, never an error.
    pub async fn is_enabled(&self) -> bool {
        self.driver.is_enabled(&self.query).await
    }

    /// Text content of the element, empty string when absent.
    pub async fn text(&self) -> String {
        self.driver
            .text_content(&self.query)
            .await
            .unwrap_or_default()
    }

    /// Input value of the element, empty string when absent.
    pub async fn value(&self) -> String {
        self.driver
            .input_value(&self.query)
            .await
            .unwrap_or_default()
    }

    /// Click the element once it is actionable within the wait window.
    pub async fn click(&self) -> TantearResult<()> {
        self.wait_actionable("click").await?;
        tracing::debug!(query = %self.query, "click");
        self.driver.click(&self.query).await
    }

    /// Fill the element with `text` once it is actionable.
    pub async fn fill(&self, text: &str) -> TantearResult<()> {
        self.wait_actionable("fill").await?;
        tracing::debug!(query = %self.query, text, "fill");
        self.driver.fill(&self.query, text).await
    }

    /// Clear the element's value once it is actionable.
    pub async fn clear(&self) -> TantearResult<()> {
        self.wait_actionable("clear").await?;
        tracing::debug!(query = %self.query, "clear");
        self.driver.clear(&self.query).await
    }

    /// Block until the element is visible.
    pub async fn wait_for_visible(&self) -> TantearResult<()> {
        let deadline = Deadline::start(self.waits);
        loop {
            if self.is_visible().await {
                return Ok(());
            }
            if deadline.expired() {
                return Err(TantearError::Timeout {
                    ms: self.waits.timeout_ms,
                    condition: format!("{} to become visible", self.query),
                });
            }
            deadline.tick().await;
        }
    }

    /// Block until no visible element matches.
    pub async fn wait_for_hidden(&self) -> TantearResult<()> {
        let deadline = Deadline::start(self.waits);
        loop {
            if !self.is_visible().await {
                return Ok(());
            }
            if deadline.expired() {
                return Err(TantearError::Timeout {
                    ms: self.waits.timeout_ms,
                    condition: format!("{} to become hidden", self.query),
                });
            }
            deadline.tick().await;
        }
    }

    /// Block until the element's text equals `expected`, then pass. Fails
    /// with the last observed text when the window elapses.
    pub async fn expect_text(&self, expected: &str) -> TantearResult<()> {
        let deadline = Deadline::start(self.waits);
        loop {
            let actual = self.text().await;
            if actual == expected {
                return Ok(());
            }
            if deadline.expired() {
                return Err(TantearError::AssertionError {
                    query: self.query.to_string(),
                    expected: expected.to_string(),
                    actual,
                });
            }
            deadline.tick().await;
        }
    }

    /// Block until the element's value equals `expected`, then pass. Fails
    /// with the last observed value when the window elapses.
    pub async fn expect_value(&self, expected: &str) -> TantearResult<()> {
        let deadline = Deadline::start(self.waits);
        loop {
            let actual = self.value().await;
            if actual == expected {
                return Ok(());
            }
            if deadline.expired() {
                return Err(TantearError::AssertionError {
                    query: self.query.to_string(),
                    expected: expected.to_string(),
                    actual,
                });
            }
            deadline.tick().await;
        }
    }

    // Actionable: attached, visible and enabled. Actions on targets that
    // never reach this state fail with ActionError, not Timeout.
    async fn wait_actionable(&self, action: &'static str) -> TantearResult<()> {
        let deadline = Deadline::start(self.waits);
        loop {
            if self.exists().await && self.is_visible().await && self.is_enabled().await {
                return Ok(());
            }
            if deadline.expired() {
                return Err(TantearError::ActionError {
                    action,
                    query: self.query.to_string(),
                    message: format!(
                        "element not actionable within {}ms",
                        self.waits.timeout_ms
                    ),
                });
            }
            deadline.tick().await;
        }
    }
}
