//! Button component.

use std::sync::Arc;

use crate::component::BaseComponent;
use crate::driver::UiDriver;
use crate::handle::Handle;
use crate::result::TantearResult;
use crate::selector::Selector;
use crate::wait::WaitConfig;

/// A clickable control.
#[derive(Debug, Clone)]
pub struct Button {
    base: BaseComponent,
}

impl Button {
    /// Resolve `selector` and bind the button to `driver`.
    #[must_use]
    pub fn new(driver: &Arc<dyn UiDriver>, selector: &Selector) -> Self {
        Self::with_waits(driver, selector, WaitConfig::default())
    }

    /// As [`Button::new`] with explicit wait bounds.
    #[must_use]
    pub fn with_waits(driver: &Arc<dyn UiDriver>, selector: &Selector, waits: WaitConfig) -> Self {
        Self {
            base: BaseComponent::new(driver, selector, waits),
        }
    }

    /// Click the button.
    pub async fn click(&self) -> TantearResult<()> {
        self.base.handle().click().await
    }

    /// Visibility probe; `false` on absence.
    pub async fn is_visible(&self) -> bool {
        self.base.handle().is_visible().await
    }

    /// Enabledness probe; `false` on absence.
    pub async fn is_enabled(&self) -> bool {
        self.base.handle().is_enabled().await
    }

    /// Text content, empty string when absent.
    pub async fn text(&self) -> String {
        self.base.handle().text().await
    }

    /// The underlying handle.
    #[must_use]
    pub fn handle(&self) -> &Handle {
        self.base.handle()
    }
}
