//! Select (dropdown) composite component.
//!
//! A Select is a multi-step interaction protocol over one trigger element:
//! open a popup, address an option inside it, close or cancel. Option
//! addressing is a second resolution scheme keyed by the same selector-kind
//! taxonomy as the outer selector, parameterized by the outer value and the
//! option id. Open/close is an explicit two-state machine so the idempotence
//! properties are directly testable.

use std::fmt::Display;
use std::sync::Arc;

use crate::component::{text_field, BaseComponent};
use crate::driver::UiDriver;
use crate::handle::Handle;
use crate::query::{ElementQuery, QueryStep};
use crate::result::{TantearError, TantearResult};
use crate::selector::Selector;
use crate::wait::WaitConfig;

/// Popup state of a [`Select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectState {
    /// Option list not shown
    Closed,
    /// Option list shown
    Open,
}

/// A dropdown with an openable option list.
///
/// Unlike leaf components, a Select keeps its original [`Selector`]: the
/// option-addressing scheme is parameterized by the outer selector's kind
/// and value.
#[derive(Debug, Clone)]
pub struct Select {
    base: BaseComponent,
    selector: Selector,
    input: Handle,
    state: SelectState,
}

impl Select {
    /// Resolve `selector` and bind the dropdown to `driver`.
    #[must_use]
    pub fn new(driver: &Arc<dyn UiDriver>, selector: Selector) -> Self {
        Self::with_waits(driver, selector, WaitConfig::default())
    }

    /// As [`Select::new`] with explicit wait bounds.
    #[must_use]
    pub fn with_waits(driver: &Arc<dyn UiDriver>, selector: Selector, waits: WaitConfig) -> Self {
        let base = BaseComponent::new(driver, &selector, waits);
        let input = text_field::input_handle(base.handle(), &selector);
        Self {
            base,
            selector,
            input,
            state: SelectState::Closed,
        }
    }

    /// Current popup state.
    #[must_use]
    pub const fn state(&self) -> SelectState {
        self.state
    }

    /// Open the option list by clicking the trigger. A no-op when already
    /// open: no second click is issued and no error is raised.
    pub async fn open(&mut self) -> TantearResult<()> {
        if self.state == SelectState::Open {
            return Ok(());
        }
        self.base.handle().click().await?;
        self.state = SelectState::Open;
        Ok(())
    }

    /// Cancel the popup with Escape and assert the option list is gone.
    ///
    /// A no-op when already closed. If a listbox stays visible after the
    /// cancel signal (even one belonging to an unrelated popup), this fails
    /// with an assertion error rather than guessing.
    pub async fn close(&mut self) -> TantearResult<()> {
        if self.state == SelectState::Closed {
            return Ok(());
        }
        self.base.driver().press_key("Escape").await?;
        let listbox = Handle::new(
            Arc::clone(self.base.driver()),
            ElementQuery::root(QueryStep::Role("listbox".to_string())),
            self.base.handle().waits(),
        );
        match listbox.wait_for_hidden().await {
            Ok(()) => {}
            Err(TantearError::Timeout { .. }) => {
                return Err(TantearError::AssertionError {
                    query: listbox.query().to_string(),
                    expected: "hidden".to_string(),
                    actual: "visible".to_string(),
                });
            }
            Err(other) => return Err(other),
        }
        self.state = SelectState::Closed;
        Ok(())
    }

    /// Open (if needed), locate the option carrying `id` via the
    /// kind-specific addressing rule, and click it. The click implicitly
    /// closes the popup.
    pub async fn choose_by_id<T: Display>(&mut self, id: T) -> TantearResult<()> {
        self.open().await?;
        let query = self.option_query(&id.to_string())?;
        let option = Handle::new(
            Arc::clone(self.base.driver()),
            query,
            self.base.handle().waits(),
        );
        option.click().await?;
        self.state = SelectState::Closed;
        Ok(())
    }

    /// Open (if needed) and click the first visible option whose text is
    /// exactly `text`, in document order. Fails with
    /// [`TantearError::OptionNotFound`] when nothing matches.
    pub async fn choose_by_text(&mut self, text: &str) -> TantearResult<()> {
        self.open().await?;
        let matches = self.base.handle().descend(QueryStep::Text(text.to_string()));
        if !matches.exists().await {
            return Err(TantearError::OptionNotFound {
                text: text.to_string(),
                query: matches.query().to_string(),
            });
        }
        matches.descend(QueryStep::Nth(0)).click().await?;
        self.state = SelectState::Closed;
        Ok(())
    }

    /// Current textual value, read from the nested input sub-handle.
    pub async fn value(&self) -> String {
        self.input.value().await
    }

    /// Assert the current value equals the string form of `value`.
    pub async fn expect_value<T: Display>(&self, value: T) -> TantearResult<()> {
        self.input.expect_value(&value.to_string()).await
    }

    /// The trigger handle the outer selector resolved to.
    #[must_use]
    pub fn handle(&self) -> &Handle {
        self.base.handle()
    }

    // Option addressing sub-scheme: one rule per supported outer kind, all
    // scoped under the trigger. Kinds outside the set fail loudly.
    fn option_query(&self, id: &str) -> TantearResult<ElementQuery> {
        let trigger = self.base.handle().query();
        let step = match &self.selector {
            Selector::TestId(value) => QueryStep::TestId(format!("{value}-optionId-{id}")),
            Selector::Css(_) => QueryStep::Css(format!("[data-option-id=\"{id}\"]")),
            Selector::Tag(value) => QueryStep::Css(format!("{value}[data-option-id=\"{id}\"]")),
            Selector::XPath(_) => QueryStep::XPath(format!(".//*[@data-option-id=\"{id}\"]")),
            Selector::Text(value) => QueryStep::Text(value.clone()),
            Selector::Name(value) => QueryStep::Css(format!("[name=\"{value}\"]")),
            Selector::Label(_) => {
                return Err(TantearError::UnsupportedOptionAddressing {
                    kind: self.selector.kind(),
                })
            }
        };
        Ok(trigger.descend(step))
    }
}
