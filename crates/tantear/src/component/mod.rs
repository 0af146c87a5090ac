//! Typed component wrappers over resolved handles.
//!
//! Every component owns exactly one `(context, handle)` pair for its
//! lifetime: constructing a component resolves its [`Selector`] through the
//! resolver exactly once, and the component is never re-targeted afterwards.
//! Leaf components add a small fixed operation set over the handle; the
//! [`Select`] composite adds a multi-step interaction protocol with its own
//! option-addressing sub-scheme.

use std::sync::Arc;

use crate::driver::UiDriver;
use crate::handle::Handle;
use crate::selector::{resolve, Selector};
use crate::wait::WaitConfig;

mod admin_menu;
mod button;
mod error_message;
mod label;
mod select;
mod text_field;

pub use admin_menu::AdminMenu;
pub use button::Button;
pub use error_message::ErrorMessage;
pub use label::Label;
pub use select::{Select, SelectState};
pub use text_field::TextField;

/// The minimal owned `(context, handle)` pair every component wraps.
///
/// Provides no operations itself; leaf and composite components specialize
/// it.
#[derive(Debug, Clone)]
pub struct BaseComponent {
    driver: Arc<dyn UiDriver>,
    handle: Handle,
}

impl BaseComponent {
    /// Resolve `selector` against the context and wrap the result.
    #[must_use]
    pub fn new(driver: &Arc<dyn UiDriver>, selector: &Selector, waits: WaitConfig) -> Self {
        Self {
            driver: Arc::clone(driver),
            handle: resolve(driver, selector, waits),
        }
    }

    /// The component's resolved handle.
    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// The execution context the component is bound to.
    #[must_use]
    pub fn driver(&self) -> &Arc<dyn UiDriver> {
        &self.driver
    }
}
