//! Tantear: page-object component core for browser UI test automation.
//!
//! Tantear (Spanish: "to feel out, to probe") maps declarative element
//! references to lazily bound UI handles, wraps those handles in typed
//! components with semantic operations, and exposes a per-context factory
//! that page objects build their element maps from.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  page object        component           core                  │
//! │  ┌───────────┐     ┌────────────┐     ┌──────────────────┐   │
//! │  │ Selector   │────►│ Ui factory │────►│ resolve() →      │   │
//! │  │ per field  │     │ per kind   │     │ Handle (lazy)    │   │
//! │  └───────────┘     └────────────┘     └────────┬─────────┘   │
//! │                                                 ▼             │
//! │                                        ┌──────────────────┐   │
//! │                                        │ UiDriver (engine)│   │
//! │                                        └──────────────────┘   │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! The underlying automation engine sits behind [`UiDriver`]; the core never
//! performs network or process I/O itself. Every context-touching operation
//! is an async suspension point with a bounded wait; failures propagate to
//! the calling scenario without retries.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tantear::{MockDriver, MockElement, Selector, Ui, UiDriver};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> tantear::TantearResult<()> {
//! let mock = Arc::new(MockDriver::new());
//! mock.install("testid=user-name >> css=input >> nth=0", MockElement::new());
//! let ui = Ui::new(mock as Arc<dyn UiDriver>);
//!
//! let user_name = ui.text_field(&Selector::test_id("user-name"));
//! user_name.fill("Admin").await?;
//! user_name.expect_value("Admin").await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod driver;
mod handle;
mod query;
mod result;
mod selector;
mod ui;
mod wait;

pub use component::{AdminMenu, BaseComponent, Button, ErrorMessage, Label, Select, SelectState, TextField};
pub use driver::{MockDriver, MockElement, UiDriver};
pub use handle::Handle;
pub use query::{ElementQuery, QueryStep};
pub use result::{TantearError, TantearResult};
pub use selector::{resolve, Selector};
pub use ui::{ComponentKind, Ui};
pub use wait::{WaitConfig, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS};
