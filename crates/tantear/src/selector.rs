//! Selector taxonomy and resolution.
//!
//! A [`Selector`] is a closed, tagged description of how to find an element.
//! The kind fully determines how the value is interpreted; no kind accepts
//! two parse rules. Selectors are pure data, built by page objects and
//! consumed immediately by [`resolve`], which dispatches exhaustively on the
//! kind to produce the addressing strategy — never to guarantee presence.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::driver::UiDriver;
use crate::handle::Handle;
use crate::query::{ElementQuery, QueryStep};
use crate::result::{TantearError, TantearResult};
use crate::wait::WaitConfig;

/// Tagged description of how to locate a UI element.
///
/// The wire form is adjacently tagged with the external kind names:
/// `{ "kind": "byTestId", "value": "user-name" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Selector {
    /// `data-testid` attribute value
    #[serde(rename = "byTestId")]
    TestId(String),
    /// Raw CSS selector
    #[serde(rename = "byCss")]
    Css(String),
    /// Tag name, used as a raw CSS selector
    #[serde(rename = "byTag")]
    Tag(String),
    /// Raw XPath expression
    #[serde(rename = "byXPath")]
    XPath(String),
    /// Literal text content
    #[serde(rename = "byText")]
    Text(String),
    /// `name` attribute value
    #[serde(rename = "byName")]
    Name(String),
    /// Associated label text
    #[serde(rename = "byLabel")]
    Label(String),
}

impl Selector {
    /// Create a test-id selector.
    #[must_use]
    pub fn test_id(value: impl Into<String>) -> Self {
        Self::TestId(value.into())
    }

    /// Create a CSS selector.
    #[must_use]
    pub fn css(value: impl Into<String>) -> Self {
        Self::Css(value.into())
    }

    /// Create a tag selector.
    #[must_use]
    pub fn tag(value: impl Into<String>) -> Self {
        Self::Tag(value.into())
    }

    /// Create an XPath selector.
    #[must_use]
    pub fn xpath(value: impl Into<String>) -> Self {
        Self::XPath(value.into())
    }

    /// Create a text selector.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a name-attribute selector.
    #[must_use]
    pub fn name(value: impl Into<String>) -> Self {
        Self::Name(value.into())
    }

    /// Create a label-text selector.
    #[must_use]
    pub fn label(value: impl Into<String>) -> Self {
        Self::Label(value.into())
    }

    /// Build a selector from an external kind name and value.
    ///
    /// This is the entry point for element maps declared in data. An
    /// unrecognized kind name is a programming error in the calling page
    /// object and fails with [`TantearError::UnsupportedSelectorKind`].
    pub fn parse(kind: &str, value: impl Into<String>) -> TantearResult<Self> {
        let value = value.into();
        match kind {
            "byTestId" => Ok(Self::TestId(value)),
            "byCss" => Ok(Self::Css(value)),
            "byTag" => Ok(Self::Tag(value)),
            "byXPath" => Ok(Self::XPath(value)),
            "byText" => Ok(Self::Text(value)),
            "byName" => Ok(Self::Name(value)),
            "byLabel" => Ok(Self::Label(value)),
            other => Err(TantearError::UnsupportedSelectorKind {
                kind: other.to_string(),
            }),
        }
    }

    /// The external kind name of this selector.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TestId(_) => "byTestId",
            Self::Css(_) => "byCss",
            Self::Tag(_) => "byTag",
            Self::XPath(_) => "byXPath",
            Self::Text(_) => "byText",
            Self::Name(_) => "byName",
            Self::Label(_) => "byLabel",
        }
    }

    /// The raw value of this selector.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::TestId(v)
            | Self::Css(v)
            | Self::Tag(v)
            | Self::XPath(v)
            | Self::Text(v)
            | Self::Name(v)
            | Self::Label(v) => v,
        }
    }

    /// The document-rooted query for this selector. Exactly one rule per
    /// kind; no rule falls through to another.
    pub(crate) fn root_query(&self) -> ElementQuery {
        let step = match self {
            Self::TestId(v) => QueryStep::TestId(v.clone()),
            Self::Css(v) | Self::Tag(v) => QueryStep::Css(v.clone()),
            Self::XPath(v) => QueryStep::XPath(v.clone()),
            Self::Text(v) => QueryStep::Text(v.clone()),
            Self::Name(v) => QueryStep::Css(format!("[name=\"{v}\"]")),
            Self::Label(v) => QueryStep::Css(format!("label:has-text(\"{v}\")")),
        };
        ElementQuery::root(step)
    }
}

/// Resolve a selector against an execution context.
///
/// Produces a lazily bound [`Handle`]: the addressing strategy is fixed here,
/// but binding to a live element is re-evaluated by the driver on each
/// action. "Does not exist yet" is a legal state for the returned handle.
#[must_use]
pub fn resolve(driver: &Arc<dyn UiDriver>, selector: &Selector, waits: WaitConfig) -> Handle {
    Handle::new(Arc::clone(driver), selector.root_query(), waits)
}
