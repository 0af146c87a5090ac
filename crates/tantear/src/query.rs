//! Structured addressing strategies for elements.
//!
//! An [`ElementQuery`] is the deferred "how to find it" a [`crate::Handle`]
//! carries: a chain of steps, each scoping the next, re-evaluated against the
//! live context on every action. The canonical string form
//! (`testid=user >> css=input >> nth=0`) is what drivers dispatch on and what
//! error messages and logs show.

use std::fmt;

/// One step of an element query. Each step addresses elements within the
/// scope produced by the preceding steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryStep {
    /// `data-testid` attribute lookup
    TestId(String),
    /// Raw CSS selector
    Css(String),
    /// Raw XPath expression, evaluated relative to the current scope
    XPath(String),
    /// Text content lookup
    Text(String),
    /// ARIA role lookup
    Role(String),
    /// N-th match within the current scope, in document order
    Nth(usize),
}

impl fmt::Display for QueryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TestId(v) => write!(f, "testid={v}"),
            Self::Css(v) => write!(f, "css={v}"),
            Self::XPath(v) => write!(f, "xpath={v}"),
            Self::Text(v) => write!(f, "text={v}"),
            Self::Role(v) => write!(f, "role={v}"),
            Self::Nth(n) => write!(f, "nth={n}"),
        }
    }
}

/// A complete addressing strategy: a non-empty chain of [`QueryStep`]s.
///
/// Queries are pure data. They do not guarantee presence; binding to a live
/// element happens when a driver evaluates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementQuery {
    steps: Vec<QueryStep>,
}

impl ElementQuery {
    /// Create a query rooted at the document with a single step.
    #[must_use]
    pub fn root(step: QueryStep) -> Self {
        Self { steps: vec![step] }
    }

    /// Derive a new query scoped under this one.
    #[must_use]
    pub fn descend(&self, step: QueryStep) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// The steps of this query, outermost first.
    #[must_use]
    pub fn steps(&self) -> &[QueryStep] {
        &self.steps
    }
}

impl fmt::Display for ElementQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " >> ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_query_display() {
        let q = ElementQuery::root(QueryStep::TestId("user".into()));
        assert_eq!(q.to_string(), "testid=user");
    }

    #[test]
    fn test_descend_is_non_destructive() {
        let outer = ElementQuery::root(QueryStep::Css("#field".into()));
        let inner = outer.descend(QueryStep::Css("input".into()));
        assert_eq!(outer.steps().len(), 1);
        assert_eq!(inner.steps().len(), 2);
        assert_eq!(inner.to_string(), "css=#field >> css=input");
    }

    #[test]
    fn test_nth_step_display() {
        let q = ElementQuery::root(QueryStep::Text("Sweden".into())).descend(QueryStep::Nth(0));
        assert_eq!(q.to_string(), "text=Sweden >> nth=0");
    }

    #[test]
    fn test_role_step_display() {
        let q = ElementQuery::root(QueryStep::Role("listbox".into()));
        assert_eq!(q.to_string(), "role=listbox");
    }
}
