//! Component factory.
//!
//! [`Ui`] binds an execution context once and hands out per-kind component
//! constructors, so page objects declare their element maps without naming
//! concrete component types' construction details. The factory adds no
//! behavior: constructing through it is referentially equivalent to
//! constructing the component directly with the same context and waits. No
//! caching, no pooling, no dynamic registration.

use std::sync::Arc;

use crate::component::{AdminMenu, Button, ErrorMessage, Label, Select, TextField};
use crate::driver::UiDriver;
use crate::selector::Selector;
use crate::wait::WaitConfig;

/// The closed set of component kinds the factory constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// [`Button`]
    Button,
    /// [`Label`]
    Label,
    /// [`ErrorMessage`]
    ErrorMessage,
    /// [`TextField`]
    TextField,
    /// [`AdminMenu`]
    AdminMenu,
    /// [`Select`]
    Select,
}

impl ComponentKind {
    /// Every supported kind, each with exactly one factory constructor.
    pub const ALL: [Self; 6] = [
        Self::Button,
        Self::Label,
        Self::ErrorMessage,
        Self::TextField,
        Self::AdminMenu,
        Self::Select,
    ];

    /// The kind's name as used in element-map declarations.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Label => "label",
            Self::ErrorMessage => "errorMessage",
            Self::TextField => "textField",
            Self::AdminMenu => "adminMenu",
            Self::Select => "select",
        }
    }
}

/// Per-context component factory.
#[derive(Debug, Clone)]
pub struct Ui {
    driver: Arc<dyn UiDriver>,
    waits: WaitConfig,
}

impl Ui {
    /// Bind a factory to an execution context with default waits.
    #[must_use]
    pub fn new(driver: Arc<dyn UiDriver>) -> Self {
        Self {
            driver,
            waits: WaitConfig::default(),
        }
    }

    /// Use `waits` for every component constructed from here on.
    #[must_use]
    pub const fn with_waits(mut self, waits: WaitConfig) -> Self {
        self.waits = waits;
        self
    }

    /// The wait bounds components are constructed with.
    #[must_use]
    pub const fn waits(&self) -> WaitConfig {
        self.waits
    }

    /// Construct a [`Button`] bound to this context.
    #[must_use]
    pub fn button(&self, selector: &Selector) -> Button {
        Button::with_waits(&self.driver, selector, self.waits)
    }

    /// Construct a [`Label`] bound to this context.
    #[must_use]
    pub fn label(&self, selector: &Selector) -> Label {
        Label::with_waits(&self.driver, selector, self.waits)
    }

    /// Construct an [`ErrorMessage`] bound to this context.
    #[must_use]
    pub fn error_message(&self, selector: &Selector) -> ErrorMessage {
        ErrorMessage::with_waits(&self.driver, selector, self.waits)
    }

    /// Construct a [`TextField`] bound to this context.
    #[must_use]
    pub fn text_field(&self, selector: &Selector) -> TextField {
        TextField::with_waits(&self.driver, selector, self.waits)
    }

    /// Construct an [`AdminMenu`] entry bound to this context.
    #[must_use]
    pub fn admin_menu(&self, selector: &Selector) -> AdminMenu {
        AdminMenu::with_waits(&self.driver, selector, self.waits)
    }

    /// Construct a [`Select`] bound to this context.
    #[must_use]
    pub fn select(&self, selector: Selector) -> Select {
        Select::with_waits(&self.driver, selector, self.waits)
    }
}
