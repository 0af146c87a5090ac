//! End-to-end scenario tests: a page object declaring its element map
//! through the factory, driven against the in-memory mock engine.

use std::sync::Arc;

use tantear::{
    Button, ErrorMessage, Label, MockDriver, MockElement, Select, SelectState, Selector,
    TantearError, TantearResult, TextField, Ui, UiDriver, WaitConfig,
};

fn fast() -> WaitConfig {
    WaitConfig::new().with_timeout(60).with_poll_interval(5)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}

/// Login page object: element map built once in the constructor, read-only
/// afterwards.
struct LoginPage {
    user_name: TextField,
    password: TextField,
    login: Button,
    error: ErrorMessage,
}

impl LoginPage {
    fn new(ui: &Ui) -> Self {
        Self {
            user_name: ui.text_field(&Selector::test_id("user-name")),
            password: ui.text_field(&Selector::name("password")),
            login: ui.button(&Selector::css("button[type='submit']")),
            error: ui.error_message(&Selector::test_id("login-error")),
        }
    }

    async fn login_as(&self, user: &str, password: &str) -> TantearResult<()> {
        self.user_name.fill(user).await?;
        self.password.fill(password).await?;
        self.login.click().await
    }
}

/// Dashboard page object with a heading and a country dropdown.
struct DashboardPage {
    heading: Label,
    country: Select,
}

impl DashboardPage {
    fn new(ui: &Ui) -> Self {
        Self {
            heading: ui.label(&Selector::css("h6.title")),
            country: ui.select(Selector::css("#country")),
        }
    }
}

fn seeded_driver() -> Arc<MockDriver> {
    let mock = Arc::new(MockDriver::new());
    mock.install("testid=user-name >> css=input >> nth=0", MockElement::new());
    mock.install("css=[name=\"password\"]", MockElement::new());
    mock.install("css=button[type='submit']", MockElement::new());
    mock.install("css=h6.title", MockElement::new().with_text("Dashboard"));
    mock.install("css=#country", MockElement::new());
    mock
}

fn ui_over(mock: &Arc<MockDriver>) -> Ui {
    Ui::new(Arc::clone(mock) as Arc<dyn UiDriver>).with_waits(fast())
}

#[tokio::test]
async fn scenario_fill_text_field_then_expect_value() {
    init_tracing();
    let mock = seeded_driver();
    let page = LoginPage::new(&ui_over(&mock));

    page.user_name.fill("Admin").await.unwrap();
    page.user_name.expect_value("Admin").await.unwrap();
}

#[tokio::test]
async fn scenario_login_flow_clicks_submit_once() {
    init_tracing();
    let mock = seeded_driver();
    let page = LoginPage::new(&ui_over(&mock));

    page.login_as("Admin", "admin123").await.unwrap();
    assert_eq!(mock.clicks(), vec!["css=button[type='submit']"]);
    assert_eq!(page.password.value().await, "admin123");
}

#[tokio::test]
async fn scenario_label_expect_text_pass_and_fail() {
    init_tracing();
    let mock = seeded_driver();
    let page = DashboardPage::new(&ui_over(&mock));

    page.heading.expect_text("Dashboard").await.unwrap();

    match page.heading.expect_text("Dashboard2").await.unwrap_err() {
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
async fn scenario_error_message_after_failed_login() {
    init_tracing();
    let mock = seeded_driver();
    mock.install(
        "testid=login-error",
        MockElement::new().with_text("Invalid credentials"),
    );
    let page = LoginPage::new(&ui_over(&mock));

    page.login_as("Admin", "wrong").await.unwrap();
    page.error.expect_text("Invalid credentials").await.unwrap();
    assert!(page.error.is_visible().await);
}

#[tokio::test]
async fn scenario_css_select_choose_by_id_scopes_option_under_trigger() {
    init_tracing();
    let mock = seeded_driver();
    mock.install("css=#country >> css=[data-option-id=\"7\"]", MockElement::new());
    let mut page = DashboardPage::new(&ui_over(&mock));

    page.country.choose_by_id(7).await.unwrap();

    assert_eq!(
        mock.clicks(),
        vec!["css=#country", "css=#country >> css=[data-option-id=\"7\"]"]
    );
    assert_eq!(page.country.state(), SelectState::Closed);
}

#[tokio::test]
async fn scenario_close_while_already_closed_is_harmless() {
    init_tracing();
    let mock = seeded_driver();
    let mut page = DashboardPage::new(&ui_over(&mock));

    page.country.close().await.unwrap();
    page.country.close().await.unwrap();
    assert_eq!(page.country.state(), SelectState::Closed);
    assert!(mock.pressed_keys().is_empty());
}

#[tokio::test]
async fn scenario_repeated_open_then_close_ends_with_hidden_options() {
    init_tracing();
    let mock = seeded_driver();
    mock.install("role=listbox", MockElement::new());
    mock.conceal_on_escape("role=listbox");
    let mut page = DashboardPage::new(&ui_over(&mock));

    page.country.open().await.unwrap();
    page.country.open().await.unwrap();
    page.country.open().await.unwrap();
    page.country.close().await.unwrap();

    // one trigger click, one cancel, options gone
    assert_eq!(mock.clicks(), vec!["css=#country"]);
    assert_eq!(mock.pressed_keys(), vec!["Escape"]);
    assert_eq!(page.country.state(), SelectState::Closed);
}

#[tokio::test]
async fn scenario_element_map_from_wire_form_selectors() {
    init_tracing();
    let mock = seeded_driver();
    let ui = ui_over(&mock);

    // element maps may be declared in data; unknown kinds fail loudly
    let selector: Selector =
        serde_json::from_str(r#"{ "kind": "byTestId", "value": "user-name" }"#).unwrap();
    let field = ui.text_field(&selector);
    field.fill("Admin").await.unwrap();
    field.expect_value("Admin").await.unwrap();

    let unknown = Selector::parse("byVibes", "x").unwrap_err();
    assert!(matches!(unknown, TantearError::UnsupportedSelectorKind { .. }));
}
