mod common;

use common::{FakeBackend, PASSWORD};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use stockroom::api::LoginArgs;
use stockroom::service::InventoryService;
use stockroom::ui::core::{Action, DialogType, EventType, Screen, ToastKind};
use stockroom::ui::AppComponent;

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(key(code));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Tick the app until `done` holds or give up after about two seconds
async fn wait_until(app: &mut AppComponent, done: impl Fn(&AppComponent) -> bool) {
    for _ in 0..400 {
        app.tick();
        if done(&*app) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not reached, screen is {:?}", app.screen());
}

async fn signed_in(backend: Arc<FakeBackend>) -> (AppComponent, InventoryService) {
    let service = common::service(backend);
    service
        .login(LoginArgs {
            email: "admin@example.com".to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();
    let mut app = AppComponent::new(common::context(service.clone())).unwrap();
    app.start();
    (app, service)
}

async fn products_screen(backend: Arc<FakeBackend>) -> AppComponent {
    let (mut app, _) = signed_in(backend).await;
    press(&mut app, KeyCode::Char('P'));
    assert_eq!(app.screen(), &Screen::Products);
    wait_until(&mut app, |app| !app.products().table().is_loading()).await;
    app
}

#[tokio::test]
async fn test_starts_on_login_without_session() {
    let mut app = AppComponent::new(common::context(common::service(FakeBackend::with_products(1)))).unwrap();
    app.start();
    assert_eq!(app.screen(), &Screen::Login);

    // Private screens redirect to the login form
    app.dispatch(Action::Navigate(Screen::Products));
    assert_eq!(app.screen(), &Screen::Login);
    assert_eq!(app.active_task_count(), 0);
}

#[tokio::test]
async fn test_q_is_typed_on_login_but_ctrl_c_quits() {
    let mut app = AppComponent::new(common::context(common::service(FakeBackend::with_products(1)))).unwrap();
    app.start();

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_login_flow_reaches_dashboard() {
    let backend = FakeBackend::with_products(12);
    let mut app = AppComponent::new(common::context(common::service(backend.clone()))).unwrap();
    app.start();

    type_text(&mut app, "admin@example.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, PASSWORD);
    press(&mut app, KeyCode::Enter);

    wait_until(&mut app, |app| {
        app.screen() == &Screen::Dashboard && !app.dashboard().is_loading()
    })
    .await;
    assert_eq!(app.dashboard().summary().total_products, 12);
    assert!(backend.calls().contains(&"login admin@example.com".to_string()));
}

#[tokio::test]
async fn test_wrong_password_stays_on_login() {
    let backend = FakeBackend::with_products(1);
    let mut app = AppComponent::new(common::context(common::service(backend.clone()))).unwrap();
    app.start();

    type_text(&mut app, "admin@example.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "wrongpw");
    press(&mut app, KeyCode::Enter);

    wait_until(&mut app, |app| app.active_task_count() == 0).await;
    assert_eq!(app.screen(), &Screen::Login);
}

#[tokio::test]
async fn test_restored_session_starts_on_dashboard() {
    let (app, _) = signed_in(FakeBackend::with_products(3)).await;
    assert_eq!(app.screen(), &Screen::Dashboard);
    assert!(app.dashboard().is_loading());
}

#[tokio::test]
async fn test_product_list_pages() {
    let mut app = products_screen(FakeBackend::with_products(12)).await;
    let table = app.products().table();
    assert_eq!(table.rows().len(), 10);
    assert_eq!(table.pagination().total_pages, 2);
    assert!(table.pager().is_some());

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.products().query().page, 2);
    wait_until(&mut app, |app| !app.products().table().is_loading()).await;
    assert_eq!(app.products().table().rows().len(), 2);
    assert_eq!(app.products().table().rows()[0].id, 11);
}

#[tokio::test]
async fn test_sort_key_reorders_list() {
    let mut app = products_screen(FakeBackend::with_products(3)).await;

    // Column 4 is the price; first press sorts ascending, second descending
    press(&mut app, KeyCode::Char('4'));
    wait_until(&mut app, |app| !app.products().table().is_loading()).await;
    press(&mut app, KeyCode::Char('4'));
    wait_until(&mut app, |app| !app.products().table().is_loading()).await;

    let ids: Vec<i64> = app.products().table().rows().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_search_filters_products() {
    let mut app = products_screen(FakeBackend::with_products(12)).await;
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "SKU-11");
    press(&mut app, KeyCode::Enter);

    wait_until(&mut app, |app| !app.products().table().is_loading()).await;
    assert_eq!(app.products().table().rows().len(), 1);
    assert_eq!(app.products().table().pagination().total_pages, 1);
    assert!(app.products().table().pager().is_none());
}

#[tokio::test]
async fn test_delete_asks_then_reloads() {
    let backend = FakeBackend::with_products(3);
    let mut app = products_screen(backend.clone()).await;

    press(&mut app, KeyCode::Char('d'));
    assert!(matches!(
        app.dialog().dialog_type,
        Some(DialogType::DeleteConfirmation { product_id: 1, .. })
    ));

    press(&mut app, KeyCode::Enter);
    assert!(!app.dialog().is_visible());
    wait_until(&mut app, |app| {
        !app.products().table().is_loading() && app.products().table().rows().len() == 2
    })
    .await;

    assert!(backend.calls().contains(&"delete 1".to_string()));
    let toast = app.toast().current().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Product deleted");
}

#[tokio::test]
async fn test_cancelled_delete_does_nothing() {
    let backend = FakeBackend::with_products(3);
    let mut app = products_screen(backend.clone()).await;

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog().is_visible());
    assert_eq!(app.active_task_count(), 0);
    assert!(!backend.calls().iter().any(|call| call.starts_with("delete")));
}

#[tokio::test]
async fn test_expired_session_returns_to_login() {
    let backend = FakeBackend::with_products(3);
    let mut app = products_screen(backend.clone()).await;

    backend.expire();
    press(&mut app, KeyCode::Char('r'));
    wait_until(&mut app, |app| app.screen() == &Screen::Login).await;

    let toast = app.toast().current().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Session expired");
}

#[tokio::test]
async fn test_create_product_from_form() {
    let backend = FakeBackend::with_products(2);
    let mut app = products_screen(backend.clone()).await;

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.screen(), &Screen::ProductCreate);

    type_text(&mut app, "Stapler");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "STP-01");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "5");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "25000");
    press(&mut app, KeyCode::Enter);
    assert!(app.product_form().is_saving());

    wait_until(&mut app, |app| {
        app.screen() == &Screen::Products && !app.products().table().is_loading()
    })
    .await;
    assert_eq!(app.products().table().rows().len(), 3);
    assert_eq!(app.toast().current().unwrap().message, "Product created");
}

#[tokio::test]
async fn test_edit_prefills_form() {
    let mut app = products_screen(FakeBackend::with_products(2)).await;
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.screen(), &Screen::ProductEdit(1));

    wait_until(&mut app, |app| !app.product_form().is_loading()).await;
    let form = app.product_form().form();
    assert_eq!(form.name, "Item 01");
    assert_eq!(form.price, "1000");
}

#[tokio::test]
async fn test_global_keys_on_signed_in_screens() {
    let (mut app, service) = signed_in(FakeBackend::with_products(1)).await;

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Help));
    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog().is_visible());

    press(&mut app, KeyCode::Char('L'));
    wait_until(&mut app, |app| app.screen() == &Screen::Login).await;
    assert!(!service.is_authenticated());

    // Back on the login form, 'q' is just text again
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_q_quits_from_dashboard() {
    let (mut app, _) = signed_in(FakeBackend::with_products(1)).await;
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}
