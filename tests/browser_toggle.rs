//! Session-level tests for the note visibility toggles.

use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use notes_app::browser::login::{ERROR_MESSAGE_ID, LOGIN_FAILED_MESSAGE, LOGIN_FORM_ID};
use notes_app::browser::{Display, Element, PageSession, TokenClient, page};
use serde_json::json;

fn offline_client() -> TokenClient {
    TokenClient::new("http://127.0.0.1:9")
}

#[tokio::test]
async fn test_toggle_round_trip_through_session() {
    let doc = page::notes_page(&[("Groceries", "milk, eggs"), ("Trip", "pack bags")]);
    let mut session = PageSession::attach(doc, offline_client());

    let controls = session.toggle_controls();
    assert_eq!(controls.len(), 2);

    let first = session.document().next_element_sibling(controls[0]).unwrap();
    let second = session.document().next_element_sibling(controls[1]).unwrap();

    // Hidden at render time.
    assert_eq!(session.document().element(first).display, Display::None);

    // Click shows, click again hides; the other note never moves.
    session.click_toggle(controls[0]);
    assert_eq!(session.document().element(first).display, Display::Block);
    assert_eq!(session.document().element(second).display, Display::None);

    session.click_toggle(controls[0]);
    assert_eq!(session.document().element(first).display, Display::None);
}

#[tokio::test]
async fn test_attach_on_page_without_controls() {
    let mut session = PageSession::attach(page::login_page(), offline_client());

    // Nothing to toggle, but the login form is wired and usable.
    assert!(session.toggle_controls().is_empty());
    assert!(session.submit_login().await);
}

#[tokio::test]
async fn test_attach_on_empty_page() {
    let mut session = PageSession::attach(page::notes_page(&[]), offline_client());

    assert!(session.toggle_controls().is_empty());
    assert!(!session.submit_login().await);
}

#[tokio::test]
async fn test_login_and_toggles_coexist_on_one_page() {
    // A page carrying both contracts: notes with toggles plus a login form.
    let mut doc = page::notes_page(&[("Groceries", "milk")]);
    let root = doc.root();
    let form = doc.append_child(root, Element::new("form").with_id(LOGIN_FORM_ID));
    doc.append_child(
        form,
        Element::new("input").with_name("username").with_value("alice"),
    );
    doc.append_child(
        form,
        Element::new("input").with_name("password").with_value("wrong"),
    );
    doc.append_child(root, Element::new("p").with_id(ERROR_MESSAGE_ID));

    let app = Router::new().route(
        "/token",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "unauthorized" })),
            )
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut session = PageSession::attach(doc, TokenClient::new(origin));
    let control = session.toggle_controls()[0];

    // A failed login writes the error line...
    assert!(session.submit_login().await);
    let error = session.document().get_element_by_id(ERROR_MESSAGE_ID).unwrap();
    assert_eq!(session.document().text_content(error), LOGIN_FAILED_MESSAGE);

    // ...and the toggles keep working independently.
    let content = session.document().next_element_sibling(control).unwrap();
    session.click_toggle(control);
    assert_eq!(session.document().element(content).display, Display::Block);
}
