//! Canonical page builders mirroring the server-rendered templates.
//!
//! These construct the same element layout `templates/login.html` and
//! `templates/notes.html` render, so handler tests run against the exact
//! contract the real pages provide.

use crate::browser::dom::{Display, Document, Element};
use crate::browser::login::{ERROR_MESSAGE_ID, LOGIN_CONTAINER_ID, LOGIN_FORM_ID};
use crate::browser::toggle::TOGGLE_CLASS;

/// Builds the login page: the form with its credential inputs inside the
/// token container, followed by the error line.
pub fn login_page() -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    let container = doc.append_child(root, Element::new("div").with_id(LOGIN_CONTAINER_ID));
    let form = doc.append_child(container, Element::new("form").with_id(LOGIN_FORM_ID));
    doc.append_child(form, Element::new("input").with_name("username"));
    doc.append_child(form, Element::new("input").with_name("password"));
    doc.append_child(form, Element::new("button").with_text("Sign in"));
    doc.append_child(container, Element::new("p").with_id(ERROR_MESSAGE_ID));

    doc
}

/// Builds the notes page: per note a title, a toggle control, and the
/// initially hidden content block as the control's next sibling.
pub fn notes_page(notes: &[(&str, &str)]) -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    let list = doc.append_child(root, Element::new("ul"));
    for (title, body) in notes {
        let item = doc.append_child(list, Element::new("li"));
        doc.append_child(item, Element::new("span").with_text(*title));
        doc.append_child(
            item,
            Element::new("button")
                .with_class(TOGGLE_CLASS)
                .with_text("Show"),
        );
        doc.append_child(
            item,
            Element::new("div")
                .with_text(*body)
                .with_display(Display::None),
        );
    }

    doc
}
