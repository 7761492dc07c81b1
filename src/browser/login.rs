//! Login form handler.

use crate::browser::api::{TokenClient, TokenError};
use crate::browser::dom::{Document, Element, NodeId};

/// Id of the login form element.
pub const LOGIN_FORM_ID: &str = "login-form";
/// Id of the container that receives the token display on success.
pub const LOGIN_CONTAINER_ID: &str = "login-container";
/// Id of the element that receives failure text.
pub const ERROR_MESSAGE_ID: &str = "error-message";

/// Shown when the endpoint rejected the credentials.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
/// Shown when the request itself failed (network, timeout, bad body).
pub const LOGIN_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Handles login form submissions: reads the credentials from the form,
/// exchanges them for a token, and writes the outcome back into the page.
///
/// Submissions are serialized per handler: [`submit`](Self::submit) takes
/// `&mut self`, so a second submission cannot start while one is in flight.
pub struct LoginHandler {
    client: TokenClient,
    form: NodeId,
}

impl LoginHandler {
    /// Wires the handler to the page's login form.
    ///
    /// Returns `None` when the page has no `login-form` element; pages
    /// without a login form simply get no login behavior.
    pub fn wire(doc: &Document, client: TokenClient) -> Option<Self> {
        let form = doc.get_element_by_id(LOGIN_FORM_ID)?;
        Some(Self { client, form })
    }

    /// Handles one form submission.
    ///
    /// Reads the `username` and `password` inputs, issues exactly one POST
    /// to the token endpoint, and mutates at most one element:
    ///
    /// - success → the `login-container` content becomes
    ///   `Access Token: {token}`
    /// - rejected credentials → the `error-message` text becomes
    ///   [`LOGIN_FAILED_MESSAGE`]
    /// - any other failure → the `error-message` text becomes
    ///   [`LOGIN_ERROR_MESSAGE`]
    ///
    /// A missing target element downgrades the page mutation to a log line.
    pub async fn submit(&mut self, doc: &mut Document) {
        let (Some(username), Some(password)) = (
            doc.input_value(self.form, "username"),
            doc.input_value(self.form, "password"),
        ) else {
            tracing::warn!("login form is missing its credential inputs");
            return;
        };

        match self.client.request_token(&username, &password).await {
            Ok(token) => {
                tracing::info!("login successful");
                render_token(doc, &token);
            }
            Err(TokenError::Rejected { status, body }) => {
                tracing::error!(%status, %body, "login failed");
                render_error(doc, LOGIN_FAILED_MESSAGE);
            }
            Err(TokenError::Request(error)) => {
                tracing::error!(%error, "error during login request");
                render_error(doc, LOGIN_ERROR_MESSAGE);
            }
        }
    }
}

/// Replaces the login container's content with the token display.
fn render_token(doc: &mut Document, token: &str) {
    let Some(container) = doc.get_element_by_id(LOGIN_CONTAINER_ID) else {
        tracing::error!("login container not found");
        return;
    };

    doc.clear_children(container);
    doc.element_mut(container).text.clear();
    doc.append_child(
        container,
        Element::new("p").with_text(format!("Access Token: {token}")),
    );
}

/// Sets the error line's text; silent when the page has no error element.
fn render_error(doc: &mut Document, message: &str) {
    if let Some(target) = doc.get_element_by_id(ERROR_MESSAGE_ID) {
        doc.set_text(target, message);
    }
}
