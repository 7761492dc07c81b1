//! Page session: attaches both page clients to a document.

use crate::browser::api::TokenClient;
use crate::browser::dom::{Document, NodeId};
use crate::browser::login::LoginHandler;
use crate::browser::toggle::NoteToggleHandler;

/// One page's client wiring: the document plus whichever handlers its
/// elements called for.
///
/// [`attach`](Self::attach) is the page-ready hook: it wires the login
/// handler if the page has a login form, and collects the toggle controls
/// present at that moment. The two handlers are independent and share no
/// state beyond the document itself.
pub struct PageSession {
    doc: Document,
    login: Option<LoginHandler>,
    toggles: NoteToggleHandler,
}

impl PageSession {
    /// Wires the page clients against `doc`.
    pub fn attach(doc: Document, client: TokenClient) -> Self {
        let login = LoginHandler::wire(&doc, client);
        let toggles = NoteToggleHandler::attach(&doc);

        tracing::info!(
            login_form = login.is_some(),
            toggle_controls = toggles.controls().len(),
            "notes page client attached"
        );

        Self {
            doc,
            login,
            toggles,
        }
    }

    /// Submits the login form with the credentials currently in its inputs.
    ///
    /// Returns `false` when the page has no wired login form. Submissions
    /// are serialized: the call runs to completion before another can start.
    pub async fn submit_login(&mut self) -> bool {
        match &mut self.login {
            Some(handler) => {
                handler.submit(&mut self.doc).await;
                true
            }
            None => false,
        }
    }

    /// Handles a click on a toggle control.
    pub fn click_toggle(&mut self, control: NodeId) {
        self.toggles.click(&mut self.doc, control);
    }

    /// The toggle controls wired at attach time, in document order.
    pub fn toggle_controls(&self) -> Vec<NodeId> {
        self.toggles.controls().to_vec()
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }
}
