//! Page client layer: the typed counterpart of the notes app's browser
//! script.
//!
//! Two independent page behaviors over a small document model:
//!
//! - [`login::LoginHandler`] intercepts login form submissions, exchanges
//!   the credentials at `/token` via [`api::TokenClient`], and writes the
//!   token display or one of two fixed error strings back into the page.
//! - [`toggle::NoteToggleHandler`] wires every `toggle-note` control present
//!   at attach time and flips its sibling content block between hidden and
//!   shown.
//!
//! [`session::PageSession`] is the page-ready hook that attaches both.
//!
//! # Modules
//!
//! - [`dom`] - Arena-backed element tree with the handful of DOM operations
//!   the handlers need
//! - [`api`] - Async token endpoint client (reqwest, explicit timeout)
//! - [`login`] - Login form handler
//! - [`toggle`] - Note visibility handler
//! - [`page`] - Builders mirroring the server templates
//! - [`session`] - Attach-time wiring

pub mod api;
pub mod dom;
pub mod login;
pub mod page;
pub mod session;
pub mod toggle;

pub use api::{TokenClient, TokenError};
pub use dom::{Display, Document, Element, NodeId};
pub use login::LoginHandler;
pub use session::PageSession;
pub use toggle::NoteToggleHandler;
