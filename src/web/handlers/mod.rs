//! HTML template rendering handlers for the web pages.

mod compose;
mod home;
mod login;

pub use compose::{compose_page_handler, compose_submit_handler};
pub use home::home_handler;
pub use login::{login_page_handler, login_submit_handler, logout_handler};
