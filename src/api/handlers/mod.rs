//! API endpoint handlers, one module per resource.

pub mod categories;
pub mod health;
pub mod notes;
pub mod token;
pub mod users;

pub use categories::{
    create_category_handler, delete_category_handler, list_categories_handler,
    rename_category_handler,
};
pub use health::health_handler;
pub use notes::{
    create_note_handler, delete_note_handler, get_note_handler, list_notes_handler,
    update_note_handler,
};
pub use token::token_handler;
pub use users::register_handler;
