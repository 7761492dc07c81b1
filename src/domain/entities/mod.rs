//! Core domain entities for the notes service.
//!
//! Plain data structures describing what the system stores: accounts, the
//! notes they own, and the categories used to group them. No business logic
//! lives here.
//!
//! # Entity Types
//!
//! - [`User`] - A registered account
//! - [`Note`] - A note owned by a user
//! - [`Category`] - A per-user grouping of notes
//!
//! # Creation and Update Types
//!
//! Each entity pairs with an input struct so creation data cannot be
//! confused with stored rows: `NewUser`, `NewNote`, and `NewCategory` for
//! inserts, plus [`NotePatch`] for partial updates where a field may be
//! absent, set to null, or set to a value.

pub mod category;
pub mod note;
pub mod user;

pub use category::{Category, NewCategory};
pub use note::{NewNote, Note, NoteFilter, NotePatch};
pub use user::{NewUser, User};
