//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-checked queries against SQLite.
//!
//! # Repositories
//!
//! - [`SqliteUserRepository`] - User account storage
//! - [`SqliteNoteRepository`] - Note storage, filtering, and pagination
//! - [`SqliteCategoryRepository`] - Category management

pub mod sqlite_category_repository;
pub mod sqlite_note_repository;
pub mod sqlite_user_repository;

pub use sqlite_category_repository::SqliteCategoryRepository;
pub use sqlite_note_repository::SqliteNoteRepository;
pub use sqlite_user_repository::SqliteUserRepository;
