//! Repository traits abstracting data access.
//!
//! The traits here are the storage contract the services program against.
//! Concrete SQLite implementations live in `crate::infrastructure::persistence`;
//! `mockall` generates mock implementations for unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User account operations
//! - [`NoteRepository`] - Note CRUD, filtering, and pagination
//! - [`CategoryRepository`] - Category management
//!
//! Integration tests in `tests/repository_*.rs` exercise the SQLite
//! implementations directly.

pub mod category_repository;
pub mod note_repository;
pub mod user_repository;

pub use category_repository::CategoryRepository;
pub use note_repository::NoteRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use note_repository::MockNoteRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
