//! Application layer with the use-case services.
//!
//! Services coordinate domain repositories and enforce business rules. They
//! are generic over the repository traits so unit tests can substitute mocks.

pub mod services;
