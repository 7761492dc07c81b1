//! Utility functions for credential handling.
//!
//! - [`jwt`] - HS256 access token encoding and verification
//! - [`password`] - Salted password hashing and verification

pub mod jwt;
pub mod password;
