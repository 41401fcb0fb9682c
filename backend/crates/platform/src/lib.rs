//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, pepper support)
//! - Bearer credential extraction from request headers

pub mod bearer;
pub mod password;
