//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, Base64)
//! - Password hashing (Argon2id) with a configurable validation policy

pub mod crypto;
pub mod password;
