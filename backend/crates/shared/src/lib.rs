//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Common primitive value objects (typed IDs)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains. Feature crates
//! (accounts, jobs, community) define their own entities, errors and
//! ID marker types on top of this core.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
