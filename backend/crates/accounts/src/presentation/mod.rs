//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AccountsState;
pub use middleware::{RoleGate, require_role};
pub use router::{accounts_router, accounts_router_generic};
