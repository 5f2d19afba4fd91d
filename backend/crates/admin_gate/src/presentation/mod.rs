//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::AdminAppState;
pub use router::{admin_router, admin_router_generic};
