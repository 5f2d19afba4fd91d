//! Shared Kernel
//!
//! Vocabulary shared by every backend crate of the village portal:
//! - The unified application error and its result alias
//! - Error classification mapped onto HTTP status codes
//!
//! Domain crates keep their own error enums and convert into [`error::app_error::AppError`]
//! at the boundary.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
