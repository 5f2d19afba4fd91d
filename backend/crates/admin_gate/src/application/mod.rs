//! Application Layer
//!
//! Login surface orchestration, navigation and sign-out.

pub mod config;
pub mod login_surface;
pub mod navigation;
pub mod sign_out;
pub mod surface_host;

// Re-exports
pub use config::GateConfig;
pub use login_surface::{DemoHint, FormView, LoginSurface, Render, SubmitOutcome};
pub use navigation::{AccountAffordance, NavItem, Navigation, navigation_for};
pub use sign_out::SignOutUseCase;
pub use surface_host::{Entry, LoginSurfaceHost};
