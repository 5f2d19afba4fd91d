//! Entity Module

pub mod credentials;
pub mod submission_state;
