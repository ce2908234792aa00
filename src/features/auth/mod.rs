//! Bearer-token identity and role-level authorization.
//!
//! Tokens are issued elsewhere; this service only verifies them and gates
//! mutating routes on the caller's role level.

mod validator;

pub mod guards;
pub mod model;

pub use guards::{AccessDecision, RoleGate};
pub use validator::JwtValidator;
