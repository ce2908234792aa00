//! Role-level authorization gate for mutating routes.
//!
//! The gate is composed ahead of a handler with
//! `axum::middleware::from_fn_with_state(gate, require_role_level)`. It reads
//! the identity attached by the identity middleware, evaluates an
//! [`AccessDecision`] and short-circuits with 403 on denial, so the handler
//! body never runs for callers below the threshold.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;

/// Outcome of evaluating a caller against a [`RoleGate`]
#[derive(Debug, Clone)]
pub enum AccessDecision {
    Allowed(AuthenticatedUser),
    Denied(String),
}

/// Minimum role level required to pass
#[derive(Debug, Clone, Copy)]
pub struct RoleGate {
    pub min_level: i32,
}

impl RoleGate {
    pub fn new(min_level: i32) -> Self {
        Self { min_level }
    }

    pub fn authorize(&self, user: Option<&AuthenticatedUser>) -> AccessDecision {
        match user {
            None => AccessDecision::Denied("Not authenticated".to_string()),
            Some(user) if !user.has_role_level(self.min_level) => AccessDecision::Denied(format!(
                "Insufficient permissions. Required role level: {}",
                self.min_level
            )),
            Some(user) => AccessDecision::Allowed(user.clone()),
        }
    }
}

pub async fn require_role_level(
    State(gate): State<RoleGate>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    match gate.authorize(req.extensions().get::<AuthenticatedUser>()) {
        AccessDecision::Allowed(_) => Ok(next.run(req).await),
        AccessDecision::Denied(reason) => {
            tracing::warn!(
                "Access denied: {} {} ({})",
                req.method(),
                req.uri().path(),
                reason
            );
            Err(AppError::Forbidden(reason))
        }
    }
}
