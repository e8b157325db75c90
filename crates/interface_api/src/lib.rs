//! HTTP API Layer
//!
//! This crate provides the REST API for the claim-intake system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for identity, claims, and health
//! - **Auth**: Session tokens and the administrator extractor
//! - **Middleware**: Tracing and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent `{"error": ...}` responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(users, claims, config);
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::HealthCheckable;
use domain_claims::{ClaimLifecycle, ClaimRepository};
use domain_identity::{AuthSession, BootstrapGate, UserRepository};

use crate::config::ApiConfig;
use crate::handlers::{claims, health, identity};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub bootstrap: BootstrapGate,
    pub sessions: AuthSession,
    pub claims: ClaimLifecycle,
    pub stores: Vec<Arc<dyn HealthCheckable>>,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the domain services over a pair of repository implementations
    ///
    /// Works for any storage backend: the server passes PostgreSQL
    /// repositories or in-memory adapters depending on configuration.
    pub fn new<U, C>(users: Arc<U>, claims: Arc<C>, config: ApiConfig) -> Self
    where
        U: UserRepository + 'static,
        C: ClaimRepository + 'static,
    {
        let stores: Vec<Arc<dyn HealthCheckable>> = vec![users.clone(), claims.clone()];
        let users: Arc<dyn UserRepository> = users;
        let claims: Arc<dyn ClaimRepository> = claims;

        Self {
            bootstrap: BootstrapGate::new(users.clone()),
            sessions: AuthSession::new(users),
            claims: ClaimLifecycle::new(claims),
            stores,
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Wired application state
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Liveness and readiness, outside the audited API surface
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Identity routes
    let identity_routes = Router::new()
        .route("/users/check", get(identity::check_users))
        .route("/login", post(identity::login))
        .route("/admin/create", post(identity::create_admin));

    // Claims routes; list and update check the admin session themselves
    let claims_routes = Router::new()
        .route("/claims", post(claims::submit_claim).get(claims::list_claims))
        .route(
            "/claims/:id",
            get(claims::get_claim).patch(claims::update_claim),
        );

    let api_routes = Router::new()
        .merge(identity_routes)
        .merge(claims_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
