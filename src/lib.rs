//! Supplier API Library
//!
//! This crate provides supplier master-data management: suppliers,
//! categories, contacts, addresses, documents and performance ratings.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod auth;
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod services;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let services = handlers::AppServices::new(db.clone());
        Self {
            db,
            config,
            services,
        }
    }
}

/// Builds the application router: health endpoints at the root, the
/// resource routers nested under `/v1` behind the bearer guard.
pub fn build_router(state: Arc<AppState>) -> Router {
    let v1 = Router::new()
        .nest("/suppliers", handlers::suppliers::routes())
        .nest("/supplier-categories", handlers::categories::routes())
        .nest("/supplier-contacts", handlers::contacts::routes())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    Router::new()
        .merge(handlers::health::routes())
        .nest("/v1", v1)
        .with_state(state)
}
