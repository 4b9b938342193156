//! pmctl - a multi-tenant project management backend.
//!
//! Eight entity types (tenants, organization types, organizations,
//! employees, employee-post assignments, projects, project memberships,
//! effort records) exposed as REST collections under `/api`, each with
//! create, replace (PUT), merge (PATCH), list, get and delete.
//!
//! # Architecture
//!
//! ```text
//! HTTP request
//!     │
//!     ↓
//! api::handlers      identity contract + field validation
//!     │
//!     ↓
//! db::Stores         Repository trait: PostgreSQL or in-memory
//!     │
//!     ↓
//! db::models         table records
//! ```
//!
//! Every mutating operation follows the same shape: check the identity
//! contract, check existence, persist through the store, return the
//! persisted record. There is no workflow logic, no cross-entity
//! invariant, and no tenant-scoping filter; `tenant_id` is stored as
//! given.
//!
//! # Lifecycle
//!
//! 1. [`Application::new`] connects the configured store backend and runs
//!    migrations (PostgreSQL only)
//! 2. [`Application::serve`] binds the TCP port and handles requests
//! 3. On SIGTERM/Ctrl-C the server drains in-flight requests and closes
//!    the pool

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod openapi;
pub mod telemetry;
#[cfg(test)]
pub mod test_utils;
pub mod types;

use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, patch, post, put},
};
pub use config::Config;
use openapi::ApiDoc;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use types::{EffortRecordId, EmpId, EmpPostId, OrgId, OrgTypeId, ProjectId, ProjectMemberId, TenantId};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub stores: db::Stores,
    pub config: Config,
}

/// Get the pmctl database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    if config.cors.allowed_origins.iter().any(|origin| origin == "*") {
        return Ok(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any));
    }

    let mut origins = Vec::new();
    for origin in &config.cors.allowed_origins {
        origins.push(origin.parse::<HeaderValue>()?);
    }
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Build the application router: entity collections under `/api`, a
/// liveness endpoint at `/healthz`, and OpenAPI documentation at `/docs`.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        // Tenants
        .route("/tenants", get(api::handlers::tenants::list_tenants))
        .route("/tenants", post(api::handlers::tenants::create_tenant))
        .route("/tenants/{id}", get(api::handlers::tenants::get_tenant))
        .route("/tenants/{id}", put(api::handlers::tenants::replace_tenant))
        .route("/tenants/{id}", patch(api::handlers::tenants::merge_tenant))
        .route("/tenants/{id}", delete(api::handlers::tenants::delete_tenant))
        // Organization types
        .route("/org-types", get(api::handlers::org_types::list_org_types))
        .route("/org-types", post(api::handlers::org_types::create_org_type))
        .route("/org-types/{id}", get(api::handlers::org_types::get_org_type))
        .route("/org-types/{id}", put(api::handlers::org_types::replace_org_type))
        .route("/org-types/{id}", patch(api::handlers::org_types::merge_org_type))
        .route("/org-types/{id}", delete(api::handlers::org_types::delete_org_type))
        // Organizations
        .route("/orgs", get(api::handlers::orgs::list_orgs))
        .route("/orgs", post(api::handlers::orgs::create_org))
        .route("/orgs/{id}", get(api::handlers::orgs::get_org))
        .route("/orgs/{id}", put(api::handlers::orgs::replace_org))
        .route("/orgs/{id}", patch(api::handlers::orgs::merge_org))
        .route("/orgs/{id}", delete(api::handlers::orgs::delete_org))
        // Employees
        .route("/emps", get(api::handlers::emps::list_emps))
        .route("/emps", post(api::handlers::emps::create_emp))
        .route("/emps/{id}", get(api::handlers::emps::get_emp))
        .route("/emps/{id}", put(api::handlers::emps::replace_emp))
        .route("/emps/{id}", patch(api::handlers::emps::merge_emp))
        .route("/emps/{id}", delete(api::handlers::emps::delete_emp))
        // Employee-post assignments
        .route("/emp-posts", get(api::handlers::emp_posts::list_emp_posts))
        .route("/emp-posts", post(api::handlers::emp_posts::create_emp_post))
        .route("/emp-posts/{id}", get(api::handlers::emp_posts::get_emp_post))
        .route("/emp-posts/{id}", put(api::handlers::emp_posts::replace_emp_post))
        .route("/emp-posts/{id}", patch(api::handlers::emp_posts::merge_emp_post))
        .route("/emp-posts/{id}", delete(api::handlers::emp_posts::delete_emp_post))
        // Projects
        .route("/projects", get(api::handlers::projects::list_projects))
        .route("/projects", post(api::handlers::projects::create_project))
        .route("/projects/{id}", get(api::handlers::projects::get_project))
        .route("/projects/{id}", put(api::handlers::projects::replace_project))
        .route("/projects/{id}", patch(api::handlers::projects::merge_project))
        .route("/projects/{id}", delete(api::handlers::projects::delete_project))
        // Project memberships
        .route("/project-members", get(api::handlers::project_members::list_project_members))
        .route("/project-members", post(api::handlers::project_members::create_project_member))
        .route("/project-members/{id}", get(api::handlers::project_members::get_project_member))
        .route("/project-members/{id}", put(api::handlers::project_members::replace_project_member))
        .route("/project-members/{id}", patch(api::handlers::project_members::merge_project_member))
        .route("/project-members/{id}", delete(api::handlers::project_members::delete_project_member))
        // Effort records
        .route("/effort-records", get(api::handlers::effort_records::list_effort_records))
        .route("/effort-records", post(api::handlers::effort_records::create_effort_record))
        .route("/effort-records/{id}", get(api::handlers::effort_records::get_effort_record))
        .route("/effort-records/{id}", put(api::handlers::effort_records::replace_effort_record))
        .route("/effort-records/{id}", patch(api::handlers::effort_records::merge_effort_record))
        .route("/effort-records/{id}", delete(api::handlers::effort_records::delete_effort_record));

    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .nest("/api", api_routes)
        .with_state(state.clone())
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    let cors_layer = create_cors_layer(&state.config)?;

    Ok(router.layer(TraceLayer::new_for_http()).layer(cors_layer))
}

/// A fully initialized service: stores connected, migrations applied,
/// router built.
pub struct Application {
    router: Router,
    config: Config,
    pool: Option<PgPool>,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting pmctl with configuration: {:#?}", config);

        let (stores, pool) = match &config.database {
            config::DatabaseConfig::Memory => {
                info!("Using in-memory stores: data will be lost on shutdown");
                (db::Stores::memory(), None)
            }
            config::DatabaseConfig::External { url } => {
                info!("Using external database");
                let pool = PgPool::connect(url).await?;
                migrator().run(&pool).await?;
                (db::Stores::postgres(&pool), Some(pool))
            }
        };

        let state = AppState {
            stores,
            config: config.clone(),
        };
        let router = build_router(state)?;

        Ok(Self { router, config, pool })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("pmctl listening on http://{bind_addr}");

        // Run the server with graceful shutdown
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        if let Some(pool) = self.pool {
            info!("Closing database connections...");
            pool.close().await;
        }

        Ok(())
    }
}
