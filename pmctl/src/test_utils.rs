//! Test utilities for exercising the API end to end.

use crate::config::Config;
use crate::db::Stores;
use crate::{AppState, build_router};
use axum_test::TestServer;

pub fn create_test_config() -> Config {
    Config::default()
}

/// A test server over a fresh in-memory store bundle.
pub fn create_test_app() -> TestServer {
    let state = AppState {
        stores: Stores::memory(),
        config: create_test_config(),
    };
    let router = build_router(state).expect("Failed to build router");
    TestServer::new(router).expect("Failed to create test server")
}
