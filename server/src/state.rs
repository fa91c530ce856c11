//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It only carries the backend client; the widget keeps all conversation
//! state in the browser and the backend keeps its own session.

use std::sync::Arc;

use crate::proxy::Upstream;

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<Upstream>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Upstream) -> Self {
        Self { upstream: Arc::new(upstream) }
    }
}
