//! Application state shared across handlers.

use std::sync::Arc;

use crate::backend::IspBackend;
use crate::config::DashboardConfig;

/// Application state shared across all handlers.
///
/// Immutable after startup; cloning is a reference-count bump.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DashboardConfig,
    backend: Arc<dyn IspBackend>,
}

impl AppState {
    /// Create application state over any backend implementation.
    #[must_use]
    pub fn new(config: DashboardConfig, backend: Arc<dyn IspBackend>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, backend }),
        }
    }

    /// Dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    /// The ISP backend.
    #[must_use]
    pub fn backend(&self) -> &dyn IspBackend {
        self.inner.backend.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
