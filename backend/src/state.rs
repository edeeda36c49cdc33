//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. It carries no
//! mutable data of its own; all state lives in the store.

use crate::config::AppConfig;
use crate::store::Store;
use std::sync::Arc;

/// Shared application state
///
/// All fields are `Arc`s, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Store opened at startup and closed on shutdown
    pub store: Arc<dyn Store>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state around an opened store
    pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Get a reference to the store
    #[inline]
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
