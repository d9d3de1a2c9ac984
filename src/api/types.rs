//! Shared API types: request context and common response shapes.

use std::path::PathBuf;

use serde::Serialize;

use crate::db::Store;

// ═══════════════════════════════════════════════════════════
// ApiContext
// ═══════════════════════════════════════════════════════════

/// Shared context for API handlers, cloned into each route via
/// `with_state`.
#[derive(Clone)]
pub struct ApiContext {
    /// Handle to the SQLite store backing all entities.
    pub store: Store,
    /// Directory where uploaded doctor credential files are kept.
    pub uploads_dir: PathBuf,
}

impl ApiContext {
    pub fn new(store: Store, uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            uploads_dir: uploads_dir.into(),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Common response shapes
// ═══════════════════════════════════════════════════════════

/// Plain confirmation body used by endpoints whose legacy clients
/// key on an exact `message` string.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
