//! Application State
//!
//! `AppState` is built once at startup and injected into handlers through
//! axum's `State` extractor; repositories receive the shared pool rather
//! than opening connections of their own. The `FromRef` impls let handlers
//! that only need the pool (or only the thumbnail store) extract just that
//! piece.

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::storage::ThumbnailStore;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub thumbnails: ThumbnailStore,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for ThumbnailStore {
    fn from_ref(state: &AppState) -> Self {
        state.thumbnails.clone()
    }
}
