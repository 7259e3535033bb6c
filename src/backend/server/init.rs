//! Application construction: connect the datastore, assemble the shared
//! state and build the router.

use axum::Router;

use crate::backend::routes::create_router;
use crate::backend::server::config::{connect_database, AppConfig};
use crate::backend::server::state::AppState;
use crate::backend::storage::ThumbnailStore;

pub async fn create_app(config: &AppConfig) -> Result<Router, sqlx::Error> {
    let db = connect_database(config).await?;

    let thumbnails = ThumbnailStore::new(&config.thumbnail_dir, &config.public_base_url);

    let state = AppState { db, thumbnails };

    Ok(create_router(state))
}
