use std::net::SocketAddr;
use std::sync::{Arc, RwLock};

use anyhow::Result;
use log::info;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::cache::CatalogCache;
use crate::config::settings::AppConfig;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let dataset_path = self.config.dataset_path();
        let cache = CatalogCache::load(&dataset_path)?;
        info!(
            "Catalog ready: {} movies from {}",
            cache.movies().len(),
            dataset_path
        );

        // The cache is read-only in every request path; the lock exists
        // solely so the admin reload can swap in a rebuilt catalog.
        let state = Arc::new(AppState {
            cache: RwLock::new(cache),
            config: self.config.clone(),
        });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
