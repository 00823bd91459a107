// src/bin/api_server.rs

use school_directory::infra::{config, telemetry};
use school_directory::storage::JsonFileStore;
use school_directory::transport;
use school_directory::DirectoryService;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init();

    // --- Store Initialization ---
    let data_path = config::data_path();
    info!(path = %data_path.display(), "opening school store");
    let store = Arc::new(JsonFileStore::open(data_path).await?);
    if config::reset_on_start() {
        info!("SCHOOLS_RESET_ON_START=true, wiping store");
        store.reset().await?;
    }

    // --- Service Initialization ---
    let directory = DirectoryService::new(store.clone());
    let app_state = transport::http::AppState {
        directory: Arc::new(Mutex::new(directory)),
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let addr = config::bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(e) = result {
                error!(error = %e, "server exited with error");
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    Ok(())
}
