pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::AppConfig;
use crate::services::queue::JobSubmitter;
use crate::services::uploads::UploadStore;
use axum::{Router, routing::post};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::orders::submit_fritolay_order),
    components(schemas(models::OrderJob)),
    tags(
        (name = "orders", description = "Vendor order submission endpoints")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub uploads: Arc<UploadStore>,
    pub jobs: Arc<dyn JobSubmitter>,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/fritolay", post(handlers::orders::submit_fritolay_order))
        .with_state(state)
}
