//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BookingService, CatalogService};

use super::modules::health::{self, HealthState};
use super::modules::items::{self, ItemsState};
use super::modules::metrics::{self, MetricsState};
use super::modules::rentals::{self, RentalsState};

/// Unified state for all routes.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub booking: Arc<BookingService>,
    pub catalog: Arc<CatalogService>,
    pub db: DatabaseConnection,
    pub metrics_handle: PrometheusHandle,
    pub started_at: Arc<Instant>,
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<ApiState> for ItemsState {
    fn from_ref(s: &ApiState) -> Self {
        ItemsState {
            catalog: Arc::clone(&s.catalog),
        }
    }
}

impl FromRef<ApiState> for RentalsState {
    fn from_ref(s: &ApiState) -> Self {
        RentalsState {
            booking: Arc::clone(&s.booking),
        }
    }
}

impl FromRef<ApiState> for HealthState {
    fn from_ref(s: &ApiState) -> Self {
        HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<ApiState> for MetricsState {
    fn from_ref(s: &ApiState) -> Self {
        MetricsState {
            handle: s.metrics_handle.clone(),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Items
        items::handlers::list_items,
        items::handlers::get_item,
        // Rentals
        rentals::handlers::list_rentals,
        rentals::handlers::create_rental,
        rentals::handlers::booked_days,
    ),
    tags(
        (name = "Items", description = "Catalog browsing"),
        (name = "Rentals", description = "Booking and booked-day summaries"),
        (name = "Health", description = "Service health")
    )
)]
struct ApiDoc;

/// Build the REST API router with all routes, Swagger UI and middleware.
pub fn create_api_router(
    booking: Arc<BookingService>,
    catalog: Arc<CatalogService>,
    db: DatabaseConnection,
    metrics_handle: PrometheusHandle,
) -> Router {
    let state = ApiState {
        booking,
        catalog,
        db,
        metrics_handle,
        started_at: Arc::new(Instant::now()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::handlers::health_check))
        .route("/metrics", get(metrics::prometheus_metrics))
        .route("/api/v1/items", get(items::handlers::list_items))
        .route("/api/v1/items/{item_id}", get(items::handlers::get_item))
        .route(
            "/api/v1/items/{item_id}/rentals",
            get(rentals::handlers::list_rentals).post(rentals::handlers::create_rental),
        )
        .route(
            "/api/v1/items/{item_id}/rentals/days",
            get(rentals::handlers::booked_days),
        )
        .layer(middleware::from_fn(metrics::track_http_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
