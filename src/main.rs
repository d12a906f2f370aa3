use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use rconnect::config::AppConfig;
use rconnect::db;
use rconnect::handlers;
use rconnect::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
    });

    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        // Public booking flow
        .route("/api/bookings", post(handlers::booking::create_booking))
        .route("/api/bookings/track", post(handlers::booking::track_booking))
        .route(
            "/api/bookings/history",
            get(handlers::booking::booking_history),
        )
        // Public invoice view (capability token in the query string)
        .route(
            "/api/invoices/:id",
            get(handlers::invoice::get_invoice_public),
        )
        // Review board
        .route(
            "/api/reviews",
            get(handlers::review::get_reviews).post(handlers::review::submit_review),
        )
        // Payments
        .route(
            "/api/payments/instructions",
            get(handlers::payment::get_instructions),
        )
        .route(
            "/api/payments/process",
            post(handlers::payment::process_payment),
        )
        // Caller identity
        .route("/api/me/role", get(handlers::profile::get_caller_role))
        .route("/api/me/is-admin", get(handlers::profile::is_caller_admin))
        .route(
            "/api/me/profile",
            get(handlers::profile::get_caller_profile).post(handlers::profile::save_caller_profile),
        )
        // Admin area
        .route(
            "/api/admin/bookings",
            get(handlers::booking::get_all_bookings),
        )
        .route(
            "/api/admin/bookings/:id",
            get(handlers::booking::get_booking),
        )
        .route(
            "/api/admin/bookings/:id/status",
            post(handlers::booking::update_booking_status),
        )
        .route(
            "/api/admin/invoices",
            get(handlers::invoice::get_all_invoices).post(handlers::invoice::create_invoice),
        )
        .route(
            "/api/admin/invoices/:id",
            get(handlers::invoice::get_invoice),
        )
        .route(
            "/api/admin/invoices/:id/paid",
            post(handlers::invoice::mark_invoice_paid),
        )
        .route(
            "/api/admin/instructions",
            post(handlers::payment::add_instruction),
        )
        .route(
            "/api/admin/instructions/:id",
            post(handlers::payment::update_instruction),
        )
        .route(
            "/api/admin/instructions/:id/delete",
            post(handlers::payment::delete_instruction),
        )
        .route("/api/admin/roles", post(handlers::profile::assign_role))
        .route(
            "/api/admin/profiles/:identity",
            get(handlers::profile::get_user_profile),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
