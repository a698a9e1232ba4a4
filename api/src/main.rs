use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use tracing::info;

use ev_core::services::verification::{VerificationService, VerificationServiceConfig};
use ev_infra::{cache::create_store, email::create_email_service};
use ev_shared::config::AppConfig;

mod app;
mod dto;
mod middleware;
mod routes;

use routes::verification::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Initialize structured logging (also bridges `log` records from
    // the actix Logger middleware)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting VeriMail API server");

    let config = AppConfig::from_env();

    // Wire up the backends selected by configuration
    let store = create_store(&config.store)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let email_service = create_email_service(&config.email, &config.verification);

    let verification_service = Arc::new(VerificationService::new(
        Arc::new(email_service),
        Arc::new(store),
        VerificationServiceConfig {
            code_length: config.verification.code_length,
            code_expiration_minutes: config.verification.code_expiry_minutes,
        },
    ));

    let request_timeout = Duration::from_secs(config.server.request_timeout);
    let app_state = web::Data::new(AppState::new(verification_service, request_timeout));

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || app::create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
