//! Application factory
//!
//! Builds the Actix-web application with CORS, request logging, the
//! verification routes, a health check, and a JSON 404 fallback. Generic
//! over the email and store seams so tests can inject mocks and `main`
//! can inject the configured backends.

use actix_web::body::MessageBody;
use actix_web::{middleware::Logger, web, App, HttpResponse};

use ev_core::services::verification::{EmailServiceTrait, VerificationStoreTrait};
use ev_shared::types::response::HealthResponse;

use crate::middleware::cors::create_cors;
use crate::routes::verification::{send_code, verify_code, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<E, S>(
    app_state: web::Data<AppState<E, S>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    E: EmailServiceTrait + 'static,
    S: VerificationStoreTrait + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Verification endpoints
        .service(
            web::scope("/api")
                .route(
                    "/send-verification-code",
                    web::post().to(send_code::<E, S>),
                )
                .route("/verify-code", web::post().to(verify_code::<E, S>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "verimail-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
