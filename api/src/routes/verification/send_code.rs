use actix_web::{web, HttpResponse};
use tokio::time::timeout;
use tracing::{error, info};

use ev_core::services::verification::{mask_email, EmailServiceTrait, VerificationStoreTrait};
use ev_shared::types::response::ApiResponse;

use crate::dto::verification::SendCodeRequest;
use crate::routes::verification::AppState;

/// Handler for `POST /api/send-verification-code`
///
/// Generates and stores a fresh code for the address, replacing any
/// previous one, and emails it. Internal faults (store down, provider
/// rejecting the message, timeout) map to a 500 with a generic message;
/// a delivery fault leaves the code stored, so the client may simply
/// retry the send.
pub async fn send_code<E, S>(
    state: web::Data<AppState<E, S>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    E: EmailServiceTrait + 'static,
    S: VerificationStoreTrait + 'static,
{
    let email = request.into_inner().email;

    info!(
        email = %mask_email(&email),
        "Processing send-verification-code request"
    );

    let result = timeout(
        state.request_timeout,
        state.verification_service.send_verification_code(&email),
    )
    .await;

    match result {
        Ok(Ok(sent)) => HttpResponse::Ok().json(ApiResponse::success(sent.message)),
        Ok(Err(e)) => {
            error!(
                email = %mask_email(&email),
                error = %e,
                "Failed to send verification code"
            );
            HttpResponse::InternalServerError()
                .json(ApiResponse::failure("Failed to send verification code"))
        }
        Err(_) => {
            error!(
                email = %mask_email(&email),
                "send-verification-code request timed out"
            );
            HttpResponse::InternalServerError()
                .json(ApiResponse::failure("Failed to send verification code"))
        }
    }
}
