use actix_web::{web, HttpResponse};
use tokio::time::timeout;
use tracing::{error, info};

use ev_core::services::verification::{mask_email, EmailServiceTrait, VerificationStoreTrait};
use ev_shared::types::response::ApiResponse;

use crate::dto::verification::VerifyCodeRequest;
use crate::routes::verification::AppState;

/// Handler for `POST /api/verify-code`
///
/// Logical outcomes (matched, wrong code, nothing pending) are HTTP 200
/// with `success` reflecting the verdict; only a failing store or a
/// timeout produces a 500.
pub async fn verify_code<E, S>(
    state: web::Data<AppState<E, S>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    E: EmailServiceTrait + 'static,
    S: VerificationStoreTrait + 'static,
{
    let VerifyCodeRequest { email, code } = request.into_inner();

    info!(
        email = %mask_email(&email),
        "Processing verify-code request"
    );

    let result = timeout(
        state.request_timeout,
        state.verification_service.verify_code(&email, &code),
    )
    .await;

    match result {
        Ok(Ok(outcome)) => HttpResponse::Ok().json(ApiResponse {
            success: outcome.success,
            message: outcome.message,
        }),
        Ok(Err(e)) => {
            error!(
                email = %mask_email(&email),
                error = %e,
                "Failed to verify code"
            );
            HttpResponse::InternalServerError()
                .json(ApiResponse::failure("Failed to verify code"))
        }
        Err(_) => {
            error!(
                email = %mask_email(&email),
                "verify-code request timed out"
            );
            HttpResponse::InternalServerError()
                .json(ApiResponse::failure("Failed to verify code"))
        }
    }
}
