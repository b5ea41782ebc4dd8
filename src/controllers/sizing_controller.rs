use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::config::Config;
use crate::models::sizing::{ApiInfo, ErrorBody, SizingRequest, SizingResponse};
use crate::services::sizing_calculator::{self, SizingError};

/// GET /
/// Service liveness and info
///
/// Static payload confirming the service is up and pointing at the API docs.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service info", body = ApiInfo)
    )
)]
pub async fn service_info() -> impl IntoResponse {
    Json(ApiInfo {
        message: "Solar System Sizing API",
        version: env!("CARGO_PKG_VERSION"),
        docs: "/scalar",
    })
}

/// POST /calculate
/// Size a residential solar installation
///
/// Takes the household's average monthly consumption and returns the
/// recommended system size, panel count, cost, savings and payback period.
/// Stateless: every request is computed independently from the fixed
/// parameter table loaded at startup.
#[utoipa::path(
    post,
    path = "/calculate",
    request_body = SizingRequest,
    responses(
        (status = 200, description = "Sizing result", body = SizingResponse),
        (status = 400, description = "Non-positive consumption or malformed body", body = ErrorBody),
        (status = 500, description = "Sizing parameters misconfigured", body = ErrorBody)
    )
)]
pub async fn calculate_system(
    State(config): State<Config>,
    payload: Result<Json<SizingRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Missing/malformed `monthly_kwh` never reaches the calculator; it is
    // a client error just like a non-positive value.
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::warn!("rejected /calculate body: {rejection}");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    match sizing_calculator::calculate(request.monthly_kwh, &config.sizing) {
        Ok(result) => (StatusCode::OK, Json(SizingResponse::from(result))).into_response(),
        Err(err @ SizingError::InvalidInput(_)) => {
            tracing::warn!(monthly_kwh = request.monthly_kwh, "invalid sizing input");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
        Err(err @ SizingError::InvalidConfiguration) => {
            tracing::error!("sizing parameter table is misconfigured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
