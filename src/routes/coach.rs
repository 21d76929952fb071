use axum::{Json, Router, extract::State, routing::post};
use axum_valid::Valid;

use crate::{
    dto::coach::{CheckoutAdviceRequest, CheckoutAdviceResponse},
    services::coach_service,
    state::SharedState,
};

/// Routes for the generative coaching helpers.
pub fn router() -> Router<SharedState> {
    Router::new().route("/coach/checkout", post(checkout_advice))
}

/// Suggest a finishing route for a remaining countdown score.
#[utoipa::path(
    post,
    path = "/coach/checkout",
    tag = "coach",
    request_body = CheckoutAdviceRequest,
    responses(
        (status = 200, description = "Advice, possibly a canned fallback", body = CheckoutAdviceResponse),
        (status = 400, description = "Remaining score outside the 2-170 range")
    )
)]
pub async fn checkout_advice(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<CheckoutAdviceRequest>>,
) -> Json<CheckoutAdviceResponse> {
    Json(coach_service::checkout_advice(&state, payload).await)
}
