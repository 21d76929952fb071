use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Bullseye Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::sse::event_stream,
        crate::routes::practice::create_session,
        crate::routes::practice::list_sessions,
        crate::routes::practice::get_session,
        crate::routes::practice::delete_session,
        crate::routes::practice::submit_turn,
        crate::routes::practice::submit_attempt,
        crate::routes::practice::record_hit,
        crate::routes::practice::record_miss,
        crate::routes::practice::restart_session,
        crate::routes::coach::checkout_advice,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::practice::CreateSessionRequest,
            crate::dto::practice::TurnRequest,
            crate::dto::practice::AttemptRequest,
            crate::dto::practice::HitRequest,
            crate::dto::practice::TurnResponse,
            crate::dto::coach::CheckoutAdviceRequest,
            crate::dto::coach::CheckoutAdviceResponse,
            crate::dto::session::SessionSnapshot,
            crate::dto::session::SessionSummary,
        )
    ),
    tags(
        (name = "practice", description = "Practice session lifecycle and scoring"),
        (name = "coach", description = "Generative checkout advice"),
        (name = "health", description = "Health check endpoints"),
        (name = "sse", description = "Server-sent events stream"),
    )
)]
pub struct ApiDoc;
