//! Service layer sitting between the routes and the state machines.

/// Checkout advice pass-through with fallback.
pub mod coach_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Generative-text oracle boundary.
pub mod oracle;
/// Session lifecycle and turn submission.
pub mod practice_service;
/// Server-Sent Events message generation.
pub mod sse_events;
/// Server-Sent Events broadcasting service.
pub mod sse_service;
