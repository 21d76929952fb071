use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Ask the coach for a route to finish from a remaining score.
///
/// 170 is the highest three-dart checkout; below 2 there is nothing left to
/// finish.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CheckoutAdviceRequest {
    /// Points left on the board.
    #[validate(range(min = 2, max = 170))]
    pub remaining: u16,
}

/// Advice returned by the coach, or a canned line when the oracle is down.
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutAdviceResponse {
    /// Points the advice was generated for.
    pub remaining: u16,
    /// Suggested finishing route or setup shot.
    pub advice: String,
}
