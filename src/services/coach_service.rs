use tracing::warn;

use crate::{
    dto::coach::{CheckoutAdviceRequest, CheckoutAdviceResponse},
    state::SharedState,
};

/// Served when the oracle is unreachable or disabled.
const CHECKOUT_FALLBACK: &str =
    "Unable to contact the coach right now. Set up a treble and leave yourself a double.";

/// Ask the oracle for a finishing route. Oracle failures degrade to the
/// canned line; this endpoint never errors on the oracle's behalf.
pub async fn checkout_advice(
    state: &SharedState,
    request: CheckoutAdviceRequest,
) -> CheckoutAdviceResponse {
    let advice = match state.oracle().checkout_advice(request.remaining).await {
        Ok(text) => text,
        Err(err) => {
            warn!(
                remaining = request.remaining,
                error = %err,
                "checkout advice unavailable; serving fallback"
            );
            CHECKOUT_FALLBACK.to_string()
        }
    };

    CheckoutAdviceResponse {
        remaining: request.remaining,
        advice,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::future::BoxFuture;

    use super::*;
    use crate::{
        config::AppConfig,
        services::oracle::{OracleError, TipOracle},
        state::{AppState, session::GameMode},
    };

    struct CannedOracle(Option<String>);

    impl TipOracle for CannedOracle {
        fn training_tip(&self, _mode: GameMode) -> BoxFuture<'_, Result<String, OracleError>> {
            Box::pin(async { Err(OracleError::Disabled) })
        }

        fn checkout_advice(&self, _remaining: u16) -> BoxFuture<'_, Result<String, OracleError>> {
            let canned = self.0.clone();
            Box::pin(async move { canned.ok_or(OracleError::Disabled) })
        }
    }

    #[tokio::test]
    async fn oracle_text_passes_straight_through() {
        let state = AppState::new(
            AppConfig::default(),
            Arc::new(CannedOracle(Some("**D20 - D10**".into()))),
        );
        let response = checkout_advice(&state, CheckoutAdviceRequest { remaining: 60 }).await;
        assert_eq!(response.advice, "**D20 - D10**");
        assert_eq!(response.remaining, 60);
    }

    #[tokio::test]
    async fn oracle_failure_serves_the_fallback() {
        let state = AppState::new(AppConfig::default(), Arc::new(CannedOracle(None)));
        let response = checkout_advice(&state, CheckoutAdviceRequest { remaining: 170 }).await;
        assert_eq!(response.advice, CHECKOUT_FALLBACK);
    }
}
