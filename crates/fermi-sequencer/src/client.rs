//! REST client for the Fermi sequencer.

use std::time::Duration;

use fermi_core::signing::{SignedCancelIntent, SignedOrderIntent};
use tracing::{debug, info, warn};

use crate::types::{ApiFailure, ApiSuccess, CancelOrderRequest, OrderPlacement, PlaceOrderRequest};
use crate::{Error, Result};

/// Client for the sequencer REST API.
///
/// Performs exactly one round trip per call; retry policy belongs to the
/// caller. Since signed envelopes are immutable, resubmitting one after a
/// transport failure is always safe.
pub struct SequencerClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl SequencerClient {
    /// Default sequencer API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.fermidex.com";

    pub const PLACE_ORDER_ROUTE: &'static str = "/place_order";
    pub const CANCEL_ORDER_ROUTE: &'static str = "/cancel_order";
    pub const ORDERBOOK_ROUTE: &'static str = "/get_orderbook";
    pub const HEALTH_ROUTE: &'static str = "/health";

    pub fn new(base_url: Option<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            base_url: base_url.unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
            http_client,
        }
    }

    /// Submit a signed order intent.
    pub async fn place_order_intent(
        &self,
        signed: &SignedOrderIntent,
    ) -> Result<OrderPlacement> {
        let body = PlaceOrderRequest::from(signed);
        debug!(
            order_id = body.intent.order_id,
            side = %signed.intent.side,
            price = body.intent.price,
            quantity = body.intent.quantity,
            "Submitting order intent"
        );

        let placement = self.post_intent(Self::PLACE_ORDER_ROUTE, &body).await?;
        info!(
            order_id = placement.order_id,
            status = %placement.status,
            "Order intent accepted"
        );
        Ok(placement)
    }

    /// Submit a signed cancel intent.
    pub async fn cancel_order_intent(
        &self,
        signed: &SignedCancelIntent,
    ) -> Result<OrderPlacement> {
        let body = CancelOrderRequest::from(signed);
        debug!(order_id = body.intent.order_id, "Submitting cancel intent");

        let placement = self.post_intent(Self::CANCEL_ORDER_ROUTE, &body).await?;
        info!(
            order_id = placement.order_id,
            status = %placement.status,
            "Cancel intent accepted"
        );
        Ok(placement)
    }

    /// Fetch the order book. The response shape is owned by the sequencer
    /// and passed through as-is.
    pub async fn get_orderbook(&self) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, Self::ORDERBOOK_ROUTE);
        let response = self.http_client.get(&url).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if status == 200 {
            Ok(serde_json::from_str(&text)?)
        } else {
            Err(remote_rejected(status, &text, Self::ORDERBOOK_ROUTE))
        }
    }

    /// Health probe. Any non-2xx answer reports unhealthy; failing to reach
    /// the service at all is a transport error.
    pub async fn check_health(&self) -> Result<bool> {
        let url = format!("{}{}", self.base_url, Self::HEALTH_ROUTE);
        let response = self.http_client.get(&url).send().await?;
        Ok(response.status().is_success())
    }

    async fn post_intent<B: serde::Serialize>(
        &self,
        route: &str,
        body: &B,
    ) -> Result<OrderPlacement> {
        let url = format!("{}{}", self.base_url, route);
        let response = self.http_client.post(&url).json(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if status == 200 {
            let success: ApiSuccess = serde_json::from_str(&text)?;
            Ok(success.data)
        } else {
            Err(remote_rejected(status, &text, route))
        }
    }
}

/// Map a non-200 response to `RemoteRejected`, preserving the service's own
/// message when the body matches the documented error shape.
fn remote_rejected(status: u16, text: &str, route: &str) -> Error {
    match serde_json::from_str::<ApiFailure>(text) {
        Ok(failure) => {
            warn!(
                code = failure.code,
                error = %failure.error,
                route,
                "Sequencer rejected request"
            );
            Error::RemoteRejected {
                code: failure.code,
                message: failure.message,
                error: failure.error,
            }
        }
        Err(_) => {
            let preview: String = text.chars().take(500).collect();
            warn!(
                status,
                response_preview = %preview,
                route,
                "Sequencer returned undecodable error body"
            );
            Error::RemoteRejected {
                code: status,
                message: "undecodable error body".to_string(),
                error: preview,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_used_when_unset() {
        let client = SequencerClient::new(None);
        assert_eq!(client.base_url, SequencerClient::DEFAULT_BASE_URL);

        let client = SequencerClient::new(Some("http://localhost:8080".to_string()));
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn undecodable_error_body_still_maps_to_remote_rejected() {
        let error = remote_rejected(502, "<html>bad gateway</html>", "/place_order");
        assert!(matches!(
            error,
            Error::RemoteRejected { code: 502, .. }
        ));
    }

    #[test]
    fn documented_error_body_keeps_service_message() {
        let error = remote_rejected(
            400,
            r#"{ "code": 400, "message": "rejected", "error": "bad signature" }"#,
            "/place_order",
        );
        match error {
            Error::RemoteRejected {
                code,
                message,
                error,
            } => {
                assert_eq!(code, 400);
                assert_eq!(message, "rejected");
                assert_eq!(error, "bad signature");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Nothing listens on port 1; the connection is refused immediately.
        let client = SequencerClient::new(Some("http://127.0.0.1:1".to_string()));
        let result = client.check_health().await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }
}
