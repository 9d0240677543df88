//! Wire types for the sequencer REST API.
//!
//! Request bodies carry the intent as an explicit field map (numeric
//! fields as JSON numbers, keys as base-58 text) plus the hex-encoded
//! 64-byte signature. Response bodies are typed with a closed field set;
//! anything the service adds or drops is rejected at this boundary rather
//! than silently ignored.

use fermi_core::intent::{CancelOrderIntent, OrderIntent, OrderSide};
use fermi_core::signing::{SignedCancelIntent, SignedOrderIntent};
use serde::{Deserialize, Serialize};

/// JSON form of an order intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderIntentBody {
    pub order_id: u64,
    pub owner: String,
    pub side: OrderSide,
    pub price: u64,
    pub quantity: u64,
    pub expiry: u64,
    pub base_mint: String,
    pub quote_mint: String,
}

impl From<&OrderIntent> for OrderIntentBody {
    fn from(intent: &OrderIntent) -> Self {
        Self {
            order_id: intent.order_id,
            owner: intent.owner.to_string(),
            side: intent.side,
            price: intent.price,
            quantity: intent.quantity,
            expiry: intent.expiry,
            base_mint: intent.base_mint.to_string(),
            quote_mint: intent.quote_mint.to_string(),
        }
    }
}

/// Body of `POST /place_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceOrderRequest {
    pub intent: OrderIntentBody,
    pub signature: String,
}

impl From<&SignedOrderIntent> for PlaceOrderRequest {
    fn from(signed: &SignedOrderIntent) -> Self {
        Self {
            intent: (&signed.intent).into(),
            signature: signed.signature_hex(),
        }
    }
}

/// JSON form of a cancel intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CancelIntentBody {
    pub order_id: u64,
    pub owner: String,
}

impl From<&CancelOrderIntent> for CancelIntentBody {
    fn from(intent: &CancelOrderIntent) -> Self {
        Self {
            order_id: intent.order_id,
            owner: intent.owner.to_string(),
        }
    }
}

/// Body of `POST /cancel_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CancelOrderRequest {
    pub intent: CancelIntentBody,
    pub signature: String,
}

impl From<&SignedCancelIntent> for CancelOrderRequest {
    fn from(signed: &SignedCancelIntent) -> Self {
        Self {
            intent: (&signed.intent).into(),
            signature: signed.signature_hex(),
        }
    }
}

/// Successful response body (HTTP 200).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSuccess {
    pub code: u16,
    pub message: String,
    pub data: OrderPlacement,
}

/// Acknowledgement carried in a success response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderPlacement {
    pub order_id: u64,
    pub status: String,
}

/// Error body returned with any non-200 status.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiFailure {
    pub code: u16,
    pub message: String,
    pub error: String,
}
