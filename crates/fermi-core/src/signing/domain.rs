//! Domain separation for intent signing.
//!
//! Every signature in the protocol is over `prefix || encode(intent)`: a
//! fixed ASCII literal naming the protocol and message kind, followed by the
//! canonical encoding. The prefix is what stops a valid order signature from
//! being replayed as a cancel (or any other message type) signature.
//!
//! Protocol v1 signs the prefixed message directly. An earlier deployment
//! instead signed a sha256 digest of the same bytes; the two schemes do not
//! interoperate, and the digest form is not supported here. The scheme is
//! fixed at compile time; there is no runtime hash configuration.

use crate::intent::{CancelOrderIntent, OrderIntent};

/// Prefix for order intent auth messages. Identical across every
/// implementation of the protocol; a single changed byte breaks
/// verification, so treat this as a protocol version identifier.
pub const ORDER_INTENT_PREFIX: &str = "FRM_DEX_ORDER:";

/// Prefix for cancel intent auth messages.
pub const CANCEL_INTENT_PREFIX: &str = "FRM_DEX_CANCEL:";

/// Build the exact byte sequence that is signed for an order intent.
pub fn order_auth_message(intent: &OrderIntent) -> Vec<u8> {
    prefixed(ORDER_INTENT_PREFIX, intent.encode())
}

/// Build the exact byte sequence that is signed for a cancel intent.
pub fn cancel_auth_message(intent: &CancelOrderIntent) -> Vec<u8> {
    prefixed(CANCEL_INTENT_PREFIX, intent.encode())
}

fn prefixed(prefix: &str, encoded: Vec<u8>) -> Vec<u8> {
    let mut message = Vec::with_capacity(prefix.len() + encoded.len());
    message.extend_from_slice(prefix.as_bytes());
    message.extend_from_slice(&encoded);
    message
}
