//! Order intent types and the canonical wire codec.
//!
//! The sequencer and the on-chain custody program each re-implement this
//! byte layout independently and must agree with it bit-for-bit, so the
//! field order and widths here are frozen. Integers are little-endian,
//! identities are raw 32-byte keys, and there are no length prefixes.

use borsh::{BorshDeserialize, BorshSerialize};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::{Error, Result};

/// Default order lifetime applied by the builder when no expiry is given.
pub const DEFAULT_EXPIRY_SECS: u64 = 3600;

/// Side of an order. One byte on the wire: 0 = Buy, 1 = Sell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Wire byte for this side.
    pub fn as_u8(&self) -> u8 {
        match self {
            OrderSide::Buy => 0,
            OrderSide::Sell => 1,
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "Buy"),
            OrderSide::Sell => write!(f, "Sell"),
        }
    }
}

/// A proposed trade, prior to any matching.
///
/// Field order is the wire order. Changing it, or any field width, requires
/// a protocol version bump.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct OrderIntent {
    pub order_id: u64,
    pub owner: Pubkey,
    pub side: OrderSide,
    pub price: u64,
    pub quantity: u64,
    pub expiry: u64,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
}

impl OrderIntent {
    /// Exact wire span: 8 + 32 + 1 + 8 + 8 + 8 + 32 + 32.
    pub const ENCODED_LEN: usize = 129;

    /// Canonical fixed-layout encoding.
    pub fn encode(&self) -> Vec<u8> {
        borsh::to_vec(self).unwrap()
    }

    /// Decode the canonical layout. Rejects any input whose length is not
    /// exactly [`Self::ENCODED_LEN`] or whose side byte is neither 0 nor 1.
    /// Numeric values are not range-checked here; that is [`Self::validate`].
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::ENCODED_LEN {
            return Err(Error::MalformedIntent {
                reason: format!(
                    "expected {} bytes, got {}",
                    Self::ENCODED_LEN,
                    bytes.len()
                ),
            });
        }
        Self::try_from_slice(bytes).map_err(|e| Error::MalformedIntent {
            reason: e.to_string(),
        })
    }

    /// Business-rule validation, run before any signing.
    pub fn validate(&self) -> Result<()> {
        if self.price == 0 {
            return Err(invalid("price must be positive"));
        }
        if self.quantity == 0 {
            return Err(invalid("quantity must be positive"));
        }
        if self.owner == Pubkey::default() {
            return Err(invalid("owner key is missing"));
        }
        if self.base_mint == Pubkey::default() || self.quote_mint == Pubkey::default() {
            return Err(invalid("base and quote mints are both required"));
        }
        if self.base_mint == self.quote_mint {
            return Err(invalid("base and quote mints must differ"));
        }
        Ok(())
    }
}

/// An instruction to cancel a previously placed order.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CancelOrderIntent {
    pub order_id: u64,
    pub owner: Pubkey,
}

impl CancelOrderIntent {
    /// Exact wire span: 8 + 32.
    pub const ENCODED_LEN: usize = 40;

    pub fn encode(&self) -> Vec<u8> {
        borsh::to_vec(self).unwrap()
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::ENCODED_LEN {
            return Err(Error::MalformedIntent {
                reason: format!(
                    "expected {} bytes, got {}",
                    Self::ENCODED_LEN,
                    bytes.len()
                ),
            });
        }
        Self::try_from_slice(bytes).map_err(|e| Error::MalformedIntent {
            reason: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.owner == Pubkey::default() {
            return Err(invalid("owner key is missing"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> Error {
    Error::InvalidOrderParameters {
        message: message.to_string(),
    }
}

/// Fluent builder for [`OrderIntent`] with the protocol defaults.
#[derive(Debug, Clone)]
pub struct OrderIntentBuilder {
    order_id: Option<u64>,
    owner: Option<Pubkey>,
    side: OrderSide,
    price: Option<u64>,
    quantity: Option<u64>,
    expiry: Option<u64>,
    base_mint: Option<Pubkey>,
    quote_mint: Option<Pubkey>,
}

impl OrderIntentBuilder {
    pub fn new() -> Self {
        Self {
            order_id: None,
            owner: None,
            side: OrderSide::Buy,
            price: None,
            quantity: None,
            expiry: None,
            base_mint: None,
            quote_mint: None,
        }
    }

    /// Set an explicit order id. When unset, `build` derives one from the
    /// current time plus the price; uniqueness is advisory, not enforced.
    pub fn order_id(mut self, order_id: u64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    pub fn owner(mut self, owner: Pubkey) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn side(mut self, side: OrderSide) -> Self {
        self.side = side;
        self
    }

    pub fn price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set expiry in seconds from now.
    pub fn expires_in(mut self, seconds: u64) -> Self {
        self.expiry = Some(unix_now() + seconds);
        self
    }

    /// Set an absolute expiry timestamp (Unix seconds).
    pub fn expires_at(mut self, timestamp: u64) -> Self {
        self.expiry = Some(timestamp);
        self
    }

    pub fn base_mint(mut self, base_mint: Pubkey) -> Self {
        self.base_mint = Some(base_mint);
        self
    }

    pub fn quote_mint(mut self, quote_mint: Pubkey) -> Self {
        self.quote_mint = Some(quote_mint);
        self
    }

    /// Apply defaults, validate, and produce the intent.
    pub fn build(self) -> Result<OrderIntent> {
        let owner = self.owner.ok_or_else(|| invalid("owner key is missing"))?;
        let price = self.price.ok_or_else(|| invalid("price is required"))?;
        let quantity = self
            .quantity
            .ok_or_else(|| invalid("quantity is required"))?;
        let base_mint = self
            .base_mint
            .ok_or_else(|| invalid("base mint is required"))?;
        let quote_mint = self
            .quote_mint
            .ok_or_else(|| invalid("quote mint is required"))?;

        let intent = OrderIntent {
            order_id: self
                .order_id
                .unwrap_or_else(|| unix_now_millis().wrapping_add(price)),
            owner,
            side: self.side,
            price,
            quantity,
            expiry: self
                .expiry
                .unwrap_or_else(|| unix_now() + DEFAULT_EXPIRY_SECS),
            base_mint,
            quote_mint,
        };
        intent.validate()?;
        Ok(intent)
    }
}

impl Default for OrderIntentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn unix_now() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

fn unix_now_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Recorded encoding of `golden_intent()`. The sequencer verifies
    /// signatures over these exact bytes; any drift here is a protocol
    /// break, not a refactor.
    const GOLDEN_ORDER_HEX: &str = "01000000000000001111111111111111111111111111111111111111111111111111111111111111006400000000000000640000000000000000f153650000000022222222222222222222222222222222222222222222222222222222222222223333333333333333333333333333333333333333333333333333333333333333";

    /// Offset of the side byte: order_id (8) + owner (32).
    const SIDE_OFFSET: usize = 40;

    fn golden_intent() -> OrderIntent {
        OrderIntent {
            order_id: 1,
            owner: Pubkey::new_from_array([0x11; 32]),
            side: OrderSide::Buy,
            price: 100,
            quantity: 100,
            expiry: 1_700_000_000,
            base_mint: Pubkey::new_from_array([0x22; 32]),
            quote_mint: Pubkey::new_from_array([0x33; 32]),
        }
    }

    #[test]
    fn encode_matches_golden_vector() {
        assert_eq!(hex::encode(golden_intent().encode()), GOLDEN_ORDER_HEX);
    }

    #[test]
    fn decode_golden_vector_matches_fields() {
        let bytes = hex::decode(GOLDEN_ORDER_HEX).unwrap();
        assert_eq!(OrderIntent::decode(&bytes).unwrap(), golden_intent());
    }

    #[test]
    fn order_intent_span_is_fixed() {
        let mut intent = golden_intent();
        assert_eq!(intent.encode().len(), OrderIntent::ENCODED_LEN);
        intent.side = OrderSide::Sell;
        intent.order_id = u64::MAX;
        assert_eq!(intent.encode().len(), OrderIntent::ENCODED_LEN);
    }

    #[test]
    fn cancel_intent_span_is_fixed() {
        let cancel = CancelOrderIntent {
            order_id: 7,
            owner: Pubkey::new_from_array([0x11; 32]),
        };
        assert_eq!(cancel.encode().len(), CancelOrderIntent::ENCODED_LEN);
    }

    #[test]
    fn round_trip_preserves_fields() {
        let intents = [
            golden_intent(),
            OrderIntent {
                order_id: u64::MAX,
                owner: Pubkey::new_unique(),
                side: OrderSide::Sell,
                price: 1,
                quantity: u64::MAX,
                expiry: 0,
                base_mint: Pubkey::new_unique(),
                quote_mint: Pubkey::new_unique(),
            },
        ];
        for intent in intents {
            assert_eq!(OrderIntent::decode(&intent.encode()).unwrap(), intent);
        }
    }

    #[test]
    fn cancel_round_trip_preserves_fields() {
        let cancel = CancelOrderIntent {
            order_id: 42,
            owner: Pubkey::new_unique(),
        };
        assert_eq!(
            CancelOrderIntent::decode(&cancel.encode()).unwrap(),
            cancel
        );
    }

    #[test]
    fn side_byte_disambiguates_historical_captures() {
        // Two captures from early deployments differed only in the side
        // byte; both must decode unambiguously.
        let buy = hex::decode(GOLDEN_ORDER_HEX).unwrap();
        let mut sell = buy.clone();
        assert_eq!(sell[SIDE_OFFSET], 0);
        sell[SIDE_OFFSET] = 1;

        assert_eq!(OrderIntent::decode(&buy).unwrap().side, OrderSide::Buy);
        assert_eq!(OrderIntent::decode(&sell).unwrap().side, OrderSide::Sell);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let bytes = golden_intent().encode();
        assert!(matches!(
            OrderIntent::decode(&bytes[..bytes.len() - 1]),
            Err(Error::MalformedIntent { .. })
        ));

        let mut longer = bytes.clone();
        longer.push(0);
        assert!(matches!(
            OrderIntent::decode(&longer),
            Err(Error::MalformedIntent { .. })
        ));

        assert!(matches!(
            CancelOrderIntent::decode(&bytes),
            Err(Error::MalformedIntent { .. })
        ));
    }

    #[test]
    fn decode_rejects_unknown_side_byte() {
        let mut bytes = golden_intent().encode();
        bytes[SIDE_OFFSET] = 2;
        assert!(matches!(
            OrderIntent::decode(&bytes),
            Err(Error::MalformedIntent { .. })
        ));
    }

    #[test]
    fn builder_applies_defaults() {
        let before = unix_now();
        let intent = OrderIntentBuilder::new()
            .owner(Pubkey::new_unique())
            .side(OrderSide::Sell)
            .price(250)
            .quantity(10)
            .base_mint(Pubkey::new_unique())
            .quote_mint(Pubkey::new_unique())
            .build()
            .unwrap();

        assert!(intent.expiry >= before + DEFAULT_EXPIRY_SECS);
        // Derived from current millis + price, so always past the price.
        assert!(intent.order_id > intent.price);
    }

    #[test]
    fn builder_keeps_explicit_values() {
        let intent = OrderIntentBuilder::new()
            .order_id(9)
            .owner(Pubkey::new_unique())
            .price(100)
            .quantity(100)
            .expires_at(1_700_000_000)
            .base_mint(Pubkey::new_unique())
            .quote_mint(Pubkey::new_unique())
            .build()
            .unwrap();

        assert_eq!(intent.order_id, 9);
        assert_eq!(intent.expiry, 1_700_000_000);
        assert_eq!(intent.side, OrderSide::Buy);
    }

    #[test]
    fn builder_rejects_zero_price() {
        let result = OrderIntentBuilder::new()
            .owner(Pubkey::new_unique())
            .price(0)
            .quantity(10)
            .base_mint(Pubkey::new_unique())
            .quote_mint(Pubkey::new_unique())
            .build();
        assert!(matches!(
            result,
            Err(Error::InvalidOrderParameters { .. })
        ));
    }

    #[test]
    fn validate_rejects_bad_parameters() {
        let good = golden_intent();

        let mut zero_quantity = good.clone();
        zero_quantity.quantity = 0;
        assert!(zero_quantity.validate().is_err());

        let mut no_owner = good.clone();
        no_owner.owner = Pubkey::default();
        assert!(no_owner.validate().is_err());

        let mut same_mints = good.clone();
        same_mints.quote_mint = same_mints.base_mint;
        assert!(same_mints.validate().is_err());

        assert!(good.validate().is_ok());
    }

    #[test]
    fn side_serializes_as_protocol_text() {
        assert_eq!(serde_json::to_string(&OrderSide::Buy).unwrap(), "\"Buy\"");
        assert_eq!(
            serde_json::to_string(&OrderSide::Sell).unwrap(),
            "\"Sell\""
        );
        assert_eq!(OrderSide::Buy.as_u8(), 0);
        assert_eq!(OrderSide::Sell.as_u8(), 1);
    }
}
