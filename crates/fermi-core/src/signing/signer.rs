//! Ed25519 signing and verification of intent auth messages.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;

use super::domain::{cancel_auth_message, order_auth_message};
use crate::intent::{CancelOrderIntent, OrderIntent};
use crate::{Error, Result};

/// A signed order intent, ready for submission.
///
/// Immutable once built. Signing is a pure function of the intent bytes and
/// the key, so resubmitting the same envelope after a transport failure is
/// always safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedOrderIntent {
    pub intent: OrderIntent,
    pub signature: Signature,
}

impl SignedOrderIntent {
    /// Hex form of the 64-byte signature, as the sequencer expects it.
    pub fn signature_hex(&self) -> String {
        hex::encode(self.signature.as_ref())
    }
}

/// A signed cancel intent, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedCancelIntent {
    pub intent: CancelOrderIntent,
    pub signature: Signature,
}

impl SignedCancelIntent {
    pub fn signature_hex(&self) -> String {
        hex::encode(self.signature.as_ref())
    }
}

/// Signs order and cancel intents with the owner keypair.
///
/// The Solana secret-key representation is 64 bytes; only the first 32 (the
/// Ed25519 seed) are key material, the rest is the embedded public key.
/// [`Keypair`] already handles that split.
pub struct IntentSigner {
    keypair: Keypair,
}

impl IntentSigner {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// Public key of the owner; the `owner` field of every intent signed
    /// here must match it.
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Ed25519 signature over exactly `message`.
    pub fn sign_message(&self, message: &[u8]) -> Signature {
        self.keypair.sign_message(message)
    }

    /// Standard Ed25519 verification. Returns false for any malformed
    /// signature or key; never panics. Whether a failed verification is
    /// fatal is the caller's decision.
    pub fn verify_message(message: &[u8], signature: &Signature, owner: &Pubkey) -> bool {
        signature.verify(owner.as_ref(), message)
    }

    /// Validate, sign, and locally re-verify an order intent.
    ///
    /// The re-verification guards against key-handling bugs before anything
    /// reaches the network; a mismatch is [`Error::SignatureIntegrity`] and
    /// the envelope is discarded.
    pub fn sign_order_intent(&self, intent: &OrderIntent) -> Result<SignedOrderIntent> {
        intent.validate()?;
        let message = order_auth_message(intent);
        let signature = self.sign_message(&message);
        if !Self::verify_message(&message, &signature, &self.pubkey()) {
            return Err(Error::SignatureIntegrity);
        }
        Ok(SignedOrderIntent {
            intent: intent.clone(),
            signature,
        })
    }

    /// Validate, sign, and locally re-verify a cancel intent.
    pub fn sign_cancel_intent(&self, intent: &CancelOrderIntent) -> Result<SignedCancelIntent> {
        intent.validate()?;
        let message = cancel_auth_message(intent);
        let signature = self.sign_message(&message);
        if !Self::verify_message(&message, &signature, &self.pubkey()) {
            return Err(Error::SignatureIntegrity);
        }
        Ok(SignedCancelIntent {
            intent: intent.clone(),
            signature,
        })
    }
}

impl std::fmt::Debug for IntentSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentSigner")
            .field("pubkey", &self.pubkey())
            .finish()
    }
}
