//! Custody address derivation.
//!
//! The vault program controls four program-derived addresses per mint and
//! user. Both this client and the on-chain program recompute them from the
//! seed tuples below; they are never exchanged out-of-band, so the seed
//! literals and their order must match the program byte-for-byte.
//!
//! Derivation is `Pubkey::find_program_address`: hash the seeds plus the
//! program id with a bump byte decremented from 255 until the result falls
//! off the Ed25519 curve, guaranteeing no private key exists for the
//! address.

use solana_sdk::pubkey::Pubkey;

pub const VAULT_STATE_SEED: &[u8] = b"vault_state";
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";
pub const VAULT_TOKEN_ACCOUNT_SEED: &[u8] = b"vault_token_account";
pub const USER_STATE_SEED: &[u8] = b"user_state";

/// Derive the per-mint vault state address.
pub fn derive_vault_state(program_id: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_STATE_SEED, mint.as_ref()], program_id)
}

/// Derive the vault authority address. Holds no data; exists only as the
/// deterministic signer over the vault token account.
pub fn derive_vault_authority(program_id: &Pubkey, vault_state: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED, vault_state.as_ref()], program_id)
}

/// Derive the vault's token account address.
pub fn derive_vault_token_account(program_id: &Pubkey, vault_state: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_TOKEN_ACCOUNT_SEED, vault_state.as_ref()], program_id)
}

/// Derive the per-(user, vault) state address. Seed order is vault state
/// first, then user.
pub fn derive_user_state(
    program_id: &Pubkey,
    user: &Pubkey,
    vault_state: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[USER_STATE_SEED, vault_state.as_ref(), user.as_ref()],
        program_id,
    )
}

/// The three per-mint custody addresses, resolved together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultAddresses {
    pub vault_state: Pubkey,
    pub vault_authority: Pubkey,
    pub vault_token_account: Pubkey,
}

impl VaultAddresses {
    pub fn derive(program_id: &Pubkey, mint: &Pubkey) -> Self {
        let (vault_state, _) = derive_vault_state(program_id, mint);
        let (vault_authority, _) = derive_vault_authority(program_id, &vault_state);
        let (vault_token_account, _) = derive_vault_token_account(program_id, &vault_state);
        Self {
            vault_state,
            vault_authority,
            vault_token_account,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program_id() -> Pubkey {
        Pubkey::new_from_array([0xAB; 32])
    }

    #[test]
    fn derivation_is_deterministic() {
        let mint = Pubkey::new_from_array([0x22; 32]);
        assert_eq!(
            derive_vault_state(&program_id(), &mint),
            derive_vault_state(&program_id(), &mint)
        );
        assert_eq!(
            VaultAddresses::derive(&program_id(), &mint),
            VaultAddresses::derive(&program_id(), &mint)
        );
    }

    #[test]
    fn distinct_mints_yield_distinct_vault_states() {
        let (a, _) = derive_vault_state(&program_id(), &Pubkey::new_unique());
        let (b, _) = derive_vault_state(&program_id(), &Pubkey::new_unique());
        assert_ne!(a, b);
    }

    #[test]
    fn distinct_users_yield_distinct_user_states() {
        let (vault_state, _) = derive_vault_state(&program_id(), &Pubkey::new_unique());
        let (a, _) = derive_user_state(&program_id(), &Pubkey::new_unique(), &vault_state);
        let (b, _) = derive_user_state(&program_id(), &Pubkey::new_unique(), &vault_state);
        assert_ne!(a, b);
    }

    #[test]
    fn derived_addresses_are_off_curve() {
        let mint = Pubkey::new_from_array([0x22; 32]);
        let addresses = VaultAddresses::derive(&program_id(), &mint);
        assert!(!addresses.vault_state.is_on_curve());
        assert!(!addresses.vault_authority.is_on_curve());
        assert!(!addresses.vault_token_account.is_on_curve());
    }

    #[test]
    fn aggregate_matches_individual_derivations() {
        let mint = Pubkey::new_from_array([0x22; 32]);
        let addresses = VaultAddresses::derive(&program_id(), &mint);

        let (vault_state, _) = derive_vault_state(&program_id(), &mint);
        let (vault_authority, _) = derive_vault_authority(&program_id(), &vault_state);
        let (vault_token_account, _) = derive_vault_token_account(&program_id(), &vault_state);

        assert_eq!(addresses.vault_state, vault_state);
        assert_eq!(addresses.vault_authority, vault_authority);
        assert_eq!(addresses.vault_token_account, vault_token_account);
    }

    #[test]
    fn seed_roles_do_not_collide() {
        // vault_authority and vault_token_account share the same inner
        // identifier; only the seed literal separates them.
        let mint = Pubkey::new_from_array([0x22; 32]);
        let addresses = VaultAddresses::derive(&program_id(), &mint);
        assert_ne!(addresses.vault_authority, addresses.vault_token_account);
        assert_ne!(addresses.vault_state, addresses.vault_authority);
    }
}
