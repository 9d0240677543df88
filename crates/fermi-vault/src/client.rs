//! Thin RPC wrapper for the Fermi vault program.

use fermi_core::custody::{derive_user_state, derive_vault_state, VaultAddresses};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use tracing::{debug, info};

use crate::instructions;
use crate::state::{UserState, VaultState};
use crate::{Error, Result};

/// Client for the on-chain custody program.
///
/// Computes the derived addresses, builds the instruction, and submits a
/// single signed transaction per call. Confirmation tuning and retries stay
/// with the caller.
pub struct VaultClient {
    rpc: RpcClient,
    payer: Keypair,
    program_id: Pubkey,
}

/// Addresses created by `init_vault`, echoed back with the transaction
/// signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultCreation {
    pub signature: Signature,
    pub vault_state: Pubkey,
    pub vault_authority: Pubkey,
    pub vault_token_account: Pubkey,
}

impl VaultClient {
    pub fn new(rpc_url: String, payer: Keypair, program_id: Pubkey) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(rpc_url, CommitmentConfig::confirmed()),
            payer,
            program_id,
        }
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// Resolve the per-mint custody addresses.
    pub fn vault_addresses(&self, token_mint: &Pubkey) -> VaultAddresses {
        VaultAddresses::derive(&self.program_id, token_mint)
    }

    /// Create the vault state, authority, and token account for a mint.
    pub async fn init_vault(
        &self,
        token_mint: &Pubkey,
        whitelisted_program: &Pubkey,
    ) -> Result<VaultCreation> {
        let addresses = self.vault_addresses(token_mint);
        let ix = instructions::initialize(
            &self.program_id,
            &self.payer.pubkey(),
            token_mint,
            whitelisted_program,
        );
        let signature = self.send(ix).await?;
        info!(
            vault_state = %addresses.vault_state,
            mint = %token_mint,
            "Vault initialized"
        );
        Ok(VaultCreation {
            signature,
            vault_state: addresses.vault_state,
            vault_authority: addresses.vault_authority,
            vault_token_account: addresses.vault_token_account,
        })
    }

    /// Deposit tokens into the vault. The payer signs as the depositing
    /// user.
    pub async fn deposit(
        &self,
        token_mint: &Pubkey,
        user_token_account: &Pubkey,
        amount: u64,
    ) -> Result<Signature> {
        let user = self.payer.pubkey();
        let ix = instructions::deposit(
            &self.program_id,
            &user,
            token_mint,
            user_token_account,
            amount,
        );
        let signature = self.send(ix).await?;
        info!(%user, mint = %token_mint, amount, "Deposit submitted");
        Ok(signature)
    }

    /// Withdraw a user's deposited tokens to a recipient token account.
    pub async fn withdraw(
        &self,
        token_mint: &Pubkey,
        user: &Pubkey,
        recipient_token_account: &Pubkey,
        caller: &Pubkey,
        amount: u64,
    ) -> Result<Signature> {
        let ix = instructions::withdraw(
            &self.program_id,
            token_mint,
            user,
            recipient_token_account,
            caller,
            amount,
        );
        let signature = self.send(ix).await?;
        info!(%user, mint = %token_mint, amount, "Withdrawal submitted");
        Ok(signature)
    }

    /// Take custody funds as the whitelisted caller (settlement path).
    pub async fn take_tokens(
        &self,
        token_mint: &Pubkey,
        user: &Pubkey,
        recipient_token_account: &Pubkey,
        caller: &Pubkey,
        amount: u64,
    ) -> Result<Signature> {
        let ix = instructions::take_tokens(
            &self.program_id,
            token_mint,
            user,
            recipient_token_account,
            caller,
            amount,
        );
        let signature = self.send(ix).await?;
        info!(%user, mint = %token_mint, amount, "Take-tokens submitted");
        Ok(signature)
    }

    /// Read the per-mint vault record.
    pub async fn get_vault_state(&self, token_mint: &Pubkey) -> Result<VaultState> {
        let (vault_state, _) = derive_vault_state(&self.program_id, token_mint);
        let data = self.fetch_account_data(&vault_state).await?;
        VaultState::from_account_data(&data)
    }

    /// Read a user's deposit record for a mint.
    pub async fn get_user_state(&self, user: &Pubkey, token_mint: &Pubkey) -> Result<UserState> {
        let (vault_state, _) = derive_vault_state(&self.program_id, token_mint);
        let (user_state, _) = derive_user_state(&self.program_id, user, &vault_state);
        let data = self.fetch_account_data(&user_state).await?;
        UserState::from_account_data(&data)
    }

    async fn fetch_account_data(&self, address: &Pubkey) -> Result<Vec<u8>> {
        let account = self
            .rpc
            .get_account_with_commitment(address, self.rpc.commitment())
            .await?
            .value
            .ok_or(Error::AccountNotFound(*address))?;
        Ok(account.data)
    }

    async fn send(&self, instruction: Instruction) -> Result<Signature> {
        let blockhash = self.rpc.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&self.payer.pubkey()),
            &[&self.payer],
            blockhash,
        );
        let signature = self.rpc.send_and_confirm_transaction(&tx).await?;
        debug!(%signature, "Transaction confirmed");
        Ok(signature)
    }
}

impl std::fmt::Debug for VaultClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultClient")
            .field("payer", &self.payer.pubkey())
            .field("program_id", &self.program_id)
            .finish()
    }
}
