//! Instruction builders for the Fermi vault program.
//!
//! The vault program follows the Anchor convention: instruction data is the
//! 8-byte `sha256("global:<name>")` discriminator followed by
//! borsh-serialized arguments. Each account list is the derived custody
//! addresses plus the acting token accounts and the standard
//! system/token/rent identities, in the program's declared order:
//!
//! 1. `initialize`  - create the per-mint vault accounts
//! 2. `deposit`     - move user tokens into the vault
//! 3. `withdraw`    - move vault tokens back to a recipient
//! 4. `take_tokens` - whitelisted-caller withdrawal (settlement path)

use borsh::BorshSerialize;
use fermi_core::custody::{
    derive_user_state, derive_vault_state, derive_vault_token_account, VaultAddresses,
};
use sha2::{Digest, Sha256};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;
use solana_sdk::sysvar;

/// SPL token program.
pub const TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// Anchor global-namespace instruction discriminator.
fn discriminator(name: &str) -> [u8; 8] {
    let digest = Sha256::digest(format!("global:{name}").as_bytes());
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

fn instruction_data<T: BorshSerialize>(name: &str, args: &T) -> Vec<u8> {
    let mut data = discriminator(name).to_vec();
    data.extend_from_slice(&borsh::to_vec(args).unwrap());
    data
}

#[derive(BorshSerialize)]
struct InitializeArgs {
    whitelisted_program: Pubkey,
}

/// deposit / withdraw / take_tokens share the (user, amount) argument shape.
#[derive(BorshSerialize)]
struct TransferArgs {
    user: Pubkey,
    amount: u64,
}

/// Build the `initialize` instruction creating the per-mint vault state,
/// authority, and token account.
pub fn initialize(
    program_id: &Pubkey,
    payer: &Pubkey,
    token_mint: &Pubkey,
    whitelisted_program: &Pubkey,
) -> Instruction {
    let vaults = VaultAddresses::derive(program_id, token_mint);

    let accounts = vec![
        AccountMeta::new(vaults.vault_state, false),
        AccountMeta::new_readonly(*token_mint, false),
        AccountMeta::new_readonly(vaults.vault_authority, false),
        AccountMeta::new(vaults.vault_token_account, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(sysvar::rent::id(), false),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data: instruction_data(
            "initialize",
            &InitializeArgs {
                whitelisted_program: *whitelisted_program,
            },
        ),
    }
}

/// Build the `deposit` instruction. The user state account is created
/// lazily on the first deposit for the (user, vault) pair, paid by the
/// depositing user.
pub fn deposit(
    program_id: &Pubkey,
    user: &Pubkey,
    token_mint: &Pubkey,
    user_token_account: &Pubkey,
    amount: u64,
) -> Instruction {
    let (vault_state, _) = derive_vault_state(program_id, token_mint);
    let (user_state, _) = derive_user_state(program_id, user, &vault_state);
    let (vault_token_account, _) = derive_vault_token_account(program_id, &vault_state);

    let accounts = vec![
        AccountMeta::new(vault_state, false),
        AccountMeta::new(user_state, false),
        AccountMeta::new(*user, true),
        AccountMeta::new(*user_token_account, false),
        AccountMeta::new(vault_token_account, false),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(sysvar::rent::id(), false),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data: instruction_data(
            "deposit",
            &TransferArgs {
                user: *user,
                amount,
            },
        ),
    }
}

/// Build the `withdraw` instruction moving vault funds to a recipient token
/// account. The vault authority PDA signs the token transfer on-chain.
pub fn withdraw(
    program_id: &Pubkey,
    token_mint: &Pubkey,
    user: &Pubkey,
    recipient_token_account: &Pubkey,
    caller: &Pubkey,
    amount: u64,
) -> Instruction {
    transfer_out(
        "withdraw",
        program_id,
        token_mint,
        user,
        recipient_token_account,
        caller,
        amount,
    )
}

/// Build the `take_tokens` instruction. On-chain, only the whitelisted
/// caller recorded in the vault state may take custody funds.
pub fn take_tokens(
    program_id: &Pubkey,
    token_mint: &Pubkey,
    user: &Pubkey,
    recipient_token_account: &Pubkey,
    caller: &Pubkey,
    amount: u64,
) -> Instruction {
    transfer_out(
        "take_tokens",
        program_id,
        token_mint,
        user,
        recipient_token_account,
        caller,
        amount,
    )
}

/// withdraw and take_tokens differ only in their discriminator and the
/// on-chain authorization; the account shape is shared.
fn transfer_out(
    name: &str,
    program_id: &Pubkey,
    token_mint: &Pubkey,
    user: &Pubkey,
    recipient_token_account: &Pubkey,
    caller: &Pubkey,
    amount: u64,
) -> Instruction {
    let vaults = VaultAddresses::derive(program_id, token_mint);
    let (user_state, _) = derive_user_state(program_id, user, &vaults.vault_state);

    let accounts = vec![
        AccountMeta::new(vaults.vault_state, false),
        AccountMeta::new(user_state, false),
        AccountMeta::new_readonly(vaults.vault_authority, false),
        AccountMeta::new(vaults.vault_token_account, false),
        AccountMeta::new(*recipient_token_account, false),
        AccountMeta::new_readonly(*caller, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data: instruction_data(
            name,
            &TransferArgs {
                user: *user,
                amount,
            },
        ),
    }
}
