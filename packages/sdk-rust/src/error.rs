//! SDK error type.

use solana_sdk::pubkey::Pubkey;

/// All errors returned by the Farm-Admin SDK.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // ── RPC / network ────────────────────────────────────────────────────────
    /// A Solana JSON-RPC call failed.
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    // ── Account discovery ────────────────────────────────────────────────────
    /// No farm-manager account exists for the configured chef state.
    #[error("Farm manager not found for chef state {0} — initialize it first")]
    ManagerNotFound(Pubkey),

    /// The configured chef-state account does not exist.
    #[error("Chef state account {0} not found")]
    ChefNotFound(Pubkey),

    // ── Synchronization preview ──────────────────────────────────────────────
    /// A sync preview was requested with an empty registry.
    #[error("No fixed farms are registered")]
    NoFixedFarms,

    /// Fixed-pool weights exceed what the chef's totals allow.
    #[error("Inconsistent chef state: fixed weights exceed total minus base")]
    InconsistentWeights,

    // ── Arithmetic ───────────────────────────────────────────────────────────
    #[error("Integer overflow in allocation math")]
    MathOverflow,

    // ── Account parsing ──────────────────────────────────────────────────────
    /// Raw account bytes could not be deserialized.
    #[error("Account parse error at offset {offset}: {reason}")]
    ParseError { offset: usize, reason: String },

    // ── Validation ───────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias so every module can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;
