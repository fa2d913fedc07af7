use anchor_lang::prelude::*;

#[error_code]
pub enum AdminError {
    #[msg("Caller lacks the required role")]
    Unauthorized,
    #[msg("Destination must not be the default pubkey")]
    InvalidDestination,
    #[msg("Pid is reserved or does not exist")]
    InvalidPid,
    #[msg("Pid exceeds the chef's pool count")]
    PidOutOfBounds,
    #[msg("Fixed-share entry for this pid is already active")]
    AlreadyActive,
    #[msg("No active fixed-share entry for this pid")]
    NotActive,
    #[msg("Aggregate fixed share would exceed the ceiling")]
    BudgetExceeded,
    #[msg("Parallel array arguments differ in length")]
    LengthMismatch,
    #[msg("Reward multiplier exceeds the ceiling")]
    MultiplierTooHigh,
    #[msg("No fixed farms are registered")]
    NoFixedFarms,
    #[msg("Fixed-share registry is at capacity")]
    RegistryFull,
    #[msg("Math overflow")]
    MathOverflow,
}
