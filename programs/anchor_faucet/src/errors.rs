use anchor_lang::prelude::*;

/// Error codes shared by the faucet instructions
#[error_code]
pub enum FaucetErrorCode {
    /// A config record already exists for this mint
    #[msg("Faucet config already initialized for this mint")]
    AlreadyInitialized,
    /// The signer does not hold the mint authority it is trying to hand over
    #[msg("Signer must be the current mint authority")]
    NotCurrentAuthority,
    /// The signer is not the admin stored in the config record
    #[msg("Signer is not the faucet admin")]
    NotAdmin,
    /// The token program passed does not own the mint
    #[msg("Token program does not own the mint")]
    WrongTokenService,
    /// The destination token account does not belong to the mint
    #[msg("Destination token account does not belong to the mint")]
    InvalidDestination,
    /// Drip amounts must be strictly positive
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    /// The token program would reject the mint
    #[msg("Token service error: mint supply overflow")]
    ServiceError,
}
