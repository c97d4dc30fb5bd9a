use anchor_lang::prelude::*;
use instructions::*;

declare_id!("4edge8VYmNMcnRmM9RzQv89kwgYBid2xVoz5FgPMp3QE");

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

/// Admin-gated token faucet.
///
/// The program takes custody of an existing mint's authority by moving it to
/// a per-mint config PDA (seeds `["config", mint]`), then mints on demand for
/// the single admin recorded at initialization.
///
/// Both SPL Token and Token-2022 mints are supported. The token program
/// passed by the caller is checked against the mint owner before any CPI.
#[program]
pub mod anchor_faucet {
    use super::*;

    /// One-time setup for a given mint.
    ///
    /// Delegates to `initialize::initialize`.
    /// Creates the config PDA and moves the mint authority of `mint` to it.
    /// The signer must be the current mint authority and becomes the admin.
    /// Emits a `FaucetInitializedEvent` upon success.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::initialize(ctx)
    }

    /// Mints tokens to a token account of the governed mint.
    ///
    /// Delegates to `drip::drip`.
    /// Only the admin stored in the config can call this instruction.
    /// Emits a `TokensDrippedEvent` upon success.
    ///
    /// # Arguments
    /// - `ctx`: Context for `Drip`.
    /// - `amount`: Amount of tokens to mint in base units.
    pub fn drip(ctx: Context<Drip>, amount: u64) -> Result<()> {
        drip::drip(ctx, amount)
    }
}
