use crate::constants::seeds;
use anchor_lang::prelude::*;

/// Per-mint faucet configuration, PDA seeds: `["config", mint]`
///
/// Created once by `initialize` and never updated afterwards. The account
/// address itself is the mint authority of `mint`, so the program signs
/// `mint_to` on its behalf by re-supplying the seeds.
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// The only signer allowed to call `drip` for this mint
    pub admin: Pubkey,
    /// The governed token mint
    pub mint: Pubkey,
    /// PDA bump seed for account derivation
    pub bump: u8,
}

impl Config {
    /// Derives the config address and bump for `mint` under this program.
    ///
    /// Pure function of the mint key, so clients can reproduce it without
    /// reading any on-chain state.
    pub fn find_address(mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[seeds::CONFIG, mint.as_ref()], &crate::ID)
    }

    /// Whether the record has been written by a successful `initialize`
    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }
}
