use crate::constants::seeds;
use crate::errors::FaucetErrorCode;
use crate::state::Config;
use crate::utils::{current_mint_authority, set_mint_authority, TokenService};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

/// Event emitted when a mint is placed under faucet control
#[event]
pub struct FaucetInitializedEvent {
    /// The mint whose authority was transferred
    pub mint: Pubkey,
    /// The config PDA that is now the mint authority
    pub config: Pubkey,
    /// The admin recorded in the config
    pub admin: Pubkey,
    /// The token program owning the mint
    pub token_program: Pubkey,
}

/// Account structure for placing an existing mint under faucet control
///
/// # Account Requirements
/// - `admin` must be the current mint authority of `mint`
/// - `config` is derived from `["config", mint]` and must not hold a record yet
/// - `token_program` must be the program that owns `mint`
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Current mint authority, becomes the faucet admin and pays for the config rent
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Existing mint to be controlled by the config PDA
    #[account(mut)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Per-mint config record, becomes the new mint authority
    ///
    /// Allocated with `init_if_needed` so a second call reaches the handler
    /// and fails with `AlreadyInitialized` instead of a system program error.
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [seeds::CONFIG, mint.key().as_ref()],
        bump
    )]
    pub config: Account<'info, Config>,

    /// Either SPL Token or Token-2022
    /// CHECK: resolved against the mint owner by `TokenService::resolve` before any CPI
    pub token_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates the config record for `mint` and moves its mint authority to the config PDA
///
/// # Process
/// 1. Rejects a mint that already has a config record
/// 2. Checks the signer is the current mint authority
/// 3. Resolves the token program against the mint owner
/// 4. Hands the `MintTokens` authority to the config PDA via CPI
/// 5. Records admin, mint and bump
///
/// After this the signer can no longer mint directly; minting only goes
/// through `drip`.
///
/// # Errors
/// * `AlreadyInitialized` - config already written for this mint
/// * `NotCurrentAuthority` - signer is not the mint authority
/// * `WrongTokenService` - token program does not own the mint
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    require!(
        !ctx.accounts.config.is_initialized(),
        FaucetErrorCode::AlreadyInitialized
    );

    let admin = ctx.accounts.admin.key();
    require!(
        current_mint_authority(&ctx.accounts.mint) == Some(admin),
        FaucetErrorCode::NotCurrentAuthority
    );

    let token_service = TokenService::resolve(
        ctx.accounts.token_program.key,
        ctx.accounts.mint.to_account_info().owner,
    )?;

    let mint = ctx.accounts.mint.key();
    let config_key = ctx.accounts.config.key();

    set_mint_authority(
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.mint,
        &ctx.accounts.admin.to_account_info(),
        config_key,
    )?;

    let config = &mut ctx.accounts.config;
    config.admin = admin;
    config.mint = mint;
    config.bump = ctx.bumps.config;

    msg!(
        "Faucet initialized for mint {} ({:?}), admin {}",
        mint,
        token_service,
        admin
    );

    emit!(FaucetInitializedEvent {
        mint,
        config: config_key,
        admin,
        token_program: token_service.program_id(),
    });

    Ok(())
}
