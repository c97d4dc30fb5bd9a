use crate::constants::seeds;
use crate::errors::FaucetErrorCode;
use crate::state::Config;
use crate::utils::{mint_tokens, TokenService};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount};

/// Event emitted when the admin mints tokens through the faucet
#[event]
pub struct TokensDrippedEvent {
    /// The mint tokens were minted from
    pub mint: Pubkey,
    /// The token account that received the tokens
    pub destination: Pubkey,
    /// The admin that authorized the drip
    pub admin: Pubkey,
    /// The amount minted in base units
    pub amount: u64,
    /// Mint supply after the drip
    pub new_supply: u64,
}

/// Account structure for minting tokens through the faucet
///
/// `config` is listed before the other constrained accounts so the admin
/// check runs first.
#[derive(Accounts)]
pub struct Drip<'info> {
    /// Must match the admin stored in the config
    pub admin: Signer<'info>,

    /// Config PDA holding the mint authority
    #[account(
        seeds = [seeds::CONFIG, mint.key().as_ref()],
        bump = config.bump,
        has_one = admin @ FaucetErrorCode::NotAdmin,
        has_one = mint,
    )]
    pub config: Account<'info, Config>,

    /// The mint previously placed under faucet control
    #[account(mut)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Recipient token account, any owner, must be for `mint`
    #[account(
        mut,
        constraint = destination.mint == mint.key() @ FaucetErrorCode::InvalidDestination,
    )]
    pub destination: InterfaceAccount<'info, TokenAccount>,

    /// Either SPL Token or Token-2022
    /// CHECK: resolved against the mint owner by `TokenService::resolve` before any CPI
    pub token_program: UncheckedAccount<'info>,
}

/// Mints `amount` base units to `destination`, signed by the config PDA
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `amount` - The amount to mint in base units, must be positive
///
/// # Errors
/// * `NotAdmin` - signer is not the stored admin
/// * `InvalidDestination` - destination is not a token account of `mint`
/// * `InvalidAmount` - amount is zero
/// * `WrongTokenService` - token program does not own the mint
/// * `ServiceError` - mint supply would overflow
/// * any error returned by the token program is propagated unchanged
pub fn drip(ctx: Context<Drip>, amount: u64) -> Result<()> {
    require!(amount > 0, FaucetErrorCode::InvalidAmount);

    let token_service = TokenService::resolve(
        ctx.accounts.token_program.key,
        ctx.accounts.mint.to_account_info().owner,
    )?;
    require_keys_eq!(
        *ctx.accounts.destination.to_account_info().owner,
        token_service.program_id(),
        FaucetErrorCode::InvalidDestination
    );

    let mint_key = ctx.accounts.mint.key();
    let config_seeds = &[
        seeds::CONFIG,
        mint_key.as_ref(),
        &[ctx.accounts.config.bump],
    ];
    let config_signer_seeds = &[config_seeds.as_slice()];

    let new_supply = mint_tokens(
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.mint,
        &ctx.accounts.destination,
        &ctx.accounts.config.to_account_info(),
        config_signer_seeds,
        amount,
    )?;

    msg!(
        "Dripped {} tokens of mint {} to {}",
        amount,
        mint_key,
        ctx.accounts.destination.key()
    );

    emit!(TokensDrippedEvent {
        mint: mint_key,
        destination: ctx.accounts.destination.key(),
        admin: ctx.accounts.admin.key(),
        amount,
        new_supply,
    });

    Ok(())
}
