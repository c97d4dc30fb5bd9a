use crate::errors::FaucetErrorCode;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::spl_token_2022::instruction::AuthorityType;
use anchor_spl::token_interface::{self, Mint, MintTo, SetAuthority, TokenAccount};

/// The token programs a faucet mint can live under
///
/// Both variants expose the same `set_authority` / `mint_to` instructions,
/// so CPIs go through `token_interface` once the variant is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenService {
    /// SPL Token (`Tokenkeg...`)
    Classic,
    /// SPL Token-2022 (`Tokenz...`)
    Extended,
}

impl TokenService {
    /// Maps a token program id to its variant
    pub fn from_program_id(program_id: &Pubkey) -> Result<Self> {
        if *program_id == anchor_spl::token::ID {
            Ok(Self::Classic)
        } else if *program_id == anchor_spl::token_2022::ID {
            Ok(Self::Extended)
        } else {
            err!(FaucetErrorCode::WrongTokenService)
        }
    }

    pub fn program_id(&self) -> Pubkey {
        match self {
            Self::Classic => anchor_spl::token::ID,
            Self::Extended => anchor_spl::token_2022::ID,
        }
    }

    /// Resolves the caller-supplied token program against the program that
    /// actually owns the mint account.
    ///
    /// # Errors
    /// * `WrongTokenService` - if `selector` is not a known token program or
    ///   does not own the mint
    pub fn resolve(selector: &Pubkey, mint_owner: &Pubkey) -> Result<Self> {
        let service = Self::from_program_id(selector)?;
        require_keys_eq!(
            service.program_id(),
            *mint_owner,
            FaucetErrorCode::WrongTokenService
        );
        Ok(service)
    }
}

/// Returns the mint authority of `mint`, if any
pub fn current_mint_authority(mint: &Mint) -> Option<Pubkey> {
    mint.mint_authority.into()
}

/// Reassigns the `MintTokens` authority of `mint` to `new_authority`.
///
/// `current_authority` must be a transaction signer. `token_program` must
/// already be resolved with `TokenService::resolve`.
pub fn set_mint_authority<'info>(
    token_program: &AccountInfo<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    current_authority: &AccountInfo<'info>,
    new_authority: Pubkey,
) -> Result<()> {
    let cpi_ctx = CpiContext::new(
        token_program.key(),
        SetAuthority {
            current_authority: current_authority.to_account_info(),
            account_or_mint: mint.to_account_info(),
        },
    );

    token_interface::set_authority(cpi_ctx, AuthorityType::MintTokens, Some(new_authority))
}

/// Mints `amount` base units of `mint` into `destination`, signed by the
/// PDA `authority` using `signer_seeds`.
///
/// Fails with `ServiceError` before the CPI when the new supply would not
/// fit in a u64; any other token program failure is returned unchanged.
pub fn mint_tokens<'info>(
    token_program: &AccountInfo<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    destination: &InterfaceAccount<'info, TokenAccount>,
    authority: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<u64> {
    let new_supply = mint
        .supply
        .checked_add(amount)
        .ok_or(FaucetErrorCode::ServiceError)?;

    let cpi_ctx = CpiContext::new_with_signer(
        token_program.key(),
        MintTo {
            mint: mint.to_account_info(),
            to: destination.to_account_info(),
            authority: authority.to_account_info(),
        },
        signer_seeds,
    );
    token_interface::mint_to(cpi_ctx, amount)?;

    Ok(new_supply)
}
