use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, error::AdminError, state::FarmManager};

/// Recover tokens mistakenly sent to the farm-authority PDA's custody.
/// Owner-only; the full vault balance moves to an owner-chosen destination.
pub fn handler(ctx: Context<SweepToken>) -> Result<()> {
    let amount = ctx.accounts.vault.amount;
    if amount == 0 {
        msg!("Nothing to sweep");
        return Ok(());
    }

    let manager = &ctx.accounts.farm_manager;
    let chef_key = manager.chef_state;
    let bump = manager.farm_authority_bump;
    let seeds: &[&[u8]] = &[FARM_AUTHORITY_SEED, chef_key.as_ref(), &[bump]];
    let signer = &[seeds];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.farm_authority.to_account_info(),
            },
            signer,
        ),
        amount,
    )?;

    msg!("Swept {} tokens to {}", amount, ctx.accounts.destination.key());
    Ok(())
}

#[derive(Accounts)]
pub struct SweepToken<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [FARM_MANAGER_SEED, farm_manager.chef_state.as_ref()],
        bump = farm_manager.bump,
        has_one = owner @ AdminError::Unauthorized,
    )]
    pub farm_manager: Account<'info, FarmManager>,

    /// CHECK: PDA that owns the swept vault
    #[account(
        seeds = [FARM_AUTHORITY_SEED, farm_manager.chef_state.as_ref()],
        bump = farm_manager.farm_authority_bump,
    )]
    pub farm_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = vault.owner == farm_authority.key() @ AdminError::Unauthorized,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == vault.mint @ AdminError::InvalidDestination,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
