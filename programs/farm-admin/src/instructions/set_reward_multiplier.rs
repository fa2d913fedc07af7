use anchor_lang::prelude::*;
use chef_itf::{program::Chef, ChefState};

use crate::{constants::*, error::AdminError, state::FarmManager};

/// Owner-only passthrough to the chef's bonus multiplier, bounded above.
pub fn handler(ctx: Context<SetRewardMultiplier>, multiplier: u64) -> Result<()> {
    require!(multiplier <= MAX_REWARD_MULTIPLIER, AdminError::MultiplierTooHigh);

    let manager = &ctx.accounts.farm_manager;
    let chef_key = manager.chef_state;
    let bump = manager.farm_authority_bump;
    let seeds: &[&[u8]] = &[FARM_AUTHORITY_SEED, chef_key.as_ref(), &[bump]];
    let signer = &[seeds];

    chef_itf::cpi::set_reward_multiplier(
        CpiContext::new_with_signer(
            ctx.accounts.chef_program.to_account_info(),
            chef_itf::cpi::accounts::MutatePools {
                chef_state: ctx.accounts.chef_state.to_account_info(),
                authority: ctx.accounts.farm_authority.to_account_info(),
            },
            signer,
        ),
        multiplier,
    )?;

    msg!("Reward multiplier set: {}", multiplier);
    Ok(())
}

#[derive(Accounts)]
pub struct SetRewardMultiplier<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [FARM_MANAGER_SEED, farm_manager.chef_state.as_ref()],
        bump = farm_manager.bump,
        has_one = owner @ AdminError::Unauthorized,
        has_one = chef_state,
    )]
    pub farm_manager: Account<'info, FarmManager>,

    #[account(mut)]
    pub chef_state: Account<'info, ChefState>,

    /// CHECK: PDA the chef recognizes as its authority
    #[account(
        seeds = [FARM_AUTHORITY_SEED, farm_manager.chef_state.as_ref()],
        bump = farm_manager.farm_authority_bump,
    )]
    pub farm_authority: UncheckedAccount<'info>,

    pub chef_program: Program<'info, Chef>,
}
