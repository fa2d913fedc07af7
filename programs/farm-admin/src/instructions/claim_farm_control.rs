use anchor_lang::prelude::*;
use chef_itf::{program::Chef, ChefState};

use crate::{constants::*, error::AdminError, state::FarmManager};

/// Second half of the handoff: only the nominated identity may claim.
/// On success the pending slot is cleared and the chef is told to start its
/// own two-phase authority transfer toward the claimant — this layer never
/// hands the chef to anyone who didn't ask for it.
pub fn handler(ctx: Context<ClaimFarmControl>) -> Result<()> {
    let claimant = ctx.accounts.claimant.key();
    let manager = &mut ctx.accounts.farm_manager;
    require!(
        manager.pending_farm_controller == Some(claimant),
        AdminError::Unauthorized
    );
    manager.pending_farm_controller = None;

    let chef_key = manager.chef_state;
    let bump = manager.farm_authority_bump;
    let seeds: &[&[u8]] = &[FARM_AUTHORITY_SEED, chef_key.as_ref(), &[bump]];
    let signer = &[seeds];

    chef_itf::cpi::transfer_authority(
        CpiContext::new_with_signer(
            ctx.accounts.chef_program.to_account_info(),
            chef_itf::cpi::accounts::MutatePools {
                chef_state: ctx.accounts.chef_state.to_account_info(),
                authority: ctx.accounts.farm_authority.to_account_info(),
            },
            signer,
        ),
        claimant,
    )?;

    msg!("Farm control claimed by {}", claimant);
    Ok(())
}

#[derive(Accounts)]
pub struct ClaimFarmControl<'info> {
    pub claimant: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_MANAGER_SEED, farm_manager.chef_state.as_ref()],
        bump = farm_manager.bump,
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
