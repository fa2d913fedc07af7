use anchor_lang::prelude::*;

use crate::{constants::*, error::AdminError, state::FarmManager};

/// First half of the two-phase chef-control handoff: the owner nominates a
/// new controller.  Nothing moves until the nominee claims; re-nominating
/// overwrites any prior nominee.
pub fn handler(ctx: Context<NominateFarmController>, new_controller: Pubkey) -> Result<()> {
    require!(new_controller != Pubkey::default(), AdminError::InvalidDestination);

    let manager = &mut ctx.accounts.farm_manager;
    manager.pending_farm_controller = Some(new_controller);
    msg!("Farm controller nominated: {}", new_controller);
    Ok(())
}

#[derive(Accounts)]
pub struct NominateFarmController<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_MANAGER_SEED, farm_manager.chef_state.as_ref()],
        bump = farm_manager.bump,
        has_one = owner @ AdminError::Unauthorized,
    )]
    pub farm_manager: Account<'info, FarmManager>,
}
