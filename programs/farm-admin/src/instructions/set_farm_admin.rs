use anchor_lang::prelude::*;

use crate::{constants::*, error::AdminError, state::FarmManager};

/// Hand the farm-admin role to a new identity.
/// The owner can reassign it; the current admin can hand off its own role.
pub fn handler(ctx: Context<SetFarmAdmin>, new_admin: Pubkey) -> Result<()> {
    require!(new_admin != Pubkey::default(), AdminError::InvalidDestination);

    let manager = &mut ctx.accounts.farm_manager;
    let caller = ctx.accounts.authority.key();
    require!(
        caller == manager.owner || caller == manager.farm_admin,
        AdminError::Unauthorized
    );

    manager.farm_admin = new_admin;
    msg!("Farm admin set: {}", new_admin);
    Ok(())
}

#[derive(Accounts)]
pub struct SetFarmAdmin<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_MANAGER_SEED, farm_manager.chef_state.as_ref()],
        bump = farm_manager.bump,
    )]
    pub farm_manager: Account<'info, FarmManager>,
}
