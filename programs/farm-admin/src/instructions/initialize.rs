use anchor_lang::prelude::*;
use chef_itf::ChefState;

use crate::{constants::*, error::AdminError, state::FarmManager};

/// Create the manager PDA for a chef instance.
/// The payer becomes owner; the chef's authority must separately be handed
/// to the farm-authority PDA on the chef side before gated CPIs succeed.
pub fn handler(ctx: Context<Initialize>, farm_admin: Pubkey) -> Result<()> {
    require!(farm_admin != Pubkey::default(), AdminError::InvalidDestination);

    let manager = &mut ctx.accounts.farm_manager;
    manager.owner = ctx.accounts.payer.key();
    manager.farm_admin = farm_admin;
    manager.pending_farm_controller = None;
    manager.chef_state = ctx.accounts.chef_state.key();
    manager.farm_authority_bump = ctx.bumps.farm_authority;
    manager.bump = ctx.bumps.farm_manager;
    manager.total_fixed_share_bps = 0;
    manager.fixed_pids = vec![];
    manager.entries = vec![];

    msg!(
        "Farm manager created: chef={} owner={} admin={}",
        manager.chef_state,
        manager.owner,
        manager.farm_admin
    );
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub chef_state: Account<'info, ChefState>,

    #[account(
        init,
        payer = payer,
        space = FarmManager::LEN,
        seeds = [FARM_MANAGER_SEED, chef_state.key().as_ref()],
        bump,
    )]
    pub farm_manager: Account<'info, FarmManager>,

    /// CHECK: PDA the chef recognizes as its authority — holds no data
    #[account(
        seeds = [FARM_AUTHORITY_SEED, chef_state.key().as_ref()],
        bump,
    )]
    pub farm_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
