use anchor_lang::prelude::*;
use chef_itf::{program::Chef, ChefState};

use crate::error::AdminError;

/// Permissionless batched nudge: bring an explicit list of pools' reward
/// accumulators up to date.  Lets anyone subdivide the chef's all-pools
/// recompute into compute-budget-sized chunks; not security sensitive.
pub fn handler(ctx: Context<UpdateSelectedPools>, pids: Vec<u64>) -> Result<()> {
    let pool_count = ctx.accounts.chef_state.pool_count();
    for &pid in &pids {
        require!(pid < pool_count, AdminError::PidOutOfBounds);
    }

    for &pid in &pids {
        chef_itf::cpi::update_pool(
            CpiContext::new(
                ctx.accounts.chef_program.to_account_info(),
                chef_itf::cpi::accounts::RefreshPools {
                    chef_state: ctx.accounts.chef_state.to_account_info(),
                },
            ),
            pid,
        )?;
    }

    msg!("Updated {} pools", pids.len());
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateSelectedPools<'info> {
    #[account(mut)]
    pub chef_state: Account<'info, ChefState>,

    pub chef_program: Program<'info, Chef>,
}
