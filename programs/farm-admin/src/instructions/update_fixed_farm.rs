use anchor_lang::prelude::*;
use chef_itf::{program::Chef, ChefState};

use crate::{constants::*, error::AdminError, state::FarmManager};

use super::sync_fixed_farms::apply_sync;

/// Change an active fixed farm's target share.  A share of 0 deactivates the
/// entry; the pool keeps whatever weight it last had until the next sync or
/// explicit `set_farms` write.
pub fn handler(
    ctx: Context<UpdateFixedFarm>,
    pid: u64,
    share_bps: u16,
    with_update: bool,
    with_sync: bool,
) -> Result<()> {
    if with_update {
        chef_itf::cpi::mass_update_pools(CpiContext::new(
            ctx.accounts.chef_program.to_account_info(),
            chef_itf::cpi::accounts::RefreshPools {
                chef_state: ctx.accounts.chef_state.to_account_info(),
            },
        ))?;
    }

    ctx.accounts.farm_manager.update_fixed_share(pid, share_bps)?;

    if with_sync {
        ctx.accounts.chef_state.reload()?;
        apply_sync(
            &ctx.accounts.farm_manager,
            &ctx.accounts.chef_state,
            ctx.accounts.farm_authority.to_account_info(),
            ctx.accounts.chef_program.to_account_info(),
        )?;
    }

    msg!(
        "Fixed farm updated: pid={} share={}bps ledger={}bps",
        pid,
        share_bps,
        ctx.accounts.farm_manager.total_fixed_share_bps
    );
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateFixedFarm<'info> {
    pub farm_admin: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_MANAGER_SEED, farm_manager.chef_state.as_ref()],
        bump = farm_manager.bump,
        has_one = farm_admin @ AdminError::Unauthorized,
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
