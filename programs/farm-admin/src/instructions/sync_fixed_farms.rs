use anchor_lang::prelude::*;
use chef_itf::{program::Chef, ChefState};

use crate::{constants::*, error::AdminError, state::FarmManager};

use super::sync_math::{compute_sync, SyncPlan};

/// Explicit synchronization trigger.  Unlike the `with_sync` flag on batch
/// mutations, calling this with an empty registry is an error — the caller
/// asked for work that cannot exist.
pub fn handler(ctx: Context<SyncFixedFarms>) -> Result<()> {
    require!(
        !ctx.accounts.farm_manager.fixed_pids.is_empty(),
        AdminError::NoFixedFarms
    );
    let plan = apply_sync(
        &ctx.accounts.farm_manager,
        &ctx.accounts.chef_state,
        ctx.accounts.farm_authority.to_account_info(),
        ctx.accounts.chef_program.to_account_info(),
    )?;
    msg!(
        "Synced {} fixed farms: new_total={} allotted={}",
        plan.weights.len(),
        plan.new_total,
        plan.allotted
    );
    Ok(())
}

/// Compute the plan from current chef state and write each fixed pool's new
/// weight back, one independent `set_pool` CPI per pool, never a forced mass
/// update.  No-op when the registry is empty.
pub(crate) fn apply_sync<'info>(
    manager: &Account<'info, FarmManager>,
    chef_state: &Account<'info, ChefState>,
    farm_authority: AccountInfo<'info>,
    chef_program: AccountInfo<'info>,
) -> Result<SyncPlan> {
    let fixed: Vec<(u64, u16, u64)> = manager
        .fixed_pids
        .iter()
        .map(|&pid| {
            let entry = manager.fixed_share_entry(pid).ok_or(AdminError::NotActive)?;
            let point = chef_state.alloc_point(pid).ok_or(AdminError::PidOutOfBounds)?;
            Ok((pid, entry.share_bps, point))
        })
        .collect::<Result<_>>()?;

    let base_point = chef_state
        .alloc_point(BASE_POOL_PID)
        .ok_or(AdminError::PidOutOfBounds)?;
    let plan = compute_sync(
        chef_state.total_alloc_point,
        base_point,
        manager.total_fixed_share_bps,
        &fixed,
    )?;

    let chef_key = manager.chef_state;
    let bump = manager.farm_authority_bump;
    let seeds: &[&[u8]] = &[FARM_AUTHORITY_SEED, chef_key.as_ref(), &[bump]];
    let signer = &[seeds];

    for w in &plan.weights {
        chef_itf::cpi::set_pool(
            CpiContext::new_with_signer(
                chef_program.clone(),
                chef_itf::cpi::accounts::MutatePools {
                    chef_state: chef_state.to_account_info(),
                    authority: farm_authority.clone(),
                },
                signer,
            ),
            w.pid,
            w.alloc_point,
            false,
        )?;
    }
    Ok(plan)
}

#[derive(Accounts)]
pub struct SyncFixedFarms<'info> {
    pub farm_admin: Signer<'info>,

    #[account(
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
