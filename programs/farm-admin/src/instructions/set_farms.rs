use anchor_lang::prelude::*;
use chef_itf::{program::Chef, ChefState};

use crate::{constants::*, error::AdminError, state::FarmManager};

use super::sync_fixed_farms::apply_sync;

/// Batch validation shared with the host tests: parallel arrays must agree
/// in length, pid 0 is chef-managed, every pid must exist.  Runs before any
/// element is applied, so a bad batch changes nothing.
pub fn validate_set_batch(pids: &[u64], alloc_points: &[u64], pool_count: u64) -> Result<()> {
    require!(pids.len() == alloc_points.len(), AdminError::LengthMismatch);
    for &pid in pids {
        require!(pid != BASE_POOL_PID, AdminError::InvalidPid);
        require!(pid < pool_count, AdminError::PidOutOfBounds);
    }
    Ok(())
}

/// Overwrite a batch of existing pools' weights, one `set_pool` per element.
pub fn handler(
    ctx: Context<SetFarms>,
    pids: Vec<u64>,
    alloc_points: Vec<u64>,
    with_update: bool,
    with_sync: bool,
) -> Result<()> {
    validate_set_batch(&pids, &alloc_points, ctx.accounts.chef_state.pool_count())?;

    if with_update {
        chef_itf::cpi::mass_update_pools(CpiContext::new(
            ctx.accounts.chef_program.to_account_info(),
            chef_itf::cpi::accounts::RefreshPools {
                chef_state: ctx.accounts.chef_state.to_account_info(),
            },
        ))?;
    }

    let chef_key = ctx.accounts.farm_manager.chef_state;
    let bump = ctx.accounts.farm_manager.farm_authority_bump;
    let seeds: &[&[u8]] = &[FARM_AUTHORITY_SEED, chef_key.as_ref(), &[bump]];
    let signer = &[seeds];

    for (&pid, &point) in pids.iter().zip(alloc_points.iter()) {
        chef_itf::cpi::set_pool(
            CpiContext::new_with_signer(
                ctx.accounts.chef_program.to_account_info(),
                chef_itf::cpi::accounts::MutatePools {
                    chef_state: ctx.accounts.chef_state.to_account_info(),
                    authority: ctx.accounts.farm_authority.to_account_info(),
                },
                signer,
            ),
            pid,
            point,
            false,
        )?;
    }

    if with_sync {
        ctx.accounts.chef_state.reload()?;
        apply_sync(
            &ctx.accounts.farm_manager,
            &ctx.accounts.chef_state,
            ctx.accounts.farm_authority.to_account_info(),
            ctx.accounts.chef_program.to_account_info(),
        )?;
    }

    msg!("Set {} farm weights", pids.len());
    Ok(())
}

#[derive(Accounts)]
pub struct SetFarms<'info> {
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
