use anchor_lang::prelude::*;
use chef_itf::{program::Chef, ChefState};

use crate::{constants::*, error::AdminError, state::FarmManager};

use super::sync_fixed_farms::apply_sync;

/// Length check shared with the host tests — the whole batch fails before
/// any element is applied.
pub fn validate_add_batch(alloc_points: &[u64], stake_mints: &[Pubkey]) -> Result<()> {
    require!(alloc_points.len() == stake_mints.len(), AdminError::LengthMismatch);
    Ok(())
}

/// Append a batch of pools to the chef, one `add_pool` per element.
/// `with_update` mass-updates reward accumulators before applying;
/// `with_sync` re-reads the chef and resynchronizes fixed shares after.
/// Both are caller-paid knobs, never inferred.
pub fn handler(
    ctx: Context<AddFarms>,
    alloc_points: Vec<u64>,
    stake_mints: Vec<Pubkey>,
    with_update: bool,
    with_sync: bool,
) -> Result<()> {
    validate_add_batch(&alloc_points, &stake_mints)?;

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

    for (&point, &mint) in alloc_points.iter().zip(stake_mints.iter()) {
        chef_itf::cpi::add_pool(
            CpiContext::new_with_signer(
                ctx.accounts.chef_program.to_account_info(),
                chef_itf::cpi::accounts::MutatePools {
                    chef_state: ctx.accounts.chef_state.to_account_info(),
                    authority: ctx.accounts.farm_authority.to_account_info(),
                },
                signer,
            ),
            point,
            mint,
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

    msg!("Added {} farms", alloc_points.len());
    Ok(())
}

#[derive(Accounts)]
pub struct AddFarms<'info> {
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
