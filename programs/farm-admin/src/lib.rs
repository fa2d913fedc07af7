/// Farm-Admin — role-gated allocation manager for the chef reward distributor.
///
/// 12 instructions:
///   initialize                — create the manager PDA for a chef instance
///   set_farm_admin            — hand the pool-management role to a new key
///   nominate_farm_controller  — owner nominates a new chef controller
///   claim_farm_control        — nominee claims; chef authority transfer begins
///   set_reward_multiplier     — owner-bounded chef bonus multiplier
///   sweep_token               — owner recovers tokens from PDA custody
///   add_farms                 — batch-append pools to the chef
///   set_farms                 — batch-overwrite existing pools' weights
///   register_fixed_farm       — pin a pool to a share of total rewards
///   update_fixed_farm         — retarget or deactivate a pinned pool
///   sync_fixed_farms          — recompute and write back pinned weights
///   update_selected_pools     — permissionless batched reward-accrual nudge

// ─── Security contact ─────────────────────────────────────────────────────────

use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name:             "Farm-Admin",
    project_url:      "https://github.com/liqdlad-rgb/farm-admin",
    contacts:         "email:liqdlad@gmail.com",
    policy:           "Please report security vulnerabilities by emailing liqdlad@gmail.com. \
                       We aim to respond within 48 hours.",
    source_code:      "https://github.com/liqdlad-rgb/farm-admin",
    preferred_languages: "en"
}

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;
pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("FdsodKBhvzNCqb7TpVVQugMxukZoDLSSrmqik6y1jHeE");

#[program]
pub mod farm_admin {
    use super::*;

    /// Create the manager PDA; payer becomes owner.
    pub fn initialize(ctx: Context<Initialize>, farm_admin: Pubkey) -> Result<()> {
        initialize::handler(ctx, farm_admin)
    }

    /// Reassign the farm-admin role (owner or current admin).
    pub fn set_farm_admin(ctx: Context<SetFarmAdmin>, new_admin: Pubkey) -> Result<()> {
        set_farm_admin::handler(ctx, new_admin)
    }

    /// Owner nominates a new chef controller; nothing moves until claimed.
    pub fn nominate_farm_controller(
        ctx: Context<NominateFarmController>,
        new_controller: Pubkey,
    ) -> Result<()> {
        nominate_farm_controller::handler(ctx, new_controller)
    }

    /// Nominee claims chef control; clears the pending slot.
    pub fn claim_farm_control(ctx: Context<ClaimFarmControl>) -> Result<()> {
        claim_farm_control::handler(ctx)
    }

    /// Owner-only chef bonus multiplier, capped at MAX_REWARD_MULTIPLIER.
    pub fn set_reward_multiplier(ctx: Context<SetRewardMultiplier>, multiplier: u64) -> Result<()> {
        set_reward_multiplier::handler(ctx, multiplier)
    }

    /// Owner recovers mistakenly sent tokens from PDA custody.
    pub fn sweep_token(ctx: Context<SweepToken>) -> Result<()> {
        sweep_token::handler(ctx)
    }

    /// Batch-append pools. Flags control mass-update before / resync after.
    pub fn add_farms(
        ctx: Context<AddFarms>,
        alloc_points: Vec<u64>,
        stake_mints: Vec<Pubkey>,
        with_update: bool,
        with_sync: bool,
    ) -> Result<()> {
        add_farms::handler(ctx, alloc_points, stake_mints, with_update, with_sync)
    }

    /// Batch-overwrite existing pools' weights (pid 0 is chef-managed).
    pub fn set_farms(
        ctx: Context<SetFarms>,
        pids: Vec<u64>,
        alloc_points: Vec<u64>,
        with_update: bool,
        with_sync: bool,
    ) -> Result<()> {
        set_farms::handler(ctx, pids, alloc_points, with_update, with_sync)
    }

    /// Pin a pool to a fixed share of total distribution.
    pub fn register_fixed_farm(
        ctx: Context<RegisterFixedFarm>,
        pid: u64,
        share_bps: u16,
        with_update: bool,
        with_sync: bool,
    ) -> Result<()> {
        register_fixed_farm::handler(ctx, pid, share_bps, with_update, with_sync)
    }

    /// Retarget a pinned pool; share 0 deactivates it.
    pub fn update_fixed_farm(
        ctx: Context<UpdateFixedFarm>,
        pid: u64,
        share_bps: u16,
        with_update: bool,
        with_sync: bool,
    ) -> Result<()> {
        update_fixed_farm::handler(ctx, pid, share_bps, with_update, with_sync)
    }

    /// Recompute and write back every pinned pool's weight.
    pub fn sync_fixed_farms(ctx: Context<SyncFixedFarms>) -> Result<()> {
        sync_fixed_farms::handler(ctx)
    }

    /// Permissionless batched reward-accrual nudge.
    pub fn update_selected_pools(ctx: Context<UpdateSelectedPools>, pids: Vec<u64>) -> Result<()> {
        update_selected_pools::handler(ctx, pids)
    }
}
