//! Interface crate for the chef reward-distributor program.
//!
//! The chef is an external collaborator: it owns the pool set, splits the
//! per-slot reward across pools proportionally to `alloc_point`, and manages
//! pid 0 (the base pool) itself.  This crate declares only what the admin
//! layer needs — the `ChefState` account layout for direct reads and the
//! instruction surface for CPI mutations.  Bodies are `unimplemented!()`;
//! the real program is deployed separately.

use anchor_lang::prelude::*;

declare_id!("GwD29e8f5Hh969nHKL3KFuQXVquZ2A3zhsM9MQBumNnz");

#[program]
pub mod chef {
    use super::*;

    /// Append a new pool with the given weight and staking mint.
    #[allow(unused_variables)]
    pub fn add_pool(
        ctx: Context<MutatePools>,
        alloc_point: u64,
        stake_mint: Pubkey,
        with_update: bool,
    ) -> Result<()> {
        unimplemented!("chef-itf is just an interface")
    }

    /// Overwrite an existing pool's weight.
    #[allow(unused_variables)]
    pub fn set_pool(
        ctx: Context<MutatePools>,
        pid: u64,
        alloc_point: u64,
        with_update: bool,
    ) -> Result<()> {
        unimplemented!("chef-itf is just an interface")
    }

    /// Bring every pool's reward accumulator up to the current slot.
    #[allow(unused_variables)]
    pub fn mass_update_pools(ctx: Context<RefreshPools>) -> Result<()> {
        unimplemented!("chef-itf is just an interface")
    }

    /// Bring one pool's reward accumulator up to the current slot.
    #[allow(unused_variables)]
    pub fn update_pool(ctx: Context<RefreshPools>, pid: u64) -> Result<()> {
        unimplemented!("chef-itf is just an interface")
    }

    /// Set the bonus reward multiplier.
    #[allow(unused_variables)]
    pub fn set_reward_multiplier(ctx: Context<MutatePools>, multiplier: u64) -> Result<()> {
        unimplemented!("chef-itf is just an interface")
    }

    /// Nominate a new chef authority (the chef runs its own two-phase
    /// acceptance; the nominee must claim from its side).
    #[allow(unused_variables)]
    pub fn transfer_authority(ctx: Context<MutatePools>, new_authority: Pubkey) -> Result<()> {
        unimplemented!("chef-itf is just an interface")
    }
}

/// One reward-bearing pool slot.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct FarmPool {
    pub stake_mint: Pubkey,
    /// Allocation weight; rewards split proportionally to this.
    pub alloc_point: u64,
    pub last_reward_slot: u64,
    pub acc_reward_per_share: u128,
}

/// Root chef account.  Pid 0 is the chef-managed base pool.
#[account]
pub struct ChefState {
    pub authority: Pubkey,
    pub pending_authority: Option<Pubkey>,
    pub reward_mint: Pubkey,
    pub reward_per_slot: u64,
    pub bonus_multiplier: u64,
    /// Sum of `alloc_point` over all pools.
    pub total_alloc_point: u64,
    pub pools: Vec<FarmPool>,
}

impl ChefState {
    pub fn pool_count(&self) -> u64 {
        self.pools.len() as u64
    }

    pub fn alloc_point(&self, pid: u64) -> Option<u64> {
        self.pools.get(pid as usize).map(|p| p.alloc_point)
    }
}

/// Authority-gated pool mutations.
#[derive(Accounts)]
pub struct MutatePools<'info> {
    /// CHECK: interface only — the chef validates against its stored authority
    #[account(mut)]
    pub chef_state: AccountInfo<'info>,
    pub authority: Signer<'info>,
}

/// Permissionless reward-accumulator refreshes.
#[derive(Accounts)]
pub struct RefreshPools<'info> {
    /// CHECK: interface only
    #[account(mut)]
    pub chef_state: AccountInfo<'info>,
}
