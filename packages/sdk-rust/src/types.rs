//! Serializable result types returned by the client.

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// One fixed-share registry entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FixedShareInfo {
    pub pid: u64,
    /// Target share of total distribution, basis points.
    pub share_bps: u16,
    pub active: bool,
}

/// Snapshot of the farm-manager account plus derived registry figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerInfo {
    pub address: Pubkey,
    pub owner: Pubkey,
    pub farm_admin: Pubkey,
    pub pending_farm_controller: Option<Pubkey>,
    pub chef_state: Pubkey,
    /// Sum of active entries' share_bps.
    pub total_fixed_share_bps: u16,
    /// Ledger plus the base pool's pinned 25%.
    pub total_allocation_share_bps: u16,
    pub active_fixed_farms: usize,
    pub entries: Vec<FixedShareInfo>,
}

/// One chef pool with its live share of total weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PoolInfo {
    pub pid: u64,
    pub stake_mint: Pubkey,
    pub alloc_point: u64,
    /// alloc_point ÷ total_alloc_point, basis points (0 when the chef is empty).
    pub current_share_bps: u16,
}

/// A planned weight write from a sync preview.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlannedWeight {
    pub pid: u64,
    pub alloc_point: u64,
    /// Share this weight lands at against the projected grand total, bps.
    pub projected_share_bps: u16,
}

/// Off-chain preview of what `sync_fixed_farms` would write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncPreview {
    /// Grand total weight after all writes land.
    pub new_total_alloc_point: u64,
    /// Weight allotted to the pinned share (fixed pools + base pool).
    pub allotted_weight: u64,
    pub weights: Vec<PlannedWeight>,
}
