//! Allocation constants and synchronization preview math.
//!
//! Mirrors the on-chain arithmetic exactly so off-chain previews match what
//! `sync_fixed_farms` will write.

use crate::error::{Error, Result};
use crate::state::{ChefStateView, FarmManagerState};
use crate::types::{PlannedWeight, SyncPreview};

// ─── Constants ────────────────────────────────────────────────────────────────

/// Basis-point denominator.
pub const BPS_DENOMINATOR: u128 = 10_000;
/// The chef-managed base pool's pinned share (25%).
pub const BASE_POOL_SHARE_BPS: u128 = 2_500;
/// Headroom keeping the scale factor away from the divide-by-zero region.
pub const SYNC_HEADROOM_BPS: u128 = 1_000;
/// Ceiling on the aggregate fixed-share ledger.
pub const MAX_FIXED_SHARE_BPS: u16 = 6_500;

// ─── Preview ──────────────────────────────────────────────────────────────────

/// Compute the weights a sync would write, given pre-fetched manager and chef
/// state.  No RPC calls are made here.
///
/// Floating weight (total − base − fixed) is held constant; the grand total
/// is re-scaled so floating pools end at `1 − S` of it, where `S` is the
/// ledger plus the base pool's 25%.  Per-pool writes truncate independently,
/// same as on-chain.
pub fn preview_sync(manager: &FarmManagerState, chef: &ChefStateView) -> Result<SyncPreview> {
    if manager.fixed_pids.is_empty() {
        return Err(Error::NoFixedFarms);
    }

    let mut fixed_current: u128 = 0;
    let mut shares = Vec::with_capacity(manager.fixed_pids.len());
    for &pid in &manager.fixed_pids {
        let entry = manager
            .entries
            .iter()
            .find(|e| e.pid == pid)
            .ok_or(Error::InconsistentWeights)?;
        let pool = chef
            .pools
            .get(pid as usize)
            .ok_or(Error::InconsistentWeights)?;
        fixed_current += pool.alloc_point as u128;
        shares.push((pid, entry.share_bps as u128));
    }

    let base = chef
        .pools
        .first()
        .map(|p| p.alloc_point as u128)
        .unwrap_or(0);
    let floating = (chef.total_alloc_point as u128)
        .checked_sub(base)
        .and_then(|v| v.checked_sub(fixed_current))
        .ok_or(Error::InconsistentWeights)?;

    let share = manager.total_fixed_share_bps as u128 + BASE_POOL_SHARE_BPS;
    let scale = BPS_DENOMINATOR * BPS_DENOMINATOR / (BPS_DENOMINATOR - share);
    let new_total = floating.checked_mul(scale).ok_or(Error::MathOverflow)? / BPS_DENOMINATOR;
    let allotted = new_total - floating;

    let weights = shares
        .into_iter()
        .map(|(pid, bps)| {
            let point = allotted.checked_mul(bps).ok_or(Error::MathOverflow)? / share;
            let projected = if new_total == 0 {
                0
            } else {
                point * BPS_DENOMINATOR / new_total
            };
            Ok(PlannedWeight {
                pid,
                alloc_point: u64::try_from(point).map_err(|_| Error::MathOverflow)?,
                projected_share_bps: projected as u16,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SyncPreview {
        new_total_alloc_point: u64::try_from(new_total).map_err(|_| Error::MathOverflow)?,
        allotted_weight: u64::try_from(allotted).map_err(|_| Error::MathOverflow)?,
        weights,
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
