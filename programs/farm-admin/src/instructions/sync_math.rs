use anchor_lang::prelude::*;

use crate::{constants::*, error::AdminError};

/// One write-back the synchronizer wants applied to the chef.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncWeight {
    pub pid: u64,
    pub alloc_point: u64,
}

/// Result of the fixed-share recomputation, shared by the on-chain
/// write-back and off-chain previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    /// Grand total weight after all writes land.
    pub new_total: u64,
    /// Weight distributed across the fixed pools (new_total − floating).
    pub allotted: u64,
    /// New weight per fixed pool, in index-set order.
    pub weights: Vec<SyncWeight>,
}

/// Recompute fixed-pool weights so each converges to its configured share of
/// the grand total while floating pools keep their absolute weight.
///
/// * `total_alloc_point` – chef's current total weight (T)
/// * `base_alloc_point`  – base pool's (pid 0) current weight (B)
/// * `fixed_share_bps`   – the aggregate ledger (active entries' sum)
/// * `fixed`             – `(pid, share_bps, current alloc_point)` per active
///                         fixed pool, in index-set order
///
/// The floating weight `T − B − ΣF` is held constant; the grand total is
/// re-scaled so floating pools end at `1 − S` of it, where
/// `S = ledger + BASE_POOL_SHARE_BPS`.  `allotted` spans the whole pinned
/// share (fixed pools plus the base pool's slice, which the chef itself
/// maintains).  Each pool's write is an independent truncating division —
/// there is no reconciliation pass, so up to one unit per pool is lost to
/// the floating remainder.
pub fn compute_sync(
    total_alloc_point: u64,
    base_alloc_point: u64,
    fixed_share_bps: u16,
    fixed: &[(u64, u16, u64)],
) -> Result<SyncPlan> {
    if fixed.is_empty() {
        return Ok(SyncPlan { new_total: total_alloc_point, allotted: 0, weights: vec![] });
    }

    const BPS: u128 = BPS_DENOMINATOR as u128;

    let fixed_current: u128 = fixed.iter().map(|&(_, _, point)| point as u128).sum();
    let floating = (total_alloc_point as u128)
        .checked_sub(base_alloc_point as u128)
        .and_then(|v| v.checked_sub(fixed_current))
        .ok_or(AdminError::MathOverflow)?;

    // S < BPS is guaranteed transitively: ledger ≤ MAX_FIXED_SHARE_BPS, so the
    // denominator below is at least SYNC_HEADROOM_BPS.
    let share = fixed_share_bps as u128 + BASE_POOL_SHARE_BPS as u128;
    let scale = BPS * BPS / (BPS - share);

    let new_total = floating.checked_mul(scale).ok_or(AdminError::MathOverflow)? / BPS;
    let allotted = new_total - floating; // scale ≥ BPS, so new_total ≥ floating

    let mut weights = Vec::with_capacity(fixed.len());
    for &(pid, share_bps, _) in fixed {
        let point = allotted
            .checked_mul(share_bps as u128)
            .ok_or(AdminError::MathOverflow)?
            / share;
        weights.push(SyncWeight {
            pid,
            alloc_point: u64::try_from(point).map_err(|_| AdminError::MathOverflow)?,
        });
    }

    Ok(SyncPlan {
        new_total: u64::try_from(new_total).map_err(|_| AdminError::MathOverflow)?,
        allotted: u64::try_from(allotted).map_err(|_| AdminError::MathOverflow)?,
        weights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_is_a_noop() {
        let plan = compute_sync(1_000, 250, 0, &[]).unwrap();
        assert_eq!(plan.new_total, 1_000);
        assert_eq!(plan.allotted, 0);
        assert!(plan.weights.is_empty());
    }

    #[test]
    fn single_pool_hits_its_target_share() {
        // Base 250, one fixed pool at 10%, 18 floating pools of 100 each.
        let fixed = [(1u64, 1_000u16, 100u64)];
        let plan = compute_sync(250 + 100 + 1_800, 250, 1_000, &fixed).unwrap();

        // floating = 1800; S = 3500 bps; scale = 10000²/6500 = 15384
        assert_eq!(plan.new_total, 1_800 * 15_384 / 10_000); // 2769
        assert_eq!(plan.allotted, plan.new_total - 1_800);

        let w = plan.weights[0].alloc_point;
        // Truncation in scale and per-pool division costs a few bps at most.
        let share_bps = w as u128 * 10_000 / plan.new_total as u128;
        assert!((995..=1_000).contains(&share_bps), "got {share_bps} bps");
    }

    #[test]
    fn weights_scale_proportionally_to_shares() {
        let fixed = [(1, 2_000, 50), (2, 1_000, 700), (3, 500, 0)];
        let plan = compute_sync(10_000, 2_000, 3_500, &fixed).unwrap();

        let w: Vec<u64> = plan.weights.iter().map(|x| x.alloc_point).collect();
        // 2000:1000:500 ratios, up to one truncation unit each.
        assert!(w[0] >= 2 * w[1] - 2 && w[0] <= 2 * w[1] + 2);
        assert!(w[1] >= 2 * w[2] - 2 && w[1] <= 2 * w[2] + 2);
    }

    #[test]
    fn truncation_residual_is_bounded_by_pool_count() {
        // Awkward shares that cannot divide evenly.
        let fixed = [(1, 333, 10), (2, 777, 10), (3, 1_111, 10), (4, 77, 10)];
        let ledger: u16 = 333 + 777 + 1_111 + 77;
        let plan = compute_sync(100_003, 17, ledger, &fixed).unwrap();

        // The fixed pools' slice of `allotted` is ledger/S of it; the base
        // pool's slice is left for the chef.  Independent truncation loses at
        // most one unit per pool against that slice.
        let share = ledger as u128 + BASE_POOL_SHARE_BPS as u128;
        let ideal = (plan.allotted as u128 * ledger as u128 / share) as u64;
        let written: u64 = plan.weights.iter().map(|w| w.alloc_point).sum();
        assert!(written <= ideal);
        assert!(ideal - written <= fixed.len() as u64);
    }

    #[test]
    fn ledger_at_ceiling_still_divides() {
        // S = 6500 + 2500 = 9000 bps; denominator is the 1000-bps headroom.
        let fixed = [(1, 6_500, 0)];
        let plan = compute_sync(1_250, 250, 6_500, &fixed).unwrap();
        assert_eq!(plan.new_total, 1_000 * (10_000 * 10_000 / 1_000) / 10_000);
        let share_bps = plan.weights[0].alloc_point as u128 * 10_000 / plan.new_total as u128;
        assert!((6_499..=6_501).contains(&share_bps), "got {share_bps} bps");
    }

    #[test]
    fn underflow_in_floating_weight_is_reported() {
        // Fixed weights exceed what the totals allow.
        let fixed = [(1, 1_000, 2_000)];
        assert!(compute_sync(1_000, 500, 1_000, &fixed).is_err());
    }

    #[test]
    fn resync_of_converged_state_is_stable() {
        let fixed = [(1, 1_000, 100), (5, 500, 40), (10, 250, 10)];
        let first = compute_sync(2_350, 250, 1_750, &fixed).unwrap();

        // Feed the written weights back with the implied new totals.
        let written: u64 = first.weights.iter().map(|w| w.alloc_point).sum();
        let floating = 2_350 - 250 - 150;
        let refixed: Vec<(u64, u16, u64)> = fixed
            .iter()
            .zip(&first.weights)
            .map(|(&(pid, bps, _), w)| (pid, bps, w.alloc_point))
            .collect();
        let second =
            compute_sync(floating + 250 + written + 250, 250 + 250, 1_750, &refixed).unwrap();

        // Same floating weight in → same plan out.
        assert_eq!(first.weights, second.weights);
        assert_eq!(first.new_total, second.new_total);
    }
}
