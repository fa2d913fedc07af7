// Host-only end-to-end flow for the fixed-share registry and synchronizer,
// driven against a simulated chef (plain structs, no validator).

use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::Pubkey;

use farm_admin::constants::*;
use farm_admin::error::AdminError;
use farm_admin::instructions::add_farms::validate_add_batch;
use farm_admin::instructions::set_farms::validate_set_batch;
use farm_admin::instructions::sync_math::{compute_sync, SyncPlan};
use farm_admin::state::FarmManager;

// ─── Simulated chef ────────────────────────────────────────────────────────

/// Pool weights by pid; pid 0 is the chef-managed base pool, which the chef
/// re-floats to 25% of the grand total after every admin write.
struct SimChef {
    alloc_points: Vec<u64>,
}

impl SimChef {
    /// Base pool plus `floating` pools of 100 weight each.
    fn new(floating: usize) -> Self {
        let mut alloc_points = vec![250];
        alloc_points.extend(std::iter::repeat(100).take(floating));
        Self { alloc_points }
    }

    fn total(&self) -> u64 {
        self.alloc_points.iter().sum()
    }

    fn pool_count(&self) -> u64 {
        self.alloc_points.len() as u64
    }

    fn apply(&mut self, plan: &SyncPlan) {
        for w in &plan.weights {
            self.alloc_points[w.pid as usize] = w.alloc_point;
        }
        // The chef's own base-pool management: pin pid 0 at 25% of new_total.
        self.alloc_points[0] =
            (plan.new_total as u128 * BASE_POOL_SHARE_BPS as u128 / BPS_DENOMINATOR as u128) as u64;
    }

    fn fixed_view(&self, manager: &FarmManager) -> Vec<(u64, u16, u64)> {
        manager
            .fixed_pids
            .iter()
            .map(|&pid| {
                let e = manager.fixed_share_entry(pid).unwrap();
                (pid, e.share_bps, self.alloc_points[pid as usize])
            })
            .collect()
    }

    fn sync(&mut self, manager: &FarmManager) -> SyncPlan {
        let plan = compute_sync(
            self.total(),
            self.alloc_points[0],
            manager.total_fixed_share_bps,
            &self.fixed_view(manager),
        )
        .unwrap();
        self.apply(&plan);
        plan
    }
}

fn manager() -> FarmManager {
    FarmManager {
        owner: Pubkey::new_unique(),
        farm_admin: Pubkey::new_unique(),
        pending_farm_controller: None,
        chef_state: Pubkey::new_unique(),
        farm_authority_bump: 254,
        bump: 255,
        total_fixed_share_bps: 0,
        fixed_pids: vec![],
        entries: vec![],
    }
}

fn code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        other => panic!("expected AnchorError, got {other:?}"),
    }
}

fn expect(expected: AdminError) -> u32 {
    expected as u32 + ERROR_CODE_OFFSET
}

// ─── Scenario ──────────────────────────────────────────────────────────────

#[test]
fn full_allocation_flow() {
    // Base pool 0 plus 19 floating pools (pids 1–19).
    let mut chef = SimChef::new(19);
    let mut m = manager();

    m.register_fixed_share(1, 1_000, chef.pool_count()).unwrap();
    m.register_fixed_share(5, 500, chef.pool_count()).unwrap();
    m.register_fixed_share(10, 250, chef.pool_count()).unwrap();
    assert_eq!(m.total_fixed_share_bps, 1_750);

    // Reserved pid and active duplicate are rejected with no state change.
    assert_eq!(
        code(m.register_fixed_share(0, 100, chef.pool_count()).unwrap_err()),
        expect(AdminError::InvalidPid)
    );
    assert_eq!(
        code(m.register_fixed_share(1, 100, chef.pool_count()).unwrap_err()),
        expect(AdminError::AlreadyActive)
    );
    assert_eq!(m.total_fixed_share_bps, 1_750);
    assert_eq!(m.active_fixed_farms(), 3);

    // Synchronize: every pinned pool lands within 3% absolute of target.
    let plan = chef.sync(&m);
    for (pid, target_bps) in [(1u64, 1_000u64), (5, 500), (10, 250)] {
        let actual_bps =
            chef.alloc_points[pid as usize] as u128 * 10_000 / plan.new_total as u128;
        let diff = (actual_bps as i128 - target_bps as i128).unsigned_abs();
        assert!(diff <= 300, "pid {pid}: {actual_bps} bps vs {target_bps} bps");
        // The truncation-only bound is far tighter than 3%.
        assert!(diff <= 1 + m.active_fixed_farms() as u128);
    }

    // Deactivate pid 1.
    m.update_fixed_share(1, 0).unwrap();
    assert_eq!(m.total_fixed_share_bps, 750);
    assert_eq!(m.active_fixed_farms(), 2);
    assert!(!m.fixed_share_entry(1).unwrap().active);
    assert_eq!(m.fixed_share_entry(1).unwrap().share_bps, 0);
}

#[test]
fn resync_is_idempotent_over_unchanged_floating_weights() {
    let mut chef = SimChef::new(19);
    let mut m = manager();
    m.register_fixed_share(1, 1_000, chef.pool_count()).unwrap();
    m.register_fixed_share(5, 500, chef.pool_count()).unwrap();

    let first = chef.sync(&m);
    let second = chef.sync(&m);

    assert_eq!(first.weights, second.weights);
    assert_eq!(first.new_total, second.new_total);
}

#[test]
fn sync_tracks_floating_pool_churn() {
    let mut chef = SimChef::new(19);
    let mut m = manager();
    m.register_fixed_share(1, 2_000, chef.pool_count()).unwrap();
    chef.sync(&m);

    // Floating pools triple; the pinned pool must converge again.
    for pid in 11..=19 {
        chef.alloc_points[pid] = 600;
    }
    let plan = chef.sync(&m);
    let actual_bps = chef.alloc_points[1] as u128 * 10_000 / plan.new_total as u128;
    assert!((1_990..=2_000).contains(&actual_bps), "got {actual_bps} bps");
}

#[test]
fn batch_validation_rejects_mismatched_lengths() {
    let mints = vec![Pubkey::new_unique(), Pubkey::new_unique()];
    assert_eq!(
        code(validate_add_batch(&[100], &mints).unwrap_err()),
        expect(AdminError::LengthMismatch)
    );
    assert!(validate_add_batch(&[100, 200], &mints).is_ok());

    assert_eq!(
        code(validate_set_batch(&[1, 2], &[100], 20).unwrap_err()),
        expect(AdminError::LengthMismatch)
    );
}

#[test]
fn batch_validation_guards_pids() {
    assert_eq!(
        code(validate_set_batch(&[0], &[100], 20).unwrap_err()),
        expect(AdminError::InvalidPid)
    );
    assert_eq!(
        code(validate_set_batch(&[20], &[100], 20).unwrap_err()),
        expect(AdminError::PidOutOfBounds)
    );
    assert!(validate_set_batch(&[1, 19], &[100, 200], 20).is_ok());
}

#[test]
fn budget_holds_across_register_update_sequences() {
    let mut chef = SimChef::new(30);
    let mut m = manager();

    let ops: &[(u64, u16)] = &[
        (1, 2_000),
        (2, 2_000),
        (3, 2_000),
        (4, 1_000), // would exceed 6_500
        (2, 0),
        (4, 2_000), // fits after freeing pid 2
        (1, 4_000), // would exceed again
    ];
    for &(pid, bps) in ops {
        let already = m.fixed_share_entry(pid).map(|e| e.active).unwrap_or(false);
        let _ = if already {
            m.update_fixed_share(pid, bps)
        } else {
            m.register_fixed_share(pid, bps, chef.pool_count())
        };
        assert!(m.total_fixed_share_bps <= MAX_FIXED_SHARE_BPS);
        let active = m.entries.iter().filter(|e| e.active).count();
        assert_eq!(m.active_fixed_farms(), active);
    }
    assert_eq!(m.total_fixed_share_bps, 6_000);

    // Still synchronizable at this load.
    let plan = chef.sync(&m);
    assert!(plan.new_total > 0);
}
