use anchor_lang::prelude::*;

use crate::{constants::*, error::AdminError};

// ─── FixedShareEntry ───────────────────────────────────────────────────────
// One pinned pool.  Deactivated entries are retained (share_bps == 0,
// active == false) so past registrations stay readable; a retained entry is
// re-activated in place if the pid is pinned again.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct FixedShareEntry {
    pub pid: u64,           // 8
    /// Target share of total distribution, basis points
    pub share_bps: u16,     // 2
    pub active: bool,       // 1
}

impl FixedShareEntry {
    pub const LEN: usize = 11;
}

// ─── FarmManager ───────────────────────────────────────────────────────────
// Governance roles plus the fixed-share registry for one chef instance.
// One PDA per chef_state; the companion farm-authority PDA is the identity
// the chef recognizes for gated CPIs.
#[account]
pub struct FarmManager {
    /// Highest-trust role: controller handoff, multiplier, sweeps
    pub owner: Pubkey,                          // 32
    /// Pool and fixed-share management role
    pub farm_admin: Pubkey,                     // 32
    /// Two-phase handoff slot for moving chef control away from this layer
    pub pending_farm_controller: Option<Pubkey>, // 1 + 32
    /// The managed chef state account, pinned at initialization
    pub chef_state: Pubkey,                     // 32
    pub farm_authority_bump: u8,                // 1
    pub bump: u8,                               // 1
    /// Aggregate ledger: sum of active entries' share_bps.
    /// Invariant: ≤ MAX_FIXED_SHARE_BPS after every operation.
    pub total_fixed_share_bps: u16,             // 2
    /// Index set of active pids; O(1) removal via swap_remove, order unstable
    pub fixed_pids: Vec<u64>,                   // 4 + 8 * MAX_FIXED_FARMS
    /// Every entry ever registered, active or not
    pub entries: Vec<FixedShareEntry>,          // 4 + 11 * MAX_FIXED_FARMS
}

impl FarmManager {
    // 8 discriminator + 32+32+33+32+1+1+2 + (4+256) + (4+352) = 757
    pub const LEN: usize = 757;

    fn entry_index(&self, pid: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.pid == pid)
    }

    /// The entry for `pid`, active or retained-inactive.
    pub fn fixed_share_entry(&self, pid: u64) -> Option<&FixedShareEntry> {
        self.entry_index(pid).map(|i| &self.entries[i])
    }

    /// Number of currently active fixed farms.
    pub fn active_fixed_farms(&self) -> usize {
        self.fixed_pids.len()
    }

    /// Ledger plus the base pool's pinned share — the slice of total
    /// distribution this layer controls, basis points.
    pub fn total_allocation_share_bps(&self) -> u16 {
        self.total_fixed_share_bps + BASE_POOL_SHARE_BPS
    }

    /// Pin `pid` to `share_bps` of total distribution.
    pub fn register_fixed_share(
        &mut self,
        pid: u64,
        share_bps: u16,
        pool_count: u64,
    ) -> Result<()> {
        require!(pid != BASE_POOL_PID && pid < pool_count, AdminError::InvalidPid);

        let existing = self.entry_index(pid);
        if let Some(i) = existing {
            require!(!self.entries[i].active, AdminError::AlreadyActive);
        }

        let next = self.total_fixed_share_bps as u32 + share_bps as u32;
        require!(next <= MAX_FIXED_SHARE_BPS as u32, AdminError::BudgetExceeded);

        match existing {
            Some(i) => {
                self.entries[i].share_bps = share_bps;
                self.entries[i].active = true;
            }
            None => {
                require!(self.entries.len() < MAX_FIXED_FARMS, AdminError::RegistryFull);
                self.entries.push(FixedShareEntry { pid, share_bps, active: true });
            }
        }
        self.fixed_pids.push(pid);
        self.total_fixed_share_bps = next as u16;
        Ok(())
    }

    /// Change an active entry's target share; `new_share_bps == 0` deactivates
    /// it (entry retained, pid leaves the index set, reads back as 0).
    pub fn update_fixed_share(&mut self, pid: u64, new_share_bps: u16) -> Result<()> {
        let i = self
            .entry_index(pid)
            .filter(|&i| self.entries[i].active)
            .ok_or(AdminError::NotActive)?;

        let next = self.total_fixed_share_bps as u32 - self.entries[i].share_bps as u32
            + new_share_bps as u32;
        require!(next <= MAX_FIXED_SHARE_BPS as u32, AdminError::BudgetExceeded);

        self.total_fixed_share_bps = next as u16;
        self.entries[i].share_bps = new_share_bps;

        if new_share_bps == 0 {
            self.entries[i].active = false;
            if let Some(pos) = self.fixed_pids.iter().position(|&p| p == pid) {
                self.fixed_pids.swap_remove(pos);
            }
        }
        Ok(())
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::ERROR_CODE_OFFSET;

    fn manager() -> FarmManager {
        FarmManager {
            owner: Pubkey::new_unique(),
            farm_admin: Pubkey::new_unique(),
            pending_farm_controller: None,
            chef_state: Pubkey::new_unique(),
            farm_authority_bump: 255,
            bump: 255,
            total_fixed_share_bps: 0,
            fixed_pids: vec![],
            entries: vec![],
        }
    }

    fn assert_err(res: Result<()>, expected: AdminError) {
        match res.unwrap_err() {
            anchor_lang::error::Error::AnchorError(e) => {
                assert_eq!(e.error_code_number, expected as u32 + ERROR_CODE_OFFSET)
            }
            other => panic!("expected AnchorError, got {other:?}"),
        }
    }

    #[test]
    fn register_tracks_ledger_and_index() {
        let mut m = manager();
        m.register_fixed_share(1, 1_000, 20).unwrap();
        m.register_fixed_share(5, 500, 20).unwrap();
        m.register_fixed_share(10, 250, 20).unwrap();

        assert_eq!(m.total_fixed_share_bps, 1_750);
        assert_eq!(m.active_fixed_farms(), 3);
        assert_eq!(m.total_allocation_share_bps(), 1_750 + BASE_POOL_SHARE_BPS);
        assert_eq!(m.fixed_share_entry(5).unwrap().share_bps, 500);
    }

    #[test]
    fn base_pool_is_reserved() {
        let mut m = manager();
        assert_err(m.register_fixed_share(0, 100, 20), AdminError::InvalidPid);
    }

    #[test]
    fn register_rejects_unknown_pid() {
        let mut m = manager();
        assert_err(m.register_fixed_share(20, 100, 20), AdminError::InvalidPid);
    }

    #[test]
    fn register_rejects_active_duplicate() {
        let mut m = manager();
        m.register_fixed_share(1, 1_000, 20).unwrap();
        assert_err(m.register_fixed_share(1, 100, 20), AdminError::AlreadyActive);
        assert_eq!(m.total_fixed_share_bps, 1_000);
    }

    #[test]
    fn budget_is_enforced_with_no_state_change() {
        let mut m = manager();
        m.register_fixed_share(1, 6_000, 20).unwrap();
        assert_err(m.register_fixed_share(2, 501, 20), AdminError::BudgetExceeded);
        assert_eq!(m.total_fixed_share_bps, 6_000);
        assert_eq!(m.active_fixed_farms(), 1);
        assert!(m.fixed_share_entry(2).is_none());

        // Exactly at the ceiling is fine.
        m.register_fixed_share(2, 500, 20).unwrap();
        assert_eq!(m.total_fixed_share_bps, MAX_FIXED_SHARE_BPS);
    }

    #[test]
    fn update_applies_delta_both_directions() {
        let mut m = manager();
        m.register_fixed_share(1, 1_000, 20).unwrap();
        m.register_fixed_share(2, 2_000, 20).unwrap();

        m.update_fixed_share(1, 3_000).unwrap();
        assert_eq!(m.total_fixed_share_bps, 5_000);
        m.update_fixed_share(2, 100).unwrap();
        assert_eq!(m.total_fixed_share_bps, 3_100);

        assert_err(m.update_fixed_share(1, 6_500), AdminError::BudgetExceeded);
        assert_eq!(m.total_fixed_share_bps, 3_100);
    }

    #[test]
    fn update_rejects_inactive_and_unknown() {
        let mut m = manager();
        assert_err(m.update_fixed_share(1, 100), AdminError::NotActive);
        m.register_fixed_share(1, 1_000, 20).unwrap();
        m.update_fixed_share(1, 0).unwrap();
        assert_err(m.update_fixed_share(1, 100), AdminError::NotActive);
    }

    #[test]
    fn zero_update_deactivates_and_reads_back_zero() {
        let mut m = manager();
        m.register_fixed_share(1, 1_000, 20).unwrap();
        m.register_fixed_share(5, 500, 20).unwrap();
        m.register_fixed_share(10, 250, 20).unwrap();

        m.update_fixed_share(1, 0).unwrap();
        let e = m.fixed_share_entry(1).unwrap();
        assert!(!e.active);
        assert_eq!(e.share_bps, 0);
        assert_eq!(m.total_fixed_share_bps, 750);
        assert_eq!(m.active_fixed_farms(), 2);
        // Swap-remove keeps membership, not order.
        assert!(m.fixed_pids.contains(&5) && m.fixed_pids.contains(&10));
    }

    #[test]
    fn deactivated_pid_can_be_pinned_again_in_place() {
        let mut m = manager();
        m.register_fixed_share(1, 1_000, 20).unwrap();
        m.update_fixed_share(1, 0).unwrap();
        m.register_fixed_share(1, 2_000, 20).unwrap();

        assert_eq!(m.entries.len(), 1);
        assert_eq!(m.total_fixed_share_bps, 2_000);
        assert!(m.fixed_share_entry(1).unwrap().active);
    }

    #[test]
    fn index_set_matches_active_entries() {
        let mut m = manager();
        for pid in 1..=6u64 {
            m.register_fixed_share(pid, 500, 20).unwrap();
        }
        m.update_fixed_share(3, 0).unwrap();
        m.update_fixed_share(6, 0).unwrap();

        let active = m.entries.iter().filter(|e| e.active).count();
        assert_eq!(m.active_fixed_farms(), active);
        for e in m.entries.iter().filter(|e| e.active) {
            assert!(m.fixed_pids.contains(&e.pid));
        }
    }

    #[test]
    fn registry_capacity_counts_distinct_pids() {
        let mut m = manager();
        for pid in 1..=(MAX_FIXED_FARMS as u64) {
            m.register_fixed_share(pid, 100, 100).unwrap();
        }
        assert_err(m.register_fixed_share(50, 100, 100), AdminError::RegistryFull);

        // A retained slot is reusable.
        m.update_fixed_share(1, 0).unwrap();
        m.register_fixed_share(1, 100, 100).unwrap();
    }
}
