//! On-chain account deserialization.
//!
//! Parses raw account bytes for `FarmManager` and `ChefState`.  Both carry
//! borsh `Option` and `Vec` fields, so parsing walks a cursor instead of
//! fixed offsets; field order mirrors the Anchor `#[account]` structs exactly.

use solana_sdk::pubkey::Pubkey;

use crate::error::{Error, Result};

// ─── FarmManager ──────────────────────────────────────────────────────────────

/// Deserialized `FarmManager` account state.
///
/// Layout (after 8-byte Anchor discriminator):
/// ```text
/// owner(32)  farm_admin(32)  pending_farm_controller(1 [+32])  chef_state(32)
/// farm_authority_bump(1)  bump(1)  total_fixed_share_bps(2)
/// fixed_pids(4 + 8·n)  entries(4 + 11·m)
/// ```
#[derive(Debug, Clone)]
pub struct FarmManagerState {
    pub owner: Pubkey,
    pub farm_admin: Pubkey,
    pub pending_farm_controller: Option<Pubkey>,
    pub chef_state: Pubkey,
    pub farm_authority_bump: u8,
    pub bump: u8,
    /// Aggregate ledger: sum of active entries' share_bps.
    pub total_fixed_share_bps: u16,
    /// Active pids, index-set order (unstable after removals).
    pub fixed_pids: Vec<u64>,
    pub entries: Vec<FixedShareEntryState>,
}

/// One registry entry; inactive entries are retained with `share_bps == 0`.
#[derive(Debug, Clone, Copy)]
pub struct FixedShareEntryState {
    pub pid: u64,
    pub share_bps: u16,
    pub active: bool,
}

/// Deserialize a `FarmManager` account from raw bytes.
pub fn parse_farm_manager(data: &[u8]) -> Result<FarmManagerState> {
    let mut c = Cursor::new(data);
    c.skip(8)?; // discriminator

    let owner = c.pubkey()?;
    let farm_admin = c.pubkey()?;
    let pending_farm_controller = c.option_pubkey()?;
    let chef_state = c.pubkey()?;
    let farm_authority_bump = c.u8()?;
    let bump = c.u8()?;
    let total_fixed_share_bps = c.u16()?;

    let n = c.u32()? as usize;
    let mut fixed_pids = Vec::with_capacity(n);
    for _ in 0..n {
        fixed_pids.push(c.u64()?);
    }

    let m = c.u32()? as usize;
    let mut entries = Vec::with_capacity(m);
    for _ in 0..m {
        entries.push(FixedShareEntryState {
            pid: c.u64()?,
            share_bps: c.u16()?,
            active: c.u8()? != 0,
        });
    }

    Ok(FarmManagerState {
        owner,
        farm_admin,
        pending_farm_controller,
        chef_state,
        farm_authority_bump,
        bump,
        total_fixed_share_bps,
        fixed_pids,
        entries,
    })
}

// ─── ChefState ────────────────────────────────────────────────────────────────

/// Deserialized `ChefState` account (the external reward distributor).
#[derive(Debug, Clone)]
pub struct ChefStateView {
    pub authority: Pubkey,
    pub pending_authority: Option<Pubkey>,
    pub reward_mint: Pubkey,
    pub reward_per_slot: u64,
    pub bonus_multiplier: u64,
    /// Sum of alloc_point over all pools.
    pub total_alloc_point: u64,
    pub pools: Vec<FarmPoolState>,
}

/// One chef pool slot.
#[derive(Debug, Clone, Copy)]
pub struct FarmPoolState {
    pub stake_mint: Pubkey,
    pub alloc_point: u64,
    pub last_reward_slot: u64,
    pub acc_reward_per_share: u128,
}

/// Deserialize a `ChefState` account from raw bytes.
pub fn parse_chef_state(data: &[u8]) -> Result<ChefStateView> {
    let mut c = Cursor::new(data);
    c.skip(8)?; // discriminator

    let authority = c.pubkey()?;
    let pending_authority = c.option_pubkey()?;
    let reward_mint = c.pubkey()?;
    let reward_per_slot = c.u64()?;
    let bonus_multiplier = c.u64()?;
    let total_alloc_point = c.u64()?;

    let n = c.u32()? as usize;
    let mut pools = Vec::with_capacity(n);
    for _ in 0..n {
        pools.push(FarmPoolState {
            stake_mint: c.pubkey()?,
            alloc_point: c.u64()?,
            last_reward_slot: c.u64()?,
            acc_reward_per_share: c.u128()?,
        });
    }

    Ok(ChefStateView {
        authority,
        pending_authority,
        reward_mint,
        reward_per_slot,
        bonus_multiplier,
        total_alloc_point,
        pools,
    })
}

// ─── Cursor ───────────────────────────────────────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.offset.checked_add(len).ok_or(Error::ParseError {
            offset: self.offset,
            reason: "offset overflow".into(),
        })?;
        if end > self.data.len() {
            return Err(Error::ParseError {
                offset: self.offset,
                reason: format!("need {len} bytes, {} remain", self.data.len() - self.offset),
            });
        }
        let slice = &self.data[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.take(2)?.try_into().unwrap()))
    }

    fn u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.take(4)?.try_into().unwrap()))
    }

    fn u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.take(8)?.try_into().unwrap()))
    }

    fn u128(&mut self) -> Result<u128> {
        Ok(u128::from_le_bytes(self.take(16)?.try_into().unwrap()))
    }

    fn pubkey(&mut self) -> Result<Pubkey> {
        let b: [u8; 32] = self.take(32)?.try_into().unwrap();
        Ok(Pubkey::from(b))
    }

    /// Borsh `Option<Pubkey>`: 0 for None, 1 followed by 32 bytes for Some.
    fn option_pubkey(&mut self) -> Result<Option<Pubkey>> {
        match self.u8()? {
            0 => Ok(None),
            1 => Ok(Some(self.pubkey()?)),
            tag => Err(Error::ParseError {
                offset: self.offset - 1,
                reason: format!("invalid Option tag {tag}"),
            }),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn push_pubkey(buf: &mut Vec<u8>, pk: &Pubkey) {
        buf.extend_from_slice(pk.as_ref());
    }

    #[test]
    fn parses_farm_manager_round_fields() {
        let owner = Pubkey::new_unique();
        let admin = Pubkey::new_unique();
        let pending = Pubkey::new_unique();
        let chef = Pubkey::new_unique();

        let mut buf = vec![0u8; 8]; // discriminator
        push_pubkey(&mut buf, &owner);
        push_pubkey(&mut buf, &admin);
        buf.push(1);
        push_pubkey(&mut buf, &pending);
        push_pubkey(&mut buf, &chef);
        buf.push(254); // farm_authority_bump
        buf.push(255); // bump
        buf.extend_from_slice(&1_750u16.to_le_bytes());
        buf.extend_from_slice(&2u32.to_le_bytes()); // fixed_pids
        buf.extend_from_slice(&1u64.to_le_bytes());
        buf.extend_from_slice(&5u64.to_le_bytes());
        buf.extend_from_slice(&3u32.to_le_bytes()); // entries
        for (pid, bps, active) in [(1u64, 1_000u16, 1u8), (5, 750, 1), (9, 0, 0)] {
            buf.extend_from_slice(&pid.to_le_bytes());
            buf.extend_from_slice(&bps.to_le_bytes());
            buf.push(active);
        }

        let m = parse_farm_manager(&buf).unwrap();
        assert_eq!(m.owner, owner);
        assert_eq!(m.farm_admin, admin);
        assert_eq!(m.pending_farm_controller, Some(pending));
        assert_eq!(m.chef_state, chef);
        assert_eq!(m.total_fixed_share_bps, 1_750);
        assert_eq!(m.fixed_pids, vec![1, 5]);
        assert_eq!(m.entries.len(), 3);
        assert!(!m.entries[2].active);
        assert_eq!(m.entries[2].share_bps, 0);
    }

    #[test]
    fn parses_chef_state_with_pools() {
        let authority = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let stake = Pubkey::new_unique();

        let mut buf = vec![0u8; 8];
        push_pubkey(&mut buf, &authority);
        buf.push(0); // pending_authority = None
        push_pubkey(&mut buf, &mint);
        buf.extend_from_slice(&10u64.to_le_bytes()); // reward_per_slot
        buf.extend_from_slice(&1u64.to_le_bytes()); // bonus_multiplier
        buf.extend_from_slice(&350u64.to_le_bytes()); // total_alloc_point
        buf.extend_from_slice(&2u32.to_le_bytes());
        for (point, slot, acc) in [(250u64, 100u64, 7u128), (100, 100, 0)] {
            push_pubkey(&mut buf, &stake);
            buf.extend_from_slice(&point.to_le_bytes());
            buf.extend_from_slice(&slot.to_le_bytes());
            buf.extend_from_slice(&acc.to_le_bytes());
        }

        let s = parse_chef_state(&buf).unwrap();
        assert_eq!(s.authority, authority);
        assert_eq!(s.pending_authority, None);
        assert_eq!(s.total_alloc_point, 350);
        assert_eq!(s.pools.len(), 2);
        assert_eq!(s.pools[0].alloc_point, 250);
        assert_eq!(s.pools[1].acc_reward_per_share, 0);
    }

    #[test]
    fn truncated_account_is_an_error() {
        let err = parse_chef_state(&[0u8; 20]).unwrap_err();
        assert!(matches!(err, Error::ParseError { .. }));
    }
}
