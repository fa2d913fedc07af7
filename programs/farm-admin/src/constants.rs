/// PDA seeds
pub const FARM_MANAGER_SEED: &[u8] = b"farm_manager";
pub const FARM_AUTHORITY_SEED: &[u8] = b"farm_authority";

/// Denominator for basis-point math
pub const BPS_DENOMINATOR: u64 = 10_000;

/// The chef-managed base pool (pid 0) is pinned at 25%
pub const BASE_POOL_SHARE_BPS: u16 = 2_500;

/// Headroom keeping the sync scale factor away from the divide-by-zero
/// region as the aggregate share approaches 100%
pub const SYNC_HEADROOM_BPS: u16 = 1_000;

/// Ceiling on the aggregate fixed-share ledger:
/// 10_000 − BASE_POOL_SHARE_BPS − SYNC_HEADROOM_BPS
pub const MAX_FIXED_SHARE_BPS: u16 = 6_500;

/// Registry capacity — distinct pids ever registered (account is fixed-size)
pub const MAX_FIXED_FARMS: usize = 32;

/// Ceiling for the chef's bonus reward multiplier
pub const MAX_REWARD_MULTIPLIER: u64 = 10;

/// Reserved pid owned by the chef itself; never registrable
pub const BASE_POOL_PID: u64 = 0;
