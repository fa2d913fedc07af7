//! Low-level Anchor instruction builders.
//!
//! Each function constructs a [`solana_sdk::instruction::Instruction`] ready
//! for signing and submission.  Account order mirrors the Anchor
//! `#[derive(Accounts)]` structs in the on-chain program exactly.
//!
//! Anchor instruction discriminators: `sha256("global:{name}")[..8]`.

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use std::str::FromStr;

// ─── Well-known program IDs ───────────────────────────────────────────────────

pub(crate) fn spl_token_id() -> Pubkey {
    Pubkey::from_str("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA").unwrap()
}

// ─── PDA seeds (mirrors programs/farm-admin/src/constants.rs) ────────────────

pub const FARM_MANAGER_SEED: &[u8] = b"farm_manager";
pub const FARM_AUTHORITY_SEED: &[u8] = b"farm_authority";

// ─── PDA derivation helpers ───────────────────────────────────────────────────

/// Derive the farm-manager PDA for a chef instance.
pub fn derive_farm_manager(chef_state: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FARM_MANAGER_SEED, chef_state.as_ref()], program_id)
}

/// Derive the farm-authority PDA the chef recognizes for gated mutations.
pub fn derive_farm_authority(chef_state: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FARM_AUTHORITY_SEED, chef_state.as_ref()], program_id)
}

// ─── Discriminator ────────────────────────────────────────────────────────────

fn disc(name: &str) -> [u8; 8] {
    let preimage = format!("global:{name}");
    let h = solana_sdk::hash::hash(preimage.as_bytes());
    h.to_bytes()[..8].try_into().unwrap()
}

// ─── Borsh argument encoding ──────────────────────────────────────────────────

fn push_vec_u64(data: &mut Vec<u8>, v: &[u64]) {
    data.extend_from_slice(&(v.len() as u32).to_le_bytes());
    for x in v {
        data.extend_from_slice(&x.to_le_bytes());
    }
}

fn push_vec_pubkey(data: &mut Vec<u8>, v: &[Pubkey]) {
    data.extend_from_slice(&(v.len() as u32).to_le_bytes());
    for pk in v {
        data.extend_from_slice(pk.as_ref());
    }
}

// ─── Shared account lists ─────────────────────────────────────────────────────

/// `{farm_admin, farm_manager, chef_state, farm_authority, chef_program}` —
/// the account set every admin-gated chef mutation takes.
fn manage_metas(
    farm_admin: &Pubkey,
    farm_manager: &Pubkey,
    chef_state: &Pubkey,
    farm_authority: &Pubkey,
    chef_program: &Pubkey,
    manager_mut: bool,
) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(*farm_admin, true),
        if manager_mut {
            AccountMeta::new(*farm_manager, false)
        } else {
            AccountMeta::new_readonly(*farm_manager, false)
        },
        AccountMeta::new(*chef_state, false),
        AccountMeta::new_readonly(*farm_authority, false),
        AccountMeta::new_readonly(*chef_program, false),
    ]
}

// ─── initialize ───────────────────────────────────────────────────────────────

/// Build the `initialize` instruction.  The payer becomes owner.
pub fn initialize_ix(
    program_id: &Pubkey,
    payer: &Pubkey,
    chef_state: &Pubkey,
    farm_admin: &Pubkey,
) -> Instruction {
    let (farm_manager, _) = derive_farm_manager(chef_state, program_id);
    let (farm_authority, _) = derive_farm_authority(chef_state, program_id);

    let mut data = disc("initialize").to_vec();
    data.extend_from_slice(farm_admin.as_ref());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*chef_state, false),
            AccountMeta::new(farm_manager, false), // PDA (init)
            AccountMeta::new_readonly(farm_authority, false),
            AccountMeta::new_readonly(Pubkey::default(), false), // system program
        ],
        data,
    }
}

// ─── Role management ──────────────────────────────────────────────────────────

/// Build `set_farm_admin` (signed by owner or the current admin).
pub fn set_farm_admin_ix(
    program_id: &Pubkey,
    authority: &Pubkey,
    chef_state: &Pubkey,
    new_admin: &Pubkey,
) -> Instruction {
    let (farm_manager, _) = derive_farm_manager(chef_state, program_id);
    let mut data = disc("set_farm_admin").to_vec();
    data.extend_from_slice(new_admin.as_ref());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(farm_manager, false),
        ],
        data,
    }
}

/// Build `nominate_farm_controller` (owner only).
pub fn nominate_farm_controller_ix(
    program_id: &Pubkey,
    owner: &Pubkey,
    chef_state: &Pubkey,
    new_controller: &Pubkey,
) -> Instruction {
    let (farm_manager, _) = derive_farm_manager(chef_state, program_id);
    let mut data = disc("nominate_farm_controller").to_vec();
    data.extend_from_slice(new_controller.as_ref());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new(farm_manager, false),
        ],
        data,
    }
}

/// Build `claim_farm_control` (signed by the nominated controller).
pub fn claim_farm_control_ix(
    program_id: &Pubkey,
    claimant: &Pubkey,
    chef_state: &Pubkey,
    chef_program: &Pubkey,
) -> Instruction {
    let (farm_manager, _) = derive_farm_manager(chef_state, program_id);
    let (farm_authority, _) = derive_farm_authority(chef_state, program_id);

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*claimant, true),
            AccountMeta::new(farm_manager, false),
            AccountMeta::new(*chef_state, false),
            AccountMeta::new_readonly(farm_authority, false),
            AccountMeta::new_readonly(*chef_program, false),
        ],
        data: disc("claim_farm_control").to_vec(),
    }
}

/// Build `set_reward_multiplier` (owner only).
pub fn set_reward_multiplier_ix(
    program_id: &Pubkey,
    owner: &Pubkey,
    chef_state: &Pubkey,
    chef_program: &Pubkey,
    multiplier: u64,
) -> Instruction {
    let (farm_manager, _) = derive_farm_manager(chef_state, program_id);
    let (farm_authority, _) = derive_farm_authority(chef_state, program_id);

    let mut data = disc("set_reward_multiplier").to_vec();
    data.extend_from_slice(&multiplier.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new_readonly(farm_manager, false),
            AccountMeta::new(*chef_state, false),
            AccountMeta::new_readonly(farm_authority, false),
            AccountMeta::new_readonly(*chef_program, false),
        ],
        data,
    }
}

/// Build `sweep_token` (owner only; moves the full vault balance).
pub fn sweep_token_ix(
    program_id: &Pubkey,
    owner: &Pubkey,
    chef_state: &Pubkey,
    vault: &Pubkey,
    destination: &Pubkey,
) -> Instruction {
    let (farm_manager, _) = derive_farm_manager(chef_state, program_id);
    let (farm_authority, _) = derive_farm_authority(chef_state, program_id);

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new_readonly(farm_manager, false),
            AccountMeta::new_readonly(farm_authority, false),
            AccountMeta::new(*vault, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(spl_token_id(), false),
        ],
        data: disc("sweep_token").to_vec(),
    }
}

// ─── Pool batches ─────────────────────────────────────────────────────────────

/// Build `add_farms` — parallel `alloc_points` / `stake_mints` arrays.
#[allow(clippy::too_many_arguments)]
pub fn add_farms_ix(
    program_id: &Pubkey,
    farm_admin: &Pubkey,
    chef_state: &Pubkey,
    chef_program: &Pubkey,
    alloc_points: &[u64],
    stake_mints: &[Pubkey],
    with_update: bool,
    with_sync: bool,
) -> Instruction {
    let (farm_manager, _) = derive_farm_manager(chef_state, program_id);
    let (farm_authority, _) = derive_farm_authority(chef_state, program_id);

    let mut data = disc("add_farms").to_vec();
    push_vec_u64(&mut data, alloc_points);
    push_vec_pubkey(&mut data, stake_mints);
    data.push(with_update as u8);
    data.push(with_sync as u8);

    Instruction {
        program_id: *program_id,
        accounts: manage_metas(farm_admin, &farm_manager, chef_state, &farm_authority, chef_program, false),
        data,
    }
}

/// Build `set_farms` — parallel `pids` / `alloc_points` arrays.
#[allow(clippy::too_many_arguments)]
pub fn set_farms_ix(
    program_id: &Pubkey,
    farm_admin: &Pubkey,
    chef_state: &Pubkey,
    chef_program: &Pubkey,
    pids: &[u64],
    alloc_points: &[u64],
    with_update: bool,
    with_sync: bool,
) -> Instruction {
    let (farm_manager, _) = derive_farm_manager(chef_state, program_id);
    let (farm_authority, _) = derive_farm_authority(chef_state, program_id);

    let mut data = disc("set_farms").to_vec();
    push_vec_u64(&mut data, pids);
    push_vec_u64(&mut data, alloc_points);
    data.push(with_update as u8);
    data.push(with_sync as u8);

    Instruction {
        program_id: *program_id,
        accounts: manage_metas(farm_admin, &farm_manager, chef_state, &farm_authority, chef_program, false),
        data,
    }
}

// ─── Fixed shares ─────────────────────────────────────────────────────────────

/// Build `register_fixed_farm`.
#[allow(clippy::too_many_arguments)]
pub fn register_fixed_farm_ix(
    program_id: &Pubkey,
    farm_admin: &Pubkey,
    chef_state: &Pubkey,
    chef_program: &Pubkey,
    pid: u64,
    share_bps: u16,
    with_update: bool,
    with_sync: bool,
) -> Instruction {
    fixed_farm_ix(
        "register_fixed_farm",
        program_id,
        farm_admin,
        chef_state,
        chef_program,
        pid,
        share_bps,
        with_update,
        with_sync,
    )
}

/// Build `update_fixed_farm` (share 0 deactivates the entry).
#[allow(clippy::too_many_arguments)]
pub fn update_fixed_farm_ix(
    program_id: &Pubkey,
    farm_admin: &Pubkey,
    chef_state: &Pubkey,
    chef_program: &Pubkey,
    pid: u64,
    share_bps: u16,
    with_update: bool,
    with_sync: bool,
) -> Instruction {
    fixed_farm_ix(
        "update_fixed_farm",
        program_id,
        farm_admin,
        chef_state,
        chef_program,
        pid,
        share_bps,
        with_update,
        with_sync,
    )
}

#[allow(clippy::too_many_arguments)]
fn fixed_farm_ix(
    name: &str,
    program_id: &Pubkey,
    farm_admin: &Pubkey,
    chef_state: &Pubkey,
    chef_program: &Pubkey,
    pid: u64,
    share_bps: u16,
    with_update: bool,
    with_sync: bool,
) -> Instruction {
    let (farm_manager, _) = derive_farm_manager(chef_state, program_id);
    let (farm_authority, _) = derive_farm_authority(chef_state, program_id);

    let mut data = disc(name).to_vec();
    data.extend_from_slice(&pid.to_le_bytes());
    data.extend_from_slice(&share_bps.to_le_bytes());
    data.push(with_update as u8);
    data.push(with_sync as u8);

    Instruction {
        program_id: *program_id,
        accounts: manage_metas(farm_admin, &farm_manager, chef_state, &farm_authority, chef_program, true),
        data,
    }
}

/// Build `sync_fixed_farms`.
pub fn sync_fixed_farms_ix(
    program_id: &Pubkey,
    farm_admin: &Pubkey,
    chef_state: &Pubkey,
    chef_program: &Pubkey,
) -> Instruction {
    let (farm_manager, _) = derive_farm_manager(chef_state, program_id);
    let (farm_authority, _) = derive_farm_authority(chef_state, program_id);

    Instruction {
        program_id: *program_id,
        accounts: manage_metas(farm_admin, &farm_manager, chef_state, &farm_authority, chef_program, false),
        data: disc("sync_fixed_farms").to_vec(),
    }
}

/// Build `update_selected_pools` — permissionless accrual nudge.
pub fn update_selected_pools_ix(
    program_id: &Pubkey,
    chef_state: &Pubkey,
    chef_program: &Pubkey,
    pids: &[u64],
) -> Instruction {
    let mut data = disc("update_selected_pools").to_vec();
    push_vec_u64(&mut data, pids);

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*chef_state, false),
            AccountMeta::new_readonly(*chef_program, false),
        ],
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminator_is_stable() {
        // Matches sha256("global:sync_fixed_farms")[..8].
        assert_eq!(disc("sync_fixed_farms").len(), 8);
        assert_ne!(disc("sync_fixed_farms"), disc("register_fixed_farm"));
    }

    #[test]
    fn batch_args_encode_borsh_layout() {
        let program = Pubkey::new_unique();
        let admin = Pubkey::new_unique();
        let chef = Pubkey::new_unique();
        let chef_prog = Pubkey::new_unique();

        let ix = set_farms_ix(&program, &admin, &chef, &chef_prog, &[1, 5], &[300, 400], true, false);
        let body = &ix.data[8..];
        assert_eq!(&body[0..4], &2u32.to_le_bytes());
        assert_eq!(&body[4..12], &1u64.to_le_bytes());
        assert_eq!(&body[12..20], &5u64.to_le_bytes());
        assert_eq!(&body[20..24], &2u32.to_le_bytes());
        assert_eq!(body[body.len() - 2], 1); // with_update
        assert_eq!(body[body.len() - 1], 0); // with_sync
    }

    #[test]
    fn manager_pda_is_seeded_by_chef_state() {
        let program = Pubkey::new_unique();
        let chef_a = Pubkey::new_unique();
        let chef_b = Pubkey::new_unique();
        assert_ne!(
            derive_farm_manager(&chef_a, &program).0,
            derive_farm_manager(&chef_b, &program).0
        );
    }
}
