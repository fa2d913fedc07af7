//! [`FarmAdminClient`] — the main entry point for operator integrations.

use std::str::FromStr;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::{
    error::{Error, Result},
    instructions::{
        add_farms_ix, claim_farm_control_ix, derive_farm_authority, derive_farm_manager,
        initialize_ix, nominate_farm_controller_ix, register_fixed_farm_ix, set_farm_admin_ix,
        set_farms_ix, set_reward_multiplier_ix, sweep_token_ix, sync_fixed_farms_ix,
        update_fixed_farm_ix, update_selected_pools_ix,
    },
    math::{preview_sync, BASE_POOL_SHARE_BPS, BPS_DENOMINATOR},
    state::{parse_chef_state, parse_farm_manager, ChefStateView, FarmManagerState},
    types::{FixedShareInfo, ManagerInfo, PoolInfo, SyncPreview},
};

// ─── Constants ────────────────────────────────────────────────────────────────

const DEFAULT_PROGRAM_ID: &str = "FdsodKBhvzNCqb7TpVVQugMxukZoDLSSrmqik6y1jHeE";
const DEFAULT_CHEF_PROGRAM_ID: &str = "GwD29e8f5Hh969nHKL3KFuQXVquZ2A3zhsM9MQBumNnz";
const DEVNET_RPC: &str = "https://api.devnet.solana.com";
const MAINNET_RPC: &str = "https://api.mainnet-beta.solana.com";

// ─── Client ───────────────────────────────────────────────────────────────────

/// Async Farm-Admin client, scoped to one chef instance.
///
/// ```rust,no_run
/// # use farm_admin_sdk::FarmAdminClient;
/// # use solana_sdk::pubkey::Pubkey;
/// # use std::str::FromStr;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let chef = Pubkey::from_str("GwD29e8f5Hh969nHKL3KFuQXVquZ2A3zhsM9MQBumNnz")?;
/// let client = FarmAdminClient::devnet(chef);
/// let info = client.manager_info().await?;
/// println!("ledger: {} bps over {} farms", info.total_fixed_share_bps, info.active_fixed_farms);
/// # Ok(())
/// # }
/// ```
pub struct FarmAdminClient {
    rpc_url: String,
    program_id: Pubkey,
    chef_program_id: Pubkey,
    chef_state: Pubkey,
}

impl FarmAdminClient {
    /// Create a client pointing at any RPC endpoint.
    pub fn new(rpc_url: impl Into<String>, chef_state: Pubkey) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            program_id: Pubkey::from_str(DEFAULT_PROGRAM_ID).unwrap(),
            chef_program_id: Pubkey::from_str(DEFAULT_CHEF_PROGRAM_ID).unwrap(),
            chef_state,
        }
    }

    /// Pre-configured client for Solana devnet.
    pub fn devnet(chef_state: Pubkey) -> Self {
        Self::new(DEVNET_RPC, chef_state)
    }

    /// Pre-configured client for Solana mainnet-beta.
    pub fn mainnet(chef_state: Pubkey) -> Self {
        Self::new(MAINNET_RPC, chef_state)
    }

    /// Override the admin program ID (useful for locally deployed programs).
    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    /// Override the chef program ID.
    pub fn with_chef_program_id(mut self, chef_program_id: Pubkey) -> Self {
        self.chef_program_id = chef_program_id;
        self
    }

    /// The farm-manager PDA for this chef instance.
    pub fn manager_address(&self) -> Pubkey {
        derive_farm_manager(&self.chef_state, &self.program_id).0
    }

    /// The farm-authority PDA the chef must recognize as its authority.
    pub fn authority_address(&self) -> Pubkey {
        derive_farm_authority(&self.chef_state, &self.program_id).0
    }

    // ── Read operations ───────────────────────────────────────────────────────

    /// Fetch and decode the farm-manager account.
    pub async fn manager_info(&self) -> Result<ManagerInfo> {
        let rpc = self.rpc();
        let manager = self.fetch_manager(&rpc).await?;
        Ok(ManagerInfo {
            address: self.manager_address(),
            owner: manager.owner,
            farm_admin: manager.farm_admin,
            pending_farm_controller: manager.pending_farm_controller,
            chef_state: manager.chef_state,
            total_fixed_share_bps: manager.total_fixed_share_bps,
            total_allocation_share_bps: manager.total_fixed_share_bps
                + BASE_POOL_SHARE_BPS as u16,
            active_fixed_farms: manager.fixed_pids.len(),
            entries: manager
                .entries
                .iter()
                .map(|e| FixedShareInfo { pid: e.pid, share_bps: e.share_bps, active: e.active })
                .collect(),
        })
    }

    /// Every chef pool with its live share of total weight.
    pub async fn pools(&self) -> Result<Vec<PoolInfo>> {
        let rpc = self.rpc();
        let chef = self.fetch_chef(&rpc).await?;
        let total = chef.total_alloc_point as u128;
        Ok(chef
            .pools
            .iter()
            .enumerate()
            .map(|(pid, p)| PoolInfo {
                pid: pid as u64,
                stake_mint: p.stake_mint,
                alloc_point: p.alloc_point,
                current_share_bps: if total == 0 {
                    0
                } else {
                    (p.alloc_point as u128 * BPS_DENOMINATOR / total) as u16
                },
            })
            .collect())
    }

    /// Off-chain preview of what `sync_fixed_farms` would write.
    pub async fn preview_sync(&self) -> Result<SyncPreview> {
        let rpc = self.rpc();
        let manager = self.fetch_manager(&rpc).await?;
        let chef = self.fetch_chef(&rpc).await?;
        preview_sync(&manager, &chef)
    }

    // ── Write operations ──────────────────────────────────────────────────────

    /// Create the manager PDA; the payer becomes owner.
    pub async fn initialize(&self, payer: &Keypair, farm_admin: Pubkey) -> Result<Signature> {
        let ix = initialize_ix(&self.program_id, &payer.pubkey(), &self.chef_state, &farm_admin);
        self.send(payer, ix).await
    }

    /// Reassign the farm-admin role (signer must be owner or current admin).
    pub async fn set_farm_admin(&self, payer: &Keypair, new_admin: Pubkey) -> Result<Signature> {
        let ix = set_farm_admin_ix(&self.program_id, &payer.pubkey(), &self.chef_state, &new_admin);
        self.send(payer, ix).await
    }

    /// Nominate a new chef controller (owner only).
    pub async fn nominate_farm_controller(
        &self,
        payer: &Keypair,
        new_controller: Pubkey,
    ) -> Result<Signature> {
        let ix = nominate_farm_controller_ix(
            &self.program_id,
            &payer.pubkey(),
            &self.chef_state,
            &new_controller,
        );
        self.send(payer, ix).await
    }

    /// Claim chef control (signer must be the nominated controller).
    pub async fn claim_farm_control(&self, payer: &Keypair) -> Result<Signature> {
        let ix = claim_farm_control_ix(
            &self.program_id,
            &payer.pubkey(),
            &self.chef_state,
            &self.chef_program_id,
        );
        self.send(payer, ix).await
    }

    /// Set the chef's bonus multiplier (owner only, capped on-chain).
    pub async fn set_reward_multiplier(&self, payer: &Keypair, multiplier: u64) -> Result<Signature> {
        let ix = set_reward_multiplier_ix(
            &self.program_id,
            &payer.pubkey(),
            &self.chef_state,
            &self.chef_program_id,
            multiplier,
        );
        self.send(payer, ix).await
    }

    /// Recover the full balance of a PDA-owned vault (owner only).
    pub async fn sweep_token(
        &self,
        payer: &Keypair,
        vault: Pubkey,
        destination: Pubkey,
    ) -> Result<Signature> {
        let ix = sweep_token_ix(&self.program_id, &payer.pubkey(), &self.chef_state, &vault, &destination);
        self.send(payer, ix).await
    }

    /// Batch-append pools to the chef.
    pub async fn add_farms(
        &self,
        payer: &Keypair,
        alloc_points: &[u64],
        stake_mints: &[Pubkey],
        with_update: bool,
        with_sync: bool,
    ) -> Result<Signature> {
        if alloc_points.len() != stake_mints.len() {
            return Err(Error::InvalidArgument(
                "alloc_points and stake_mints must be the same length".into(),
            ));
        }
        let ix = add_farms_ix(
            &self.program_id,
            &payer.pubkey(),
            &self.chef_state,
            &self.chef_program_id,
            alloc_points,
            stake_mints,
            with_update,
            with_sync,
        );
        self.send(payer, ix).await
    }

    /// Batch-overwrite existing pools' weights.
    pub async fn set_farms(
        &self,
        payer: &Keypair,
        pids: &[u64],
        alloc_points: &[u64],
        with_update: bool,
        with_sync: bool,
    ) -> Result<Signature> {
        if pids.len() != alloc_points.len() {
            return Err(Error::InvalidArgument(
                "pids and alloc_points must be the same length".into(),
            ));
        }
        let ix = set_farms_ix(
            &self.program_id,
            &payer.pubkey(),
            &self.chef_state,
            &self.chef_program_id,
            pids,
            alloc_points,
            with_update,
            with_sync,
        );
        self.send(payer, ix).await
    }

    /// Pin a pool to a fixed share of total distribution.
    pub async fn register_fixed_farm(
        &self,
        payer: &Keypair,
        pid: u64,
        share_bps: u16,
        with_update: bool,
        with_sync: bool,
    ) -> Result<Signature> {
        let ix = register_fixed_farm_ix(
            &self.program_id,
            &payer.pubkey(),
            &self.chef_state,
            &self.chef_program_id,
            pid,
            share_bps,
            with_update,
            with_sync,
        );
        self.send(payer, ix).await
    }

    /// Retarget a pinned pool; share 0 deactivates it.
    pub async fn update_fixed_farm(
        &self,
        payer: &Keypair,
        pid: u64,
        share_bps: u16,
        with_update: bool,
        with_sync: bool,
    ) -> Result<Signature> {
        let ix = update_fixed_farm_ix(
            &self.program_id,
            &payer.pubkey(),
            &self.chef_state,
            &self.chef_program_id,
            pid,
            share_bps,
            with_update,
            with_sync,
        );
        self.send(payer, ix).await
    }

    /// Recompute and write back every pinned pool's weight.
    pub async fn sync_fixed_farms(&self, payer: &Keypair) -> Result<Signature> {
        let ix = sync_fixed_farms_ix(
            &self.program_id,
            &payer.pubkey(),
            &self.chef_state,
            &self.chef_program_id,
        );
        self.send(payer, ix).await
    }

    /// Permissionless batched reward-accrual nudge.
    pub async fn update_selected_pools(&self, payer: &Keypair, pids: &[u64]) -> Result<Signature> {
        let ix = update_selected_pools_ix(
            &self.program_id,
            &self.chef_state,
            &self.chef_program_id,
            pids,
        );
        self.send(payer, ix).await
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn rpc(&self) -> RpcClient {
        RpcClient::new_with_commitment(self.rpc_url.clone(), CommitmentConfig::confirmed())
    }

    async fn fetch_manager(&self, rpc: &RpcClient) -> Result<FarmManagerState> {
        let addr = self.manager_address();
        let data = rpc
            .get_account_data(&addr)
            .await
            .map_err(|_| Error::ManagerNotFound(self.chef_state))?;
        parse_farm_manager(&data)
    }

    async fn fetch_chef(&self, rpc: &RpcClient) -> Result<ChefStateView> {
        let data = rpc
            .get_account_data(&self.chef_state)
            .await
            .map_err(|_| Error::ChefNotFound(self.chef_state))?;
        parse_chef_state(&data)
    }

    async fn send(&self, payer: &Keypair, ix: Instruction) -> Result<Signature> {
        let rpc = self.rpc();
        let blockhash = rpc.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&payer.pubkey()),
            &[payer],
            blockhash,
        );
        Ok(rpc.send_and_confirm_transaction(&tx).await?)
    }
}
