//! Farm-Admin Rust SDK — integration example
//!
//! Demonstrates: inspecting the registry, previewing a sync, pinning pools,
//! and batched pool management.
//!
//! # Setup
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! farm-admin-sdk = { path = "../packages/sdk-rust" }
//! solana-sdk     = "2.1"
//! tokio          = { version = "1", features = ["full"] }
//! ```
//!
//! # Environment
//!
//! ```bash
//! export SOLANA_RPC_URL="https://api.devnet.solana.com"
//! export CHEF_STATE="GwD29e8f5Hh969nHKL3KFuQXVquZ2A3zhsM9MQBumNnz"
//! export ADMIN_KEYPAIR_PATH="$HOME/.config/solana/id.json"
//! ```

use std::str::FromStr;

use farm_admin_sdk::FarmAdminClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn rpc_url() -> String {
    std::env::var("SOLANA_RPC_URL").unwrap_or_else(|_| "https://api.devnet.solana.com".into())
}

fn chef_state() -> Pubkey {
    let s = std::env::var("CHEF_STATE").expect("set CHEF_STATE to the chef account address");
    Pubkey::from_str(&s).expect("CHEF_STATE is not a valid pubkey")
}

fn load_keypair() -> Keypair {
    let path = std::env::var("ADMIN_KEYPAIR_PATH").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/.config/solana/id.json")
    });
    read_keypair_file(&path).unwrap_or_else(|e| panic!("Failed to load keypair from {path}: {e}"))
}

// ─── Example 1: Inspect the registry ──────────────────────────────────────────

/// Read roles, the aggregate ledger, and every pinned pool.
/// No keypair required — pure read operation.
async fn example_inspect(client: &FarmAdminClient) {
    println!("\n── Manager state ───────────────────────────────────────────");

    let info = client.manager_info().await.expect("manager_info failed");
    println!("  Owner:          {}", info.owner);
    println!("  Farm admin:     {}", info.farm_admin);
    println!("  Ledger:         {} bps", info.total_fixed_share_bps);
    println!("  Total pinned:   {} bps (incl. base pool)", info.total_allocation_share_bps);
    println!("  Active farms:   {}", info.active_fixed_farms);
    for e in &info.entries {
        println!("    pid {:>3}  {:>5} bps  active={}", e.pid, e.share_bps, e.active);
    }
}

// ─── Example 2: Preview a synchronization ─────────────────────────────────────

/// Dry-run the allocation math off-chain before paying for the writes.
async fn example_preview(client: &FarmAdminClient) {
    println!("\n── Sync preview ────────────────────────────────────────────");

    match client.preview_sync().await {
        Ok(p) => {
            println!("  New total weight: {}", p.new_total_alloc_point);
            println!("  Allotted weight:  {}", p.allotted_weight);
            for w in &p.weights {
                println!(
                    "    pid {:>3} → weight {:>8}  (lands at {} bps)",
                    w.pid, w.alloc_point, w.projected_share_bps
                );
            }
        }
        Err(e) => println!("  Preview unavailable: {e}"),
    }
}

// ─── Example 3: Pin a pool and resync ─────────────────────────────────────────

/// Register pool 5 at 5% of total distribution; the `with_sync` flag folds
/// the weight write-back into the same transaction.
async fn example_register(client: &FarmAdminClient, admin: &Keypair) {
    println!("\n── Register fixed farm: pid 5 @ 5% ─────────────────────────");

    match client.register_fixed_farm(admin, 5, 500, false, true).await {
        Ok(sig) => println!("  Registered! tx: {sig}"),
        Err(e) => println!("  Register failed: {e}"),
    }
}

// ─── Example 4: Batched pool management ───────────────────────────────────────

/// Set two floating pools' weights without a mass update, then nudge their
/// reward accumulators in a separate, permissionless call.
async fn example_batches(client: &FarmAdminClient, admin: &Keypair) {
    println!("\n── Batch set + nudge ───────────────────────────────────────");

    match client.set_farms(admin, &[2, 3], &[400, 250], false, false).await {
        Ok(sig) => println!("  Weights set! tx: {sig}"),
        Err(e) => println!("  set_farms failed: {e}"),
    }

    match client.update_selected_pools(admin, &[2, 3]).await {
        Ok(sig) => println!("  Pools nudged! tx: {sig}"),
        Err(e) => println!("  Nudge failed: {e}"),
    }
}

#[tokio::main]
async fn main() {
    let client = FarmAdminClient::new(rpc_url(), chef_state());
    let admin = load_keypair();

    example_inspect(&client).await;
    example_preview(&client).await;
    example_register(&client, &admin).await;
    example_batches(&client, &admin).await;
}
