//! Farm-Admin Rust SDK
//!
//! Client for the fixed-percentage allocation manager in front of the chef
//! reward distributor.  Operators can inspect the registry, preview a
//! synchronization off-chain, and submit every admin instruction without
//! an Anchor dependency.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use farm_admin_sdk::FarmAdminClient;
//! use solana_sdk::{pubkey::Pubkey, signature::Keypair};
//! use std::str::FromStr;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let chef = Pubkey::from_str("GwD29e8f5Hh969nHKL3KFuQXVquZ2A3zhsM9MQBumNnz")?;
//!     let client = FarmAdminClient::devnet(chef);
//!     let admin = Keypair::new(); // use the funded farm-admin keypair
//!
//!     // 1. Preview before writing anything
//!     let preview = client.preview_sync().await?;
//!     for w in &preview.weights {
//!         println!("pid {} → weight {} ({} bps)", w.pid, w.alloc_point, w.projected_share_bps);
//!     }
//!
//!     // 2. Pin pool 5 at 5% and resynchronize in the same call
//!     let sig = client.register_fixed_farm(&admin, 5, 500, false, true).await?;
//!     println!("Registered! tx: {sig}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Feature Overview
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`FarmAdminClient::manager_info`] | Roles, ledger, and registry entries |
//! | [`FarmAdminClient::pools`] | Every chef pool with its live share |
//! | [`FarmAdminClient::preview_sync`] | Off-chain dry run of a synchronization |
//! | [`FarmAdminClient::register_fixed_farm`] | Pin a pool to a share of rewards |
//! | [`FarmAdminClient::update_fixed_farm`] | Retarget or deactivate a pinned pool |
//! | [`FarmAdminClient::sync_fixed_farms`] | Write recomputed weights back |
//! | [`FarmAdminClient::add_farms`] | Batch-append pools |
//! | [`FarmAdminClient::set_farms`] | Batch-overwrite pool weights |
//! | [`FarmAdminClient::update_selected_pools`] | Permissionless accrual nudge |

pub mod client;
pub mod error;
pub mod instructions;
pub mod math;
pub mod state;
pub mod types;

pub use client::FarmAdminClient;
pub use error::{Error, Result};
pub use types::*;
