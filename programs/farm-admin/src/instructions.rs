#![allow(ambiguous_glob_reexports)]

pub mod add_farms;
pub mod claim_farm_control;
pub mod initialize;
pub mod nominate_farm_controller;
pub mod register_fixed_farm;
pub mod set_farm_admin;
pub mod set_farms;
pub mod set_reward_multiplier;
pub mod sweep_token;
pub mod sync_fixed_farms;
pub mod sync_math;
pub mod update_fixed_farm;
pub mod update_selected_pools;

pub use add_farms::*;
pub use claim_farm_control::*;
pub use initialize::*;
pub use nominate_farm_controller::*;
pub use register_fixed_farm::*;
pub use set_farm_admin::*;
pub use set_farms::*;
pub use set_reward_multiplier::*;
pub use sweep_token::*;
pub use sync_fixed_farms::*;
pub use sync_math::*;
pub use update_fixed_farm::*;
pub use update_selected_pools::*;
