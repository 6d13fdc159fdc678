//! Battle arena engine for Draco the Pixel Dragon.
//!
//! Pure game logic: no rendering, no timers, no I/O. The embedding layer
//! (browser client) drives the two turn-resolution entry points and plays
//! back the [`BattleEvent`] stream each of them returns.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod arena;
mod damage;
mod elements;
mod error;
mod opponents;
mod rng;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use arena::{BattleArena, BattleEvent, PlayerCommand, AP_START};
pub use damage::{attack_damage, enemy_attack_damage, ultimate_damage, AttackHit};
pub use elements::effectiveness_x10;
pub use error::{ArenaError, ArenaResult};
pub use opponents::{choose_enemy_action, generate_enemy, EnemyAction};
pub use rng::{BattleRng, XorShiftRng};
pub use state::*;
pub use types::*;
