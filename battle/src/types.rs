//! Core data shapes for battle participants.

use alloc::string::String;

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Elemental affinity of a combatant.
///
/// Normal has no advantaged matchup; it participates only through the
/// same-type and fallback rules of the effectiveness table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Element {
    Normal,
    Fire,
    Ice,
    Nature,
}

/// Which side of the arena a combatant fights on. Fixed for the battle's
/// lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Player,
    Enemy,
}

/// Core stats of the pet, snapshotted once when a battle starts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub strength: i32,
    pub vitality: i32,
    pub intellect: i32,
    pub agility: i32,
}

/// A battle participant: identity plus a clamped HP pool.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub side: Side,
    pub name: String,
    pub element: Element,
    pub hp: i32,
    pub max_hp: i32,
}

impl Combatant {
    pub fn new(side: Side, name: String, element: Element, max_hp: i32) -> Self {
        Self {
            side,
            name,
            element,
            hp: max_hp,
            max_hp,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Reduce HP, never below zero.
    pub fn apply_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount).max(0);
    }

    /// Restore HP, never above the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }
}

/// Read-once snapshot of the player profile taken when the arena is
/// entered. The session layer builds this from the persistent pet state;
/// nothing in here changes mid-battle.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loadout {
    pub name: String,
    pub element: Element,
    /// Evolution stage of the pet (1..=5). Feeds enemy scaling.
    pub evolution_stage: i32,
    pub stats: Stats,
}
