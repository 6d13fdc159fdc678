//! Arena error types.
//!
//! Only out-of-turn calls surface as errors; in-turn rule violations
//! (not enough AP, combo too low) are rejection events so the UI can
//! show feedback without treating them as failures.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ArenaError {
    /// A player command arrived outside the player's turn. Ignored with
    /// zero state change.
    NotPlayerTurn,
    /// Enemy resolution was requested while it is not the enemy's turn.
    EnemyTurnNotDue,
    /// The battle already reached a terminal outcome.
    BattleOver,
}

pub type ArenaResult<T> = Result<T, ArenaError>;
