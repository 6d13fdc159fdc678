//! Error types for session operations.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use draco_battle::ArenaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameError {
    /// Not enough gold for a purchase.
    NotEnoughGold { have: i32, need: i32 },
    /// Item id does not exist in the catalog.
    UnknownItem,
    /// The inventory has none of this item.
    ItemNotOwned,
    /// Equip was called with something that is not an accessory.
    NotAnAccessory,
    /// The home upgrade was already bought.
    UpgradeAlreadyOwned,
    /// The dragon has not hatched yet.
    StillAnEgg,
    /// A battle is already running.
    BattleInProgress,
    /// No battle is running.
    NoActiveBattle,
    /// No finished battle is waiting to be collected.
    NoPendingOutcome,
    /// Unknown quest id.
    UnknownQuest,
    QuestNotCompleted,
    QuestAlreadyClaimed,
    /// The arena refused the call (wrong turn / battle over).
    Arena(ArenaError),
}

impl From<ArenaError> for GameError {
    fn from(err: ArenaError) -> Self {
        GameError::Arena(err)
    }
}

pub type GameResult<T> = Result<T, GameError>;
