//! Session layer for Draco the Pixel Dragon: the pet's day-to-day state
//! (needs, evolution, inventory, quests) and the orchestration that
//! connects the battle arena to the economy.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod items;
mod pet;
mod quests;
mod session;
mod view;


pub use error::{GameError, GameResult};
pub use items::{find_item, item_catalog, Item, ItemEffect, ItemKind};
pub use pet::{DecayModifiers, DragonStage, DragonState};
pub use quests::{DailyQuest, QuestBook, QuestId, QUEST_REWARD};
pub use session::{
    GameSession, HomeUpgrade, HomeUpgrades, MiniGameResult, SessionState, Weather,
    BATTLE_REWARD_LOSE, BATTLE_REWARD_WIN,
};
pub use view::{BattleView, FighterView, GameView, InventoryEntry, QuestView};
