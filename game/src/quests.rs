//! Daily quest bookkeeping.

use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Flat gold reward per claimed quest.
pub const QUEST_REWARD: i32 = 100;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestId {
    WashOnce,
    WinMinigame,
    Happy80,
    PlayBattle,
    WinBattle,
}

impl QuestId {
    /// Display text for the quest list.
    pub fn text(self) -> &'static str {
        match self {
            QuestId::WashOnce => "Draco'yu 1 kez yıka",
            QuestId::WinMinigame => "1 mini oyun kazan",
            QuestId::Happy80 => "Mutluluğu 80+ yap",
            QuestId::PlayBattle => "1 arena savaşı yap",
            QuestId::WinBattle => "1 arena savaşı kazan",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuest {
    pub id: QuestId,
    pub completed: bool,
    pub reward_claimed: bool,
}

impl DailyQuest {
    fn new(id: QuestId) -> Self {
        Self {
            id,
            completed: false,
            reward_claimed: false,
        }
    }
}

/// The day's quest list. Completion is latched; claiming pays out once.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestBook {
    quests: Vec<DailyQuest>,
}

impl Default for QuestBook {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestBook {
    pub fn new() -> Self {
        Self {
            quests: alloc::vec![
                DailyQuest::new(QuestId::WashOnce),
                DailyQuest::new(QuestId::WinMinigame),
                DailyQuest::new(QuestId::Happy80),
                DailyQuest::new(QuestId::PlayBattle),
                DailyQuest::new(QuestId::WinBattle),
            ],
        }
    }

    pub fn quests(&self) -> &[DailyQuest] {
        &self.quests
    }

    /// Latch a quest as completed. Returns true only on the first
    /// completion so the caller can show feedback once.
    pub fn complete(&mut self, id: QuestId) -> bool {
        match self.quests.iter_mut().find(|q| q.id == id) {
            Some(quest) if !quest.completed => {
                quest.completed = true;
                true
            }
            _ => false,
        }
    }

    /// Claim a completed quest's reward. Pays out exactly once.
    pub fn claim(&mut self, id: QuestId) -> GameResult<i32> {
        let quest = self
            .quests
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(GameError::UnknownQuest)?;
        if !quest.completed {
            return Err(GameError::QuestNotCompleted);
        }
        if quest.reward_claimed {
            return Err(GameError::QuestAlreadyClaimed);
        }
        quest.reward_claimed = true;
        Ok(QUEST_REWARD)
    }

    pub fn has_unclaimed_reward(&self) -> bool {
        self.quests.iter().any(|q| q.completed && !q.reward_claimed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_latches_once() {
        let mut book = QuestBook::new();
        assert!(book.complete(QuestId::WashOnce));
        assert!(!book.complete(QuestId::WashOnce));
    }

    #[test]
    fn claim_pays_exactly_once() {
        let mut book = QuestBook::new();
        assert_eq!(
            book.claim(QuestId::Happy80),
            Err(GameError::QuestNotCompleted)
        );
        book.complete(QuestId::Happy80);
        assert_eq!(book.claim(QuestId::Happy80), Ok(QUEST_REWARD));
        assert_eq!(
            book.claim(QuestId::Happy80),
            Err(GameError::QuestAlreadyClaimed)
        );
    }

    #[test]
    fn unclaimed_reward_flag() {
        let mut book = QuestBook::new();
        assert!(!book.has_unclaimed_reward());
        book.complete(QuestId::WinBattle);
        assert!(book.has_unclaimed_reward());
        book.claim(QuestId::WinBattle).unwrap();
        assert!(!book.has_unclaimed_reward());
    }
}
