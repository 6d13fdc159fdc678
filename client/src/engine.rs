//! The game engine exposed to JavaScript via wasm-bindgen.
//!
//! The page owns the timers: after any battle command it waits
//! [`DracoEngine::enemy_turn_delay_ms`] before calling
//! `resolve_enemy_turn`, and after a `battleEnded` event it waits
//! [`DracoEngine::outcome_delay_ms`] before `collect_battle_result`.
//! The engine reads battle state when those calls arrive, never from
//! values captured when the timer was scheduled.

use wasm_bindgen::prelude::*;

use draco_battle::{BattleEvent, PlayerCommand, ENEMY_TURN_DELAY_MS, OUTCOME_DELAY_MS};
use draco_game::{
    BattleView, GameError, GameSession, GameView, HomeUpgrade, MiniGameResult, QuestId,
    SessionState,
};

#[wasm_bindgen]
pub struct DracoEngine {
    session: GameSession,
}

#[wasm_bindgen]
impl DracoEngine {
    /// Create a fresh session. Without an explicit seed the engine pulls
    /// one from browser entropy.
    #[wasm_bindgen(constructor)]
    pub fn new(name: String, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(entropy_seed);
        Self {
            session: GameSession::new(name, seed),
        }
    }

    // ── Views & persistence ──────────────────────────────────────────

    /// Main-screen snapshot as JSON.
    pub fn get_view(&self) -> JsValue {
        to_js(&GameView::from_session(&self.session))
    }

    /// Arena snapshot as JSON, or null outside a battle.
    pub fn get_battle_view(&self) -> JsValue {
        match self.session.arena_state() {
            Some(state) => to_js(&BattleView::from_state(state)),
            None => JsValue::NULL,
        }
    }

    /// Persistent state as JSON for the page to store. A running battle
    /// is not part of it.
    pub fn get_state(&self) -> JsValue {
        to_js(self.session.state())
    }

    /// Load persistent state produced by `get_state`.
    pub fn set_state(&mut self, state: JsValue) -> Result<(), String> {
        let state: SessionState =
            serde_wasm_bindgen::from_value(state).map_err(|e| format!("bad state: {e:?}"))?;
        self.session.restore(state);
        Ok(())
    }

    // ── Pet care ─────────────────────────────────────────────────────

    pub fn hatch(&mut self) {
        self.session.hatch();
    }

    /// Advance the needs simulation by one second.
    pub fn tick(&mut self) {
        self.session.tick();
    }

    pub fn toggle_sleep(&mut self) {
        self.session.toggle_sleep();
    }

    pub fn pet_dragon(&mut self) {
        self.session.pet_dragon();
    }

    /// Returns true when gold turned up in the mess.
    pub fn clean(&mut self) -> bool {
        self.session.clean()
    }

    // ── Market, quests, mini-games ───────────────────────────────────

    pub fn buy_item(&mut self, id: String) -> Result<(), String> {
        self.session.buy_item(&id).map_err(stringify)
    }

    pub fn use_item(&mut self, id: String) -> Result<(), String> {
        self.session.use_item(&id).map_err(stringify)
    }

    pub fn equip_accessory(&mut self, id: String) -> Result<(), String> {
        self.session.equip_accessory(&id).map_err(stringify)
    }

    /// `upgrade` is one of the serialized `HomeUpgrade` names.
    pub fn buy_upgrade(&mut self, upgrade: JsValue) -> Result<(), String> {
        let upgrade: HomeUpgrade =
            serde_wasm_bindgen::from_value(upgrade).map_err(|e| format!("bad upgrade: {e:?}"))?;
        self.session.buy_upgrade(upgrade).map_err(stringify)
    }

    /// Claim a completed quest; resolves to the gold paid out.
    pub fn claim_quest(&mut self, quest: JsValue) -> Result<i32, String> {
        let quest: QuestId =
            serde_wasm_bindgen::from_value(quest).map_err(|e| format!("bad quest: {e:?}"))?;
        self.session.claim_quest(quest).map_err(stringify)
    }

    /// Report a finished mini-game ("WIN" | "DRAW" | "LOSE").
    pub fn record_minigame_result(&mut self, result: JsValue) -> Result<(), String> {
        let result: MiniGameResult =
            serde_wasm_bindgen::from_value(result).map_err(|e| format!("bad result: {e:?}"))?;
        self.session.record_minigame_result(result);
        Ok(())
    }

    // ── Battle arena ─────────────────────────────────────────────────

    pub fn enter_arena(&mut self) -> Result<(), String> {
        self.session.enter_arena().map_err(stringify)
    }

    pub fn battle_attack(&mut self) -> Result<JsValue, String> {
        self.battle_command(PlayerCommand::Attack)
    }

    pub fn battle_defend(&mut self) -> Result<JsValue, String> {
        self.battle_command(PlayerCommand::Defend)
    }

    pub fn battle_focus(&mut self) -> Result<JsValue, String> {
        self.battle_command(PlayerCommand::Focus)
    }

    pub fn battle_ultimate(&mut self) -> Result<JsValue, String> {
        self.battle_command(PlayerCommand::Ultimate)
    }

    /// Resolve the enemy's turn after the feedback delay. Returns the
    /// event list for playback.
    pub fn resolve_enemy_turn(&mut self) -> Result<JsValue, String> {
        match self.session.resolve_enemy_turn() {
            Ok(events) => Ok(to_js(&events)),
            // A stale timer firing out of turn is ignored, not an error.
            Err(GameError::Arena(err)) => {
                log::debug!("ignored enemy-turn call: {:?}", err);
                Ok(to_js::<[BattleEvent]>(&[]))
            }
            Err(err) => Err(stringify(err)),
        }
    }

    /// Collect a finished battle: pays the reward, notifies quests, and
    /// resolves to "WIN" or "LOSE". Null when nothing is pending, so a
    /// duplicate timer cannot double-pay.
    pub fn collect_battle_result(&mut self) -> JsValue {
        match self.session.collect_battle_result() {
            Ok(outcome) => to_js(&outcome),
            Err(_) => JsValue::NULL,
        }
    }

    /// Pause between a player action and the enemy response.
    pub fn enemy_turn_delay_ms() -> u32 {
        ENEMY_TURN_DELAY_MS
    }

    /// Pause before the terminal outcome should be collected.
    pub fn outcome_delay_ms() -> u32 {
        OUTCOME_DELAY_MS
    }
}

impl DracoEngine {
    fn battle_command(&mut self, command: PlayerCommand) -> Result<JsValue, String> {
        match self.session.battle_command(command) {
            Ok(events) => Ok(to_js(&events)),
            // Input during the enemy's turn (or after the end) is
            // ignored with zero state change.
            Err(GameError::Arena(err)) => {
                log::debug!("ignored command {:?}: {:?}", command, err);
                Ok(to_js::<[BattleEvent]>(&[]))
            }
            Err(err) => Err(stringify(err)),
        }
    }
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

fn stringify(err: GameError) -> String {
    format!("{err:?}")
}

fn entropy_seed() -> u64 {
    let mut bytes = [0u8; 8];
    if getrandom::getrandom(&mut bytes).is_err() {
        // Deterministic fallback; battles stay playable offline.
        return 0x9e37_79b9_7f4a_7c15;
    }
    u64::from_le_bytes(bytes)
}
