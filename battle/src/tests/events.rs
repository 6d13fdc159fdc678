//! Wire shape of the event stream consumed by the browser UI.

use serde_json::{json, to_value};

use crate::arena::BattleEvent;
use crate::state::{Outcome, Turn};

#[test]
fn attack_event_serializes_camel_case() {
    let event = BattleEvent::PlayerAttack {
        damage: 18,
        multiplier_x100: 150,
        critical: false,
        super_effective: true,
        enemy_hp: 82,
    };
    assert_eq!(
        to_value(&event).unwrap(),
        json!({
            "type": "playerAttack",
            "payload": {
                "damage": 18,
                "multiplierX100": 150,
                "critical": false,
                "superEffective": true,
                "enemyHp": 82,
            }
        })
    );
}

#[test]
fn unit_variant_serializes_bare() {
    assert_eq!(
        to_value(&BattleEvent::PlayerDefend).unwrap(),
        json!({ "type": "playerDefend" })
    );
}

#[test]
fn turn_and_outcome_use_screaming_case() {
    let event = BattleEvent::TurnStarted {
        turn: Turn::PlayerTurn,
        ap: 5,
    };
    assert_eq!(
        to_value(&event).unwrap(),
        json!({
            "type": "turnStarted",
            "payload": { "turn": "PLAYER_TURN", "ap": 5 }
        })
    );

    let event = BattleEvent::BattleEnded {
        outcome: Outcome::Win,
    };
    assert_eq!(
        to_value(&event).unwrap(),
        json!({
            "type": "battleEnded",
            "payload": { "outcome": "WIN" }
        })
    );
}
