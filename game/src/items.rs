//! The market catalog, embedded as static data the way the card
//! templates are.

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Food,
    Toy,
    Accessory,
}

/// Stat deltas applied when an item is used. Zero means untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemEffect {
    pub hunger: f32,
    pub happiness: f32,
    pub health: f32,
    pub energy: f32,
}

const NO_EFFECT: ItemEffect = ItemEffect {
    hunger: 0.0,
    happiness: 0.0,
    health: 0.0,
    energy: 0.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub id: &'static str,
    pub name: &'static str,
    pub price: i32,
    pub kind: ItemKind,
    pub effect: ItemEffect,
}

/// Everything the market sells.
pub fn item_catalog() -> &'static [Item] {
    &CATALOG
}

pub fn find_item(id: &str) -> Option<&'static Item> {
    CATALOG.iter().find(|item| item.id == id)
}

static CATALOG: [Item; 9] = [
    Item {
        id: "apple",
        name: "Kırmızı Elma",
        price: 5,
        kind: ItemKind::Food,
        effect: ItemEffect {
            hunger: 20.0,
            happiness: 2.0,
            ..NO_EFFECT
        },
    },
    Item {
        id: "fish",
        name: "Izgara Balık",
        price: 10,
        kind: ItemKind::Food,
        effect: ItemEffect {
            hunger: 30.0,
            happiness: 3.0,
            ..NO_EFFECT
        },
    },
    Item {
        id: "steak",
        name: "Sulu Biftek",
        price: 15,
        kind: ItemKind::Food,
        effect: ItemEffect {
            hunger: 40.0,
            happiness: 4.0,
            health: 5.0,
            ..NO_EFFECT
        },
    },
    Item {
        id: "salad",
        name: "Vitamin Salata",
        price: 8,
        kind: ItemKind::Food,
        effect: ItemEffect {
            hunger: 15.0,
            happiness: 5.0,
            health: 3.0,
            ..NO_EFFECT
        },
    },
    Item {
        id: "ball",
        name: "Kırmızı Top",
        price: 25,
        kind: ItemKind::Toy,
        effect: ItemEffect {
            happiness: 15.0,
            energy: -5.0,
            ..NO_EFFECT
        },
    },
    Item {
        id: "plush",
        name: "Ayıcık",
        price: 40,
        kind: ItemKind::Toy,
        effect: ItemEffect {
            happiness: 25.0,
            ..NO_EFFECT
        },
    },
    Item {
        id: "hat",
        name: "Büyücü Şapkası",
        price: 100,
        kind: ItemKind::Accessory,
        effect: ItemEffect {
            happiness: 50.0,
            ..NO_EFFECT
        },
    },
    Item {
        id: "glasses",
        name: "Havalı Gözlük",
        price: 75,
        kind: ItemKind::Accessory,
        effect: ItemEffect {
            happiness: 30.0,
            ..NO_EFFECT
        },
    },
    Item {
        id: "potion_rainbow",
        name: "Gökkuşağı İksiri",
        price: 150,
        kind: ItemKind::Food,
        effect: ItemEffect {
            hunger: 100.0,
            happiness: 100.0,
            energy: 100.0,
            ..NO_EFFECT
        },
    },
];
