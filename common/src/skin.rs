use serde::{Deserialize, Serialize};

use crate::render::Color;

pub const DEFAULT_SKIN_ID: &str = "default";

/// Cosmetic look of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skin {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub head: Color,
    pub body: Color,
    pub eye: Color,
    /// Body colour is interpolated along the snake instead of using `body`.
    pub gradient: bool,
}

const DEFAULT_EYE: Color = Color::rgb(0x1a, 0x1a, 0x20);

pub const SKINS: [Skin; 5] = [
    Skin {
        id: DEFAULT_SKIN_ID,
        name: "Default",
        price: 0,
        head: Color::rgb(0x2e, 0xd5, 0x73),
        body: Color::rgb(0x7b, 0xed, 0x9f),
        eye: DEFAULT_EYE,
        gradient: false,
    },
    Skin {
        id: "skin_gold",
        name: "Gold",
        price: 100,
        head: Color::rgb(0xff, 0xd7, 0x00),
        body: Color::rgb(0xf4, 0xc4, 0x30),
        eye: DEFAULT_EYE,
        gradient: false,
    },
    Skin {
        id: "skin_rainbow",
        name: "Rainbow",
        price: 100,
        head: Color::rgb(0xff, 0x6b, 0x73),
        body: Color::rgb(0xc2, 0x6a, 0xaa),
        eye: DEFAULT_EYE,
        gradient: true,
    },
    Skin {
        id: "skin_ice",
        name: "Ice",
        price: 100,
        head: Color::rgb(0x70, 0xa1, 0xff),
        body: Color::rgb(0xa4, 0xc8, 0xff),
        eye: Color::rgb(0x0a, 0x0a, 0x0c),
        gradient: false,
    },
    Skin {
        id: "skin_fire",
        name: "Fire",
        price: 100,
        head: Color::rgb(0xff, 0x63, 0x48),
        body: Color::rgb(0xff, 0x7f, 0x50),
        eye: DEFAULT_EYE,
        gradient: false,
    },
];

impl Skin {
    /// Look a skin up by catalog id, falling back to the default skin.
    pub fn lookup(id: &str) -> &'static Skin {
        SKINS
            .iter()
            .find(|skin| skin.id == id)
            .unwrap_or(&SKINS[0])
    }

    pub fn default_skin() -> &'static Skin {
        &SKINS[0]
    }

    pub fn all() -> &'static [Skin] {
        &SKINS
    }

    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

/// Which skins the player owns and which one is worn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wardrobe {
    pub owned: Vec<String>,
    pub equipped: String,
}

impl Wardrobe {
    pub fn owns(&self, skin_id: &str) -> bool {
        self.owned.iter().any(|id| id == skin_id)
    }

    pub fn equipped_skin(&self) -> &'static Skin {
        Skin::lookup(&self.equipped)
    }
}

impl Default for Wardrobe {
    fn default() -> Self {
        Wardrobe {
            owned: vec![DEFAULT_SKIN_ID.to_string()],
            equipped: DEFAULT_SKIN_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_skin_falls_back_to_default() {
        assert_eq!(Skin::lookup("skin_plaid").id, DEFAULT_SKIN_ID);
        assert_eq!(Skin::lookup("skin_ice").name, "Ice");
    }

    #[test]
    fn only_rainbow_is_gradient() {
        let gradients: Vec<_> = Skin::all().iter().filter(|s| s.gradient).map(|s| s.id).collect();
        assert_eq!(gradients, vec!["skin_rainbow"]);
    }

    #[test]
    fn default_wardrobe_wears_default() {
        let wardrobe = Wardrobe::default();
        assert!(wardrobe.owns(DEFAULT_SKIN_ID));
        assert!(!wardrobe.owns("skin_gold"));
        assert!(wardrobe.equipped_skin().is_free());
    }
}
