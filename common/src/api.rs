//! Wire contract of the coin/store backend.
//!
//! Field names follow what the backend actually sends: player and checkout
//! payloads use PascalCase, everything else camelCase.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{CartItem, DEFAULT_SKIN_ID, Wardrobe};

pub const PLAYER_PATH: &str = "/api/player";
pub const EARN_PATH: &str = "/api/earn";
pub const EQUIP_PATH: &str = "/api/equip";
pub const CART_PATH: &str = "/api/user/cart";
pub const CART_ITEMS_PATH: &str = "/api/user/cart/items";
pub const ORDERS_PATH: &str = "/api/user/orders";
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

pub const CHECKOUT_SUCCESS: &str = "Success";

pub fn cart_item_path(line_id: &str) -> String {
    format!("{}/{}", CART_ITEMS_PATH, line_id)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnRequest {
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnResponse {
    #[serde(default)]
    pub earned: u32,
    pub balance: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerProfile {
    #[serde(default)]
    pub balance: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub owned_skins: Vec<String>,
    #[serde(default)]
    pub equipped_skin: String,
    #[serde(default)]
    pub extra_lives: u32,
}

impl PlayerProfile {
    /// Profile used when the backend can't be reached: no coins, default skin only.
    pub fn offline() -> Self {
        let wardrobe = Wardrobe::default();
        PlayerProfile {
            balance: 0,
            owned_skins: wardrobe.owned,
            equipped_skin: wardrobe.equipped,
            extra_lives: 0,
        }
    }

    pub fn wardrobe(&self) -> Wardrobe {
        let mut owned = self.owned_skins.clone();
        if !owned.iter().any(|id| id == DEFAULT_SKIN_ID) {
            owned.insert(0, DEFAULT_SKIN_ID.to_string());
        }
        let equipped = if self.equipped_skin.is_empty() {
            DEFAULT_SKIN_ID.to_string()
        } else {
            self.equipped_skin.clone()
        };
        Wardrobe { owned, equipped }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipRequest {
    #[serde(rename = "skinId")]
    pub skin_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCartItemRequest {
    #[serde(rename = "itemId")]
    pub item_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckoutResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub balance: Option<u32>,
    #[serde(default)]
    pub owned_skins: Option<Vec<String>>,
    #[serde(default)]
    pub equipped_skin: Option<String>,
    #[serde(default)]
    pub extra_lives: Option<u32>,
}

impl CheckoutResponse {
    pub fn is_success(&self) -> bool {
        self.status == CHECKOUT_SUCCESS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
