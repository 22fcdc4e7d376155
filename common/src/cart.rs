use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::CartResponse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Cart line id, distinct from the catalog id.
    pub id: String,
    #[serde(rename = "itemId", default)]
    pub item_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: u32,
    #[serde(default = "one")]
    pub quantity: u32,
}

fn one() -> u32 {
    1
}

impl CartItem {
    pub fn line_total(&self) -> u32 {
        self.price.saturating_mul(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutRefusal {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Not enough coins")]
    InsufficientBalance { balance: u32, total: u32 },
}

/// Local mirror of the server-side cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total: u32,
}

impl Cart {
    pub fn item_count(&self) -> u32 {
        self.items.iter().fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, line_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == line_id)
    }

    /// Quantity for `line_id` after applying `delta`, kept within `1..=u32::MAX`.
    pub fn adjusted_quantity(&self, line_id: &str, delta: i32) -> Option<u32> {
        let item = self.find(line_id)?;
        let quantity = (item.quantity as i64 + delta as i64).clamp(1, u32::MAX as i64);
        Some(quantity as u32)
    }

    /// Checks done before asking the backend to check out.
    pub fn can_checkout(&self, balance: u32) -> Result<(), CheckoutRefusal> {
        if self.items.is_empty() {
            return Err(CheckoutRefusal::EmptyCart);
        }
        if balance < self.total {
            return Err(CheckoutRefusal::InsufficientBalance { balance, total: self.total });
        }
        Ok(())
    }
}

impl From<CartResponse> for Cart {
    fn from(response: CartResponse) -> Self {
        Cart {
            items: response.items,
            total: response.total,
        }
    }
}
