use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use common::api::{
    self, AddCartItemRequest, CartResponse, CheckoutResponse, EarnRequest, EarnResponse,
    EquipRequest, ErrorBody, PlayerProfile, UpdateQuantityRequest,
};
use common::{Cart, EXTRA_LIFE_ITEM_ID};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Text fit for a toast: the backend's own message when it sent one,
    /// `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Outcome of buying a single extra life from the game over screen.
#[derive(Debug)]
pub enum ExtraLifePurchase {
    /// Other items are waiting in the cart; an order now would pay for them too.
    CartNotEmpty,
    Checkout(CheckoutResponse),
}

/// HTTP client for the coin/store backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http: Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    pub async fn profile(&self) -> Result<PlayerProfile, ApiError> {
        let request = self.http.get(self.url(api::PLAYER_PATH)?);
        self.send(request).await
    }

    /// Report a finished run; the backend decides how many coins it is worth.
    pub async fn earn(&self, score: u32) -> Result<EarnResponse, ApiError> {
        let request = self
            .http
            .post(self.url(api::EARN_PATH)?)
            .json(&EarnRequest { score });
        self.send(request).await
    }

    pub async fn equip(&self, skin_id: &str) -> Result<(), ApiError> {
        let request = self.http.post(self.url(api::EQUIP_PATH)?).json(&EquipRequest {
            skin_id: skin_id.to_string(),
        });
        let response = request.send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    pub async fn cart(&self) -> Result<Cart, ApiError> {
        let request = self.http.get(self.url(api::CART_PATH)?);
        Ok(self.send::<CartResponse>(request).await?.into())
    }

    pub async fn add_to_cart(&self, item_id: &str) -> Result<Cart, ApiError> {
        let request = self
            .http
            .post(self.url(api::CART_ITEMS_PATH)?)
            .json(&AddCartItemRequest {
                item_id: item_id.to_string(),
            });
        Ok(self.send::<CartResponse>(request).await?.into())
    }

    pub async fn update_quantity(&self, line_id: &str, quantity: u32) -> Result<Cart, ApiError> {
        let request = self
            .http
            .patch(self.url(&api::cart_item_path(line_id))?)
            .json(&UpdateQuantityRequest { quantity });
        Ok(self.send::<CartResponse>(request).await?.into())
    }

    pub async fn remove_from_cart(&self, line_id: &str) -> Result<Cart, ApiError> {
        let request = self.http.delete(self.url(&api::cart_item_path(line_id))?);
        Ok(self.send::<CartResponse>(request).await?.into())
    }

    /// Place an order for the whole cart.
    ///
    /// Each call carries a fresh idempotency key. A refused order still comes
    /// back as `Ok` with a non-success status, even when the backend answers
    /// with an error code, as long as the body is a checkout result.
    pub async fn checkout(&self) -> Result<CheckoutResponse, ApiError> {
        let key = Uuid::new_v4().to_string();
        let response = self
            .http
            .post(self.url(api::ORDERS_PATH)?)
            .header(api::IDEMPOTENCY_HEADER, &key)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        match serde_json::from_str::<CheckoutResponse>(&body) {
            Ok(result) => {
                debug!("Checkout {} answered {} ({})", key, result.status, status);
                Ok(result)
            }
            Err(e) if status.is_success() => Err(ApiError::Decode(e)),
            Err(_) => Err(ApiError::Status {
                status,
                message: error_message(&body),
            }),
        }
    }

    /// Order one extra life on its own.
    ///
    /// Only runs against an empty cart. When the order is not placed, the
    /// added line is taken back out so the cart ends up as it was.
    pub async fn buy_extra_life(&self) -> Result<ExtraLifePurchase, ApiError> {
        if !self.cart().await?.is_empty() {
            return Ok(ExtraLifePurchase::CartNotEmpty);
        }
        let cart = self.add_to_cart(EXTRA_LIFE_ITEM_ID).await?;
        let result = self.checkout().await;

        let placed = matches!(&result, Ok(response) if response.is_success());
        if !placed {
            if let Some(line) = cart.items.iter().find(|item| item.item_id == EXTRA_LIFE_ITEM_ID) {
                if let Err(e) = self.remove_from_cart(&line.id).await {
                    warn!("Failed to take extra life back out of the cart: {}", e);
                }
            }
        }
        result.map(ExtraLifePurchase::Checkout)
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::check_status(request.send().await?).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status,
            message: error_message(&body),
        })
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Profile for the menu; an unreachable backend means no coins and the default skin.
pub async fn load_profile_or_default(api: &ApiClient) -> PlayerProfile {
    match api.profile().await {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Failed to load player profile: {}", e);
            PlayerProfile::offline()
        }
    }
}

/// Current cart; an unreachable backend means an empty cart.
pub async fn load_cart_or_empty(api: &ApiClient) -> Cart {
    match api.cart().await {
        Ok(cart) => cart,
        Err(e) => {
            warn!("Failed to load cart: {}", e);
            Cart::default()
        }
    }
}
