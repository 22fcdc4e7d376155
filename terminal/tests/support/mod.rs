//! In-process stand-in for the coin/store backend.
#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use terminal::api::ApiClient;

#[derive(Default)]
pub struct Stub {
    pub balance: u32,
    pub extra_lives: u32,
    pub items: Vec<(String, String, u32, u32)>,
    pub idempotency_keys: Vec<String>,
    pub equipped: Option<String>,
    next_line: u32,
}

pub type Shared = Arc<Mutex<Stub>>;

fn price_of(item_id: &str) -> Option<u32> {
    match item_id {
        "extra_life" => Some(50),
        "skin_gold" => Some(100),
        _ => None,
    }
}

fn cart_json(stub: &Stub) -> Value {
    let items: Vec<Value> = stub
        .items
        .iter()
        .map(|(id, item_id, price, quantity)| {
            json!({"id": id, "itemId": item_id, "name": item_id, "price": price, "quantity": quantity})
        })
        .collect();
    let total: u32 = stub.items.iter().map(|(_, _, price, qty)| price * qty).sum();
    json!({"items": items, "total": total})
}

async fn player(State(stub): State<Shared>) -> Json<Value> {
    let stub = stub.lock().unwrap();
    Json(json!({
        "Balance": stub.balance,
        "OwnedSkins": ["default"],
        "EquippedSkin": stub.equipped.clone().unwrap_or_else(|| "default".into()),
        "ExtraLives": stub.extra_lives,
    }))
}

async fn earn(State(stub): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    let score = body["score"].as_u64().unwrap_or(0) as u32;
    let earned = (score / 10) * 2;
    let mut stub = stub.lock().unwrap();
    stub.balance += earned;
    Json(json!({"earned": earned, "balance": stub.balance}))
}

async fn equip(State(stub): State<Shared>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    match body["skinId"].as_str() {
        Some("default") => {
            stub.lock().unwrap().equipped = Some("default".into());
            (StatusCode::OK, Json(json!({"equipped": "default"})))
        }
        _ => (StatusCode::FORBIDDEN, Json(json!({"error": "skin not owned"}))),
    }
}

async fn cart(State(stub): State<Shared>) -> Json<Value> {
    Json(cart_json(&stub.lock().unwrap()))
}

async fn add_item(State(stub): State<Shared>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let item_id = body["itemId"].as_str().unwrap_or_default().to_string();
    let Some(price) = price_of(&item_id) else {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "unknown item"})));
    };
    let mut stub = stub.lock().unwrap();
    stub.next_line += 1;
    let line = format!("line-{}", stub.next_line);
    stub.items.push((line, item_id, price, 1));
    (StatusCode::OK, Json(cart_json(&stub)))
}

async fn update_item(
    State(stub): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let quantity = body["quantity"].as_u64().unwrap_or(1) as u32;
    let mut stub = stub.lock().unwrap();
    if let Some(line) = stub.items.iter_mut().find(|line| line.0 == id) {
        line.3 = quantity;
    }
    Json(cart_json(&stub))
}

async fn remove_item(State(stub): State<Shared>, Path(id): Path<String>) -> Json<Value> {
    let mut stub = stub.lock().unwrap();
    stub.items.retain(|line| line.0 != id);
    Json(cart_json(&stub))
}

async fn orders(State(stub): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let mut stub = stub.lock().unwrap();
    if let Some(key) = headers.get("Idempotency-Key").and_then(|v| v.to_str().ok()) {
        stub.idempotency_keys.push(key.to_string());
    } else {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "missing Idempotency-Key"})));
    }
    let total: u32 = stub.items.iter().map(|(_, _, price, qty)| price * qty).sum();
    if total > stub.balance {
        return (
            StatusCode::PAYMENT_REQUIRED,
            Json(json!({"Status": "InsufficientFunds", "Message": "Not enough coins"})),
        );
    }
    stub.balance -= total;
    let extra_lives: u32 = stub
        .items
        .iter()
        .filter(|line| line.1 == "extra_life")
        .map(|line| line.3)
        .sum();
    stub.items.clear();
    stub.extra_lives += extra_lives;
    (
        StatusCode::OK,
        Json(json!({
            "Status": "Success",
            "Message": "Order placed",
            "Balance": stub.balance,
            "OwnedSkins": ["default"],
            "EquippedSkin": "default",
            "ExtraLives": stub.extra_lives,
        })),
    )
}

pub async fn spawn_stub(balance: u32) -> (ApiClient, Shared) {
    let stub: Shared = Arc::new(Mutex::new(Stub { balance, ..Stub::default() }));
    let router = Router::new()
        .route("/api/player", get(player))
        .route("/api/earn", post(earn))
        .route("/api/equip", post(equip))
        .route("/api/user/cart", get(cart))
        .route("/api/user/cart/items", post(add_item))
        .route("/api/user/cart/items/:id", patch(update_item).delete(remove_item))
        .route("/api/user/orders", post(orders))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let client = ApiClient::new(&format!("http://{}", addr)).unwrap();
    (client, stub)
}

/// Put an item straight into the stub's cart, as if added from another session.
pub fn seed_cart(stub: &Shared, item_id: &str) {
    let price = price_of(item_id).unwrap_or(0);
    let mut stub = stub.lock().unwrap();
    stub.next_line += 1;
    let line = format!("line-{}", stub.next_line);
    stub.items.push((line, item_id.to_string(), price, 1));
}

pub fn cart_item_ids(stub: &Shared) -> Vec<String> {
    stub.lock().unwrap().items.iter().map(|line| line.1.clone()).collect()
}
