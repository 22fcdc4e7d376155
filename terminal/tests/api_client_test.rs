mod support;

use support::{cart_item_ids, seed_cart, spawn_stub};
use terminal::api::{load_cart_or_empty, load_profile_or_default, ApiClient, ApiError, ExtraLifePurchase};

#[tokio::test]
async fn profile_uses_pascal_case_fields() {
    let (client, _) = spawn_stub(120).await;
    let profile = client.profile().await.unwrap();
    assert_eq!(profile.balance, 120);
    assert_eq!(profile.owned_skins, vec!["default"]);
    assert_eq!(profile.equipped_skin, "default");
    assert_eq!(profile.extra_lives, 0);
}

#[tokio::test]
async fn earn_reports_score_and_returns_coins() {
    let (client, stub) = spawn_stub(10).await;
    let earned = client.earn(57).await.unwrap();
    assert_eq!(earned.earned, 10);
    assert_eq!(earned.balance, Some(20));
    assert_eq!(stub.lock().unwrap().balance, 20);
}

#[tokio::test]
async fn equip_surfaces_backend_error() {
    let (client, stub) = spawn_stub(0).await;
    client.equip("default").await.unwrap();
    assert_eq!(stub.lock().unwrap().equipped.as_deref(), Some("default"));

    match client.equip("skin_gold").await {
        Err(e @ ApiError::Status { .. }) => assert_eq!(e.user_message("Could not equip"), "skin not owned"),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn cart_round_trip() {
    let (client, _) = spawn_stub(500).await;
    assert!(client.cart().await.unwrap().is_empty());

    let cart = client.add_to_cart("extra_life").await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].item_id, "extra_life");
    assert_eq!(cart.total, 50);

    let line = cart.items[0].id.clone();
    let cart = client.update_quantity(&line, 3).await.unwrap();
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total, 150);

    let cart = client.remove_from_cart(&line).await.unwrap();
    assert!(cart.is_empty());
    assert_eq!(cart.total, 0);
}

#[tokio::test]
async fn unknown_item_is_rejected() {
    let (client, _) = spawn_stub(500).await;
    match client.add_to_cart("mystery").await {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
            assert_eq!(message, "unknown item");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn checkout_sends_fresh_idempotency_keys() {
    let (client, stub) = spawn_stub(100).await;
    client.add_to_cart("extra_life").await.unwrap();

    let result = client.checkout().await.unwrap();
    assert!(result.is_success());
    assert_eq!(result.balance, Some(50));
    assert_eq!(result.extra_lives, Some(1));

    client.checkout().await.unwrap();
    let keys = stub.lock().unwrap().idempotency_keys.clone();
    assert_eq!(keys.len(), 2);
    assert_ne!(keys[0], keys[1]);
}

#[tokio::test]
async fn refused_checkout_is_not_an_error() {
    let (client, _) = spawn_stub(20).await;
    client.add_to_cart("skin_gold").await.unwrap();

    let result = client.checkout().await.unwrap();
    assert!(!result.is_success());
    assert_eq!(result.status, "InsufficientFunds");
    assert_eq!(result.message.as_deref(), Some("Not enough coins"));
    assert_eq!(result.balance, None);
}

#[tokio::test]
async fn unreachable_backend_degrades() {
    // Bind then drop so nothing listens on the port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = ApiClient::new(&format!("http://{}", addr)).unwrap();

    let profile = load_profile_or_default(&client).await;
    assert_eq!(profile.balance, 0);
    assert_eq!(profile.wardrobe().equipped, "default");
    assert!(load_cart_or_empty(&client).await.is_empty());
    assert!(matches!(client.earn(10).await, Err(ApiError::Transport(_))));
}

#[tokio::test]
async fn extra_life_is_bought_on_its_own() {
    let (client, stub) = spawn_stub(120).await;

    match client.buy_extra_life().await.unwrap() {
        ExtraLifePurchase::Checkout(result) => {
            assert!(result.is_success());
            assert_eq!(result.balance, Some(70));
            assert_eq!(result.extra_lives, Some(1));
        }
        other => panic!("expected a placed order, got {:?}", other),
    }
    assert!(cart_item_ids(&stub).is_empty());
}

#[tokio::test]
async fn extra_life_never_pays_for_other_items() {
    let (client, stub) = spawn_stub(200).await;
    seed_cart(&stub, "skin_gold");

    let outcome = client.buy_extra_life().await.unwrap();
    assert!(matches!(outcome, ExtraLifePurchase::CartNotEmpty));
    assert_eq!(stub.lock().unwrap().balance, 200);
    assert_eq!(cart_item_ids(&stub), vec!["skin_gold"]);
    assert!(stub.lock().unwrap().idempotency_keys.is_empty());
}

#[tokio::test]
async fn refused_extra_life_leaves_cart_as_it_was() {
    let (client, stub) = spawn_stub(30).await;

    match client.buy_extra_life().await.unwrap() {
        ExtraLifePurchase::Checkout(result) => assert!(!result.is_success()),
        other => panic!("expected a refused order, got {:?}", other),
    }
    assert_eq!(stub.lock().unwrap().balance, 30);
    assert!(cart_item_ids(&stub).is_empty());
}
