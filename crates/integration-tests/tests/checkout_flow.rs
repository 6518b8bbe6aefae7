//! Checkout flow tests: the empty-cart precondition, validation failures,
//! and the receipt with its WhatsApp hand-off link.

#![allow(clippy::expect_used)]

use axum::http::{StatusCode, header};

use mmbm_integration_tests::{TestClient, body_string};

fn location(response: &axum::http::Response<axum::body::Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .expect("location str")
}

async fn client_with_items() -> TestClient {
    let mut client = TestClient::new();
    client
        .post_form("/cart/add", "product_id=acc-canvas-tote")
        .await;
    client
        .post_form(
            "/cart/add",
            "product_id=men-oxford-shirt&size=M&color=White",
        )
        .await;
    client
}

#[tokio::test]
async fn empty_cart_never_reaches_the_checkout_form() {
    let mut client = TestClient::new();

    let response = client.get("/checkout").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/cart");

    let response = client
        .post_form("/checkout", "name=Ama&phone=0503561270")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/cart");
}

#[tokio::test]
async fn checkout_form_shows_the_cart_summary() {
    let mut client = client_with_items().await;

    let response = client.get("/checkout").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;

    assert!(body.contains("Canvas Tote Bag"));
    assert!(body.contains("Classic Oxford Shirt"));
    assert!(body.contains("GH₵ 255.00")); // 75.00 + 180.00
}

#[tokio::test]
async fn missing_name_blocks_submission_and_keeps_the_cart() {
    let mut client = client_with_items().await;

    let response = client
        .post_form("/checkout", "name=&phone=0503561270")
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(response).await;
    assert!(body.contains("name is required"));

    // nothing was placed: the cart is intact
    let response = client.get("/cart/count").await;
    let body = body_string(response).await;
    assert!(body.contains(">2<"));
}

#[tokio::test]
async fn delivery_without_address_is_rejected_with_input_preserved() {
    let mut client = client_with_items().await;

    let response = client
        .post_form(
            "/checkout",
            "name=Ama+Mensah&phone=0503561270&delivery_method=delivery",
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(response).await;

    assert!(body.contains("delivery address is required"));
    // the buyer's input is echoed back into the form
    assert!(body.contains("value=\"Ama Mensah\""));
    assert!(body.contains("value=\"0503561270\""));
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let mut client = client_with_items().await;

    let response = client
        .post_form(
            "/checkout",
            "name=Ama&phone=0503561270&email=not-an-email",
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(response).await;
    assert!(body.contains("@ symbol"));
}

#[tokio::test]
async fn valid_submission_renders_the_receipt_and_clears_the_cart() {
    let mut client = client_with_items().await;

    let response = client
        .post_form(
            "/checkout",
            "name=Ama+Mensah&phone=0503561270&email=ama%40example.com\
             &delivery_method=delivery&address=12+Oxford+St%2C+Osu%2C+Accra\
             &payment_method=momo&notes=Call+ahead",
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;

    // the receipt: order id, items, total, hand-off link
    assert!(body.contains("MMBM-"));
    assert!(body.contains("Canvas Tote Bag"));
    assert!(body.contains("Classic Oxford Shirt"));
    assert!(body.contains("GH₵ 255.00"));
    assert!(body.contains("https://wa.me/233503561270?text="));

    // and the session cart is gone
    let response = client.get("/cart").await;
    let body = body_string(response).await;
    assert!(body.contains("Your Cart is Empty"));
}

#[tokio::test]
async fn successive_orders_get_distinct_identifiers() {
    let mut client = client_with_items().await;
    let form = "name=Ama&phone=0503561270";

    let first = body_string(client.post_form("/checkout", form).await).await;
    let first_id = extract_order_id(&first);

    client
        .post_form("/cart/add", "product_id=acc-canvas-tote")
        .await;
    let second = body_string(client.post_form("/checkout", form).await).await;
    let second_id = extract_order_id(&second);

    assert_ne!(first_id, second_id);
}

/// Pull the "MMBM-..." identifier out of a receipt page.
fn extract_order_id(body: &str) -> String {
    let start = body.find("MMBM-").expect("order id in receipt");
    body[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}
