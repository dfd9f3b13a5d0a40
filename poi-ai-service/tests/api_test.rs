//! Endpoint behaviour through the router, without binding a socket.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use common::router_with;
use http_body_util::BodyExt;
use poi_ai_service::services::providers::mock::MockTextProvider;
use poi_ai_service::services::providers::DisabledTextProvider;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn mock_router() -> Router {
    router_with(Arc::new(MockTextProvider::new(true))).await
}

async fn offline_router() -> Router {
    router_with(Arc::new(DisabledTextProvider)).await
}

#[tokio::test]
async fn root_lists_endpoints() {
    let (status, body) = send(offline_router().await, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "OSM-VN AI Backend");
    assert_eq!(body["status"], "running");
    assert_eq!(
        body["endpoints"],
        json!(["/chat", "/recommend-poi", "/describe-poi", "/health"])
    );
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, body) = send(offline_router().await, "GET", "/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("/nope"));
}

#[tokio::test]
async fn chat_uses_generated_reply_and_extracts_suggestions() {
    let (status, body) = send(
        mock_router().await,
        "POST",
        "/chat",
        Some(json!({
            "message": "Ăn gì ở Hà Nội?",
            "history": [{"role": "user", "content": "Xin chào"}],
            "location": {"lat": 21.0285, "lon": 105.8542, "name": "Hà Nội"}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["reply"],
        "Bạn nên thử:\n1. Phở bò Hà Nội\n2. Bún chả\n3. Cà phê trứng"
    );
    assert_eq!(
        body["suggestions"],
        json!(["Phở bò Hà Nội", "Bún chả", "Cà phê trứng"])
    );
}

#[tokio::test]
async fn chat_falls_back_when_backend_not_ready() {
    let (status, body) = send(
        offline_router().await,
        "POST",
        "/chat",
        Some(json!({
            "message": "I want to eat something",
            "location": {"name": "Hoàn Kiếm"}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["reply"],
        "Tôi gợi ý bạn tìm các nhà hàng gần Hoàn Kiếm. Hãy thử bộ lọc 'Nhà hàng' hoặc 'Cà phê'!"
    );
    assert_eq!(body["suggestions"], json!([]));
}

#[tokio::test]
async fn chat_greets_without_location() {
    let (_, body) = send(
        offline_router().await,
        "POST",
        "/chat",
        Some(json!({"message": "hello"})),
    )
    .await;

    assert_eq!(
        body["reply"],
        "Xin chào! Tôi có thể giúp bạn tìm địa điểm ở Việt Nam."
    );
}

#[tokio::test]
async fn chat_rejects_out_of_range_location() {
    let (status, _) = send(
        offline_router().await,
        "POST",
        "/chat",
        Some(json!({"message": "hi", "location": {"lat": 120.0, "lon": 0.0}})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn chat_requires_message() {
    let (status, _) = send(
        offline_router().await,
        "POST",
        "/chat",
        Some(json!({"history": []})),
    )
    .await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn recommend_cold_start() {
    let (status, body) = send(
        offline_router().await,
        "POST",
        "/recommend-poi",
        Some(json!({
            "user_history": [],
            "current_location": {"lat": 21.0285, "lon": 105.8542}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 5);
    assert_eq!(
        recs[0],
        json!({"type": "restaurant", "score": 1.0, "reason": "Địa điểm phổ biến nhất", "name": "Nhà hàng"})
    );
    assert_eq!(recs[4]["type"], "museum");
}

#[tokio::test]
async fn recommend_from_cafe_history() {
    let (status, body) = send(
        offline_router().await,
        "POST",
        "/recommend-poi",
        Some(json!({
            "user_history": ["cafe"],
            "current_location": {"lat": 10.7769, "lon": 106.7009},
            "preferences": {}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let types: Vec<&str> = body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, ["restaurant", "park", "bakery"]);
    assert_eq!(body["recommendations"][0]["score"], 0.5);
    assert_eq!(
        body["recommendations"][0]["reason"],
        "Vì bạn thường đến cafe"
    );
}

#[tokio::test]
async fn recommend_rejects_bad_coordinates() {
    let (status, body) = send(
        offline_router().await,
        "POST",
        "/recommend-poi",
        Some(json!({
            "user_history": ["cafe"],
            "current_location": {"lat": 21.0, "lon": 181.0}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn describe_falls_back_for_known_type() {
    let (status, body) = send(
        offline_router().await,
        "POST",
        "/describe-poi",
        Some(json!({"poi_name": "Bảo tàng Lịch sử", "poi_type": "museum"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "Bảo tàng lưu giữ di sản văn hóa");
    assert_eq!(body["highlights"], json!(["Lịch sử", "Giáo dục"]));
}

#[tokio::test]
async fn describe_falls_back_for_unknown_type() {
    let (_, body) = send(
        offline_router().await,
        "POST",
        "/describe-poi",
        Some(json!({"poi_name": "Chợ Bến Thành", "poi_type": "marketplace", "location": "TP.HCM"})),
    )
    .await;

    assert_eq!(
        body["description"],
        "Chợ Bến Thành là một điểm đến thú vị tại Việt Nam."
    );
    assert_eq!(body["highlights"], json!(["Đáng tham quan"]));
}

#[tokio::test]
async fn describe_uses_generated_text() {
    let provider = MockTextProvider::new(true)
        .with_reply("A beautiful green park around a peaceful lake, perfect for a morning walk.");
    let (status, body) = send(
        router_with(Arc::new(provider)).await,
        "POST",
        "/describe-poi",
        Some(json!({"poi_name": "Công viên Thống Nhất", "poi_type": "park"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["description"],
        "A beautiful green park around a peaceful lake, perfect for a morning walk."
    );
    assert_eq!(body["highlights"], json!(["Beautiful", "Green", "Peaceful"]));
}
