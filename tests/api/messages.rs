use crate::helpers::{self, message_payload};
use serde_json::Value;
use uuid::Uuid;

// ============================================================================
// Create Message
// ============================================================================

#[tokio::test]
async fn create_message_returns_201_with_pending_default() {
    let app = helpers::spawn_app().await;
    let campaign_id = app.create_sample_campaign_id().await;

    let response = app.create_message(&message_payload(&campaign_id)).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["campaignId"], campaign_id.to_string());
    assert_eq!(body["status"], "pending");
    assert_eq!(body["scheduledTime"], "2025-06-01T09:30:00Z");
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn create_message_normalises_scheduled_time_to_utc() {
    let app = helpers::spawn_app().await;
    let campaign_id = app.create_sample_campaign_id().await;
    let mut payload = message_payload(&campaign_id);
    payload["scheduledTime"] = "2025-06-01T11:30:00+02:00".into();
    payload["status"] = "sent".into();

    let response = app.create_message(&payload).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["scheduledTime"], "2025-06-01T09:30:00Z");
    assert_eq!(body["status"], "sent");
}

#[tokio::test]
async fn create_message_returns_422_when_campaign_does_not_exist() {
    let app = helpers::spawn_app().await;

    let response = app.create_message(&message_payload(&Uuid::new_v4())).await;
    assert_eq!(
        response.status().as_u16(),
        422,
        "Expected the missing campaign to be reported, not a generic failure"
    );

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "campaign not found");
}

#[tokio::test]
async fn create_message_returns_400_for_invalid_fields() {
    let app = helpers::spawn_app().await;
    let campaign_id = app.create_sample_campaign_id().await;

    let test_cases = vec![
        ("content", "content", serde_json::json!("")),
        ("campaignId", "campaignId", serde_json::json!("not-a-uuid")),
        ("scheduledTime", "scheduledTime", serde_json::json!("whenever")),
        ("scheduledTime", "scheduledTime", serde_json::Value::Null),
        ("scheduledTime", "scheduledTime", serde_json::json!("-9999-01-01")),
        ("status", "status", serde_json::json!("queued")),
        ("content", "content", serde_json::json!(42)),
        ("campaignId", "campaignId", serde_json::json!(7)),
        ("status", "status", serde_json::json!(false)),
    ];

    for (key, field, value) in test_cases {
        let mut payload = message_payload(&campaign_id);
        payload[key] = value;

        let response = app.create_message(&payload).await;
        assert_eq!(response.status().as_u16(), 400, "Expected 400 for bad `{key}`");

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["errors"][0]["field"], field);
    }
}

#[tokio::test]
async fn create_message_reports_all_missing_required_fields() {
    let app = helpers::spawn_app().await;

    let response = app.create_message(&serde_json::json!({})).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["content", "campaignId", "scheduledTime"]);
}

// ============================================================================
// Get / List / Update / Delete Message
// ============================================================================

#[tokio::test]
async fn list_and_get_messages_return_stored_records() {
    let app = helpers::spawn_app().await;
    let message = app.create_sample_message().await;

    let listed: Value = app.list_messages().await.json().await.unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0], message);

    let response = app.get_message(message["id"].as_str().unwrap()).await;
    assert_eq!(response.status().as_u16(), 200);
    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched, message);
}

#[tokio::test]
async fn update_message_changes_only_supplied_fields() {
    let app = helpers::spawn_app().await;
    let message = app.create_sample_message().await;
    let id = message["id"].as_str().unwrap();

    let response = app
        .update_message(id, &serde_json::json!({ "status": "failed" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["status"], "failed");
    assert_eq!(updated["content"], message["content"]);
    assert_eq!(updated["scheduledTime"], message["scheduledTime"]);
    assert_eq!(updated["campaignId"], message["campaignId"]);
}

#[tokio::test]
async fn update_message_does_not_recheck_campaign_existence() {
    let app = helpers::spawn_app().await;
    let message = app.create_sample_message().await;
    let id = message["id"].as_str().unwrap();
    let dangling = Uuid::new_v4().to_string();

    let response = app
        .update_message(id, &serde_json::json!({ "campaignId": dangling }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["campaignId"], dangling);
}

#[tokio::test]
async fn update_message_returns_400_for_bad_schedule_and_404_for_unknown_id() {
    let app = helpers::spawn_app().await;
    let message = app.create_sample_message().await;
    let id = message["id"].as_str().unwrap();

    let response = app
        .update_message(id, &serde_json::json!({ "scheduledTime": "soon" }))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let response = app
        .update_message(
            &Uuid::new_v4().to_string(),
            &serde_json::json!({ "status": "sent" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn delete_message_returns_200_then_404() {
    let app = helpers::spawn_app().await;
    let message = app.create_sample_message().await;
    let id = message["id"].as_str().unwrap();

    let response = app.delete_message(id).await;
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(app.get_message(id).await.status().as_u16(), 404);
    assert_eq!(app.delete_message(id).await.status().as_u16(), 404);
}
