use crate::helpers;
use serde_json::Value;

#[tokio::test]
async fn generate_returns_the_templated_message() {
    let app = helpers::spawn_app().await;
    let payload = serde_json::json!({
        "name": "Ann",
        "position": "CEO",
        "company": "",
        "industry": "",
        "interests": "",
        "recentActivity": ""
    });

    let response = app.generate_message(&payload).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Hi Ann,\n\n\
         I noticed your role as CEO at your company. I'm impressed by your work.\n\n\
         I'd love to connect and learn more about your experience. \
         Let me know if you'd be open to a conversation.\n\n\
         Best regards,\n[Your Name]"
    );
}

#[tokio::test]
async fn generate_uses_every_supplied_field() {
    let app = helpers::spawn_app().await;
    let payload = serde_json::json!({
        "name": "Bo",
        "position": "Head of Growth",
        "company": "Acme",
        "industry": "logistics",
        "interests": "route optimisation",
        "recentActivity": "your warehouse automation post"
    });

    let body: Value = app.generate_message(&payload).await.json().await.unwrap();
    let message = body["message"].as_str().unwrap();

    assert!(message.contains("Head of Growth at Acme in the logistics industry"));
    assert!(message.contains("especially your recent activity regarding your warehouse automation post"));
    assert!(message.contains("and your interest in route optimisation."));
}

#[tokio::test]
async fn generate_is_idempotent() {
    let app = helpers::spawn_app().await;
    let payload = serde_json::json!({ "name": "Ann", "position": "CTO", "company": "Initech" });

    let first: Value = app.generate_message(&payload).await.json().await.unwrap();
    let second: Value = app.generate_message(&payload).await.json().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn generate_returns_400_naming_missing_required_fields() {
    let app = helpers::spawn_app().await;
    let test_cases = vec![
        (serde_json::json!({ "position": "CEO" }), vec!["name"]),
        (serde_json::json!({ "name": "Ann", "position": "" }), vec!["position"]),
        (serde_json::json!({ "company": "Acme" }), vec!["name", "position"]),
        (serde_json::json!({ "name": 5, "position": "CEO" }), vec!["name"]),
        (
            serde_json::json!({ "name": "Ann", "position": "CEO", "industry": 3 }),
            vec!["industry"],
        ),
    ];

    for (payload, expected) in test_cases {
        let response = app.generate_message(&payload).await;
        assert_eq!(response.status().as_u16(), 400, "Expected 400 for {payload}");

        let body: Value = response.json().await.unwrap();
        let fields: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, expected);
    }
}
