use crate::helpers::TestApp;
use reqwest::Response;
use serde_json::Value;
use uuid::Uuid;

pub fn message_payload(campaign_id: &Uuid) -> Value {
    serde_json::json!({
        "content": "Hi Ann, loved your post on hiring. Open to a chat?",
        "campaignId": campaign_id.to_string(),
        "scheduledTime": "2025-06-01T09:30:00Z"
    })
}

impl TestApp {
    pub async fn list_messages(&self) -> Response {
        self.send_get("api/messages").await
    }

    pub async fn get_message(&self, id: &str) -> Response {
        self.send_get(&format!("api/messages/{id}")).await
    }

    pub async fn create_message(&self, payload: &Value) -> Response {
        self.send_post("api/messages", payload).await
    }

    pub async fn update_message(&self, id: &str, payload: &Value) -> Response {
        self.send_put(&format!("api/messages/{id}"), payload).await
    }

    pub async fn delete_message(&self, id: &str) -> Response {
        self.send_delete(&format!("api/messages/{id}")).await
    }

    pub async fn generate_message(&self, payload: &Value) -> Response {
        self.send_post("api/messages/generate", payload).await
    }

    pub async fn create_sample_message(&self) -> Value {
        let campaign_id = self.create_sample_campaign_id().await;
        let response = self.create_message(&message_payload(&campaign_id)).await;
        assert_eq!(response.status().as_u16(), 201, "Failed to create sample message");
        response.json().await.unwrap()
    }
}
