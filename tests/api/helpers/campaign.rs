use crate::helpers::TestApp;
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Sentence;
use reqwest::Response;
use serde_json::Value;
use uuid::Uuid;

pub fn campaign_payload() -> Value {
    serde_json::json!({
        "name": format!("{} outreach", CompanyName().fake::<String>()),
        "description": Sentence(3..8).fake::<String>(),
        "status": "ACTIVE",
        "leads": ["https://linkedin.com/in/ann-lee", "https://linkedin.com/in/bo-chen"],
        "accountIDs": ["acc-1001", "acc-1002"]
    })
}

impl TestApp {
    pub async fn list_campaigns(&self) -> Response {
        self.send_get("api/campaigns").await
    }

    pub async fn get_campaign(&self, id: &str) -> Response {
        self.send_get(&format!("api/campaigns/{id}")).await
    }

    pub async fn create_campaign(&self, payload: &Value) -> Response {
        self.send_post("api/campaigns", payload).await
    }

    pub async fn update_campaign(&self, id: &str, payload: &Value) -> Response {
        self.send_put(&format!("api/campaigns/{id}"), payload).await
    }

    pub async fn delete_campaign(&self, id: &str) -> Response {
        self.send_delete(&format!("api/campaigns/{id}")).await
    }

    pub async fn create_sample_campaign(&self) -> Value {
        let response = self.create_campaign(&campaign_payload()).await;
        assert_eq!(response.status().as_u16(), 201, "Failed to create sample campaign");
        response.json().await.unwrap()
    }

    pub async fn create_sample_campaign_id(&self) -> Uuid {
        let body = self.create_sample_campaign().await;
        Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
    }
}
