use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub name: Option<Value>,
    pub position: Option<Value>,
    pub company: Option<Value>,
    pub industry: Option<Value>,
    pub interests: Option<Value>,
    pub recent_activity: Option<Value>,
}

#[derive(Serialize, Debug)]
pub struct GeneratedMessage {
    pub message: String,
}
