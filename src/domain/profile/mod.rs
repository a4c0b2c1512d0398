mod outreach;
mod types;

pub use outreach::{compose_outreach_message, generate_outreach_message};
pub use types::*;

use serde_json::Value;

use crate::domain::{ValidationErrors, string};

/// A LinkedIn-style profile, trimmed. Optional fields that are blank are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedInProfile {
    pub name: String,
    pub position: String,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub interests: Option<String>,
    pub recent_activity: Option<String>,
}

// A non-string is an error; blank text counts as absent.
fn non_blank(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<Value>,
) -> Option<String> {
    errors
        .check_supplied(field, value, |v| string(field, v))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl LinkedInProfile {
    pub fn parse(payload: ProfilePayload) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = non_blank(&mut errors, "name", payload.name);
        if name.is_none() && !errors.fields().contains(&"name") {
            errors.add("name", "Invalid name: field is required.");
        }
        let position = non_blank(&mut errors, "position", payload.position);
        if position.is_none() && !errors.fields().contains(&"position") {
            errors.add("position", "Invalid position: field is required.");
        }
        let company = non_blank(&mut errors, "company", payload.company);
        let industry = non_blank(&mut errors, "industry", payload.industry);
        let interests = non_blank(&mut errors, "interests", payload.interests);
        let recent_activity = non_blank(&mut errors, "recentActivity", payload.recent_activity);

        match (name, position) {
            (Some(name), Some(position)) if errors.is_empty() => Ok(Self {
                name,
                position,
                company,
                industry,
                interests,
                recent_activity,
            }),
            _ => Err(errors),
        }
    }
}
