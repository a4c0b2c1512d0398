use crate::domain::{LinkedInProfile, ProfilePayload, ValidationErrors};

const GENERIC_COMPANY: &str = "your company";
const CLOSING: &str = "I'd love to connect and learn more about your experience. \
Let me know if you'd be open to a conversation.\n\n";
const SIGNATURE: &str = "Best regards,\n[Your Name]";

/// Builds the connection note for `profile`. Pure and deterministic.
pub fn compose_outreach_message(profile: &LinkedInProfile) -> String {
    let company = profile.company.as_deref().unwrap_or(GENERIC_COMPANY);

    let mut message = format!("Hi {},\n\n", profile.name);
    message.push_str(&format!(
        "I noticed your role as {} at {}",
        profile.position, company
    ));

    if let Some(industry) = &profile.industry {
        message.push_str(&format!(" in the {industry} industry"));
    }

    message.push_str(". I'm impressed by your work");

    if let Some(activity) = &profile.recent_activity {
        message.push_str(&format!(
            ", especially your recent activity regarding {activity}"
        ));
    }

    if let Some(interests) = &profile.interests {
        message.push_str(&format!(" and your interest in {interests}"));
    }

    message.push_str(".\n\n");
    message.push_str(CLOSING);
    message.push_str(SIGNATURE);
    message
}

pub fn generate_outreach_message(payload: ProfilePayload) -> Result<String, ValidationErrors> {
    let profile = LinkedInProfile::parse(payload)?;
    Ok(compose_outreach_message(&profile))
}
