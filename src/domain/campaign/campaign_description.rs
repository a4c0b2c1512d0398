use std::fmt;
use std::fmt::{Display, Formatter};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct CampaignDescription(String);

impl CampaignDescription {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("Invalid description: cannot be empty.".to_string());
        }

        if trimmed.graphemes(true).count() > 2000 {
            return Err("Invalid description: cannot be longer than 2000 characters.".to_string());
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for CampaignDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CampaignDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
