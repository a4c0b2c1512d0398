use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone)]
pub struct MessageContent(String);

impl MessageContent {
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Invalid content: cannot be empty.".to_string());
        }

        // Line breaks and indentation are part of the outreach text, so keep it as given.
        Ok(Self(s))
    }
}

impl AsRef<str> for MessageContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for MessageContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
