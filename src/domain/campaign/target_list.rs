/// Profile URLs targeted by a campaign, in the order the client gave them.
#[derive(Debug, Clone)]
pub struct Leads(Vec<String>);

impl Leads {
    pub fn parse(leads: Vec<String>) -> Result<Self, String> {
        if leads.is_empty() {
            return Err("Invalid leads: must be a non-empty list.".to_string());
        }

        Ok(Self(leads))
    }
}

impl AsRef<[String]> for Leads {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct AccountIds(Vec<String>);

impl AccountIds {
    pub fn parse(account_ids: Vec<String>) -> Result<Self, String> {
        if account_ids.is_empty() {
            return Err("Invalid accountIDs: must be a non-empty list.".to_string());
        }

        Ok(Self(account_ids))
    }
}

impl AsRef<[String]> for AccountIds {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}
