//! Credential data models

use serde::Deserialize;

/// Credential detail from the AAP API
#[derive(Deserialize, Debug, Clone)]
pub struct Credential {
    pub id: u64,
    /// Owning organization; personal credentials have none
    #[serde(default)]
    pub organization: Option<u64>,
}

impl Credential {
    /// Owner ID when it differs from `org_id`
    pub fn foreign_owner(&self, org_id: u64) -> Option<u64> {
        self.organization.filter(|owner| *owner != org_id)
    }
}
