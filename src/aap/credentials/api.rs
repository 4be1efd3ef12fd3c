//! Credential API operations

use crate::aap::AapClient;
use crate::config::api;
use crate::error::Result;

use super::models::Credential;

impl AapClient {
    /// Get full credential detail by ID
    pub async fn get_credential(&self, id: u64) -> Result<Credential> {
        self.get(&format!("{}/{}/", api::CREDENTIALS, id)).await
    }
}
