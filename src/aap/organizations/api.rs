//! Organization API operations

use log::{debug, warn};

use crate::aap::traits::{AapResource, ApiListResponse};
use crate::aap::AapClient;
use crate::config::api;
use crate::error::Result;

use super::models::Organization;

/// How an organization identifier is looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgIdentifier {
    /// Exact lookup by ID, as a canonical decimal string of any sign or size
    Id(String),
    /// Name filter, first match wins
    Name(String),
}

impl OrgIdentifier {
    /// Integer strings (optional sign, ASCII digits) are IDs; everything else is a name
    pub fn parse(input: &str) -> Self {
        match canonical_integer(input.trim()) {
            Some(id) => OrgIdentifier::Id(id),
            None => OrgIdentifier::Name(input.to_string()),
        }
    }
}

/// Normalize `[+-]?[0-9]+` to its plain decimal form: no `+`, no leading
/// zeros, no `-0`
fn canonical_integer(input: &str) -> Option<String> {
    let (negative, digits) = match input.as_bytes().first()? {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = digits.trim_start_matches('0');
    if magnitude.is_empty() {
        return Some("0".to_string());
    }
    Some(if negative {
        format!("-{}", magnitude)
    } else {
        magnitude.to_string()
    })
}

impl AapClient {
    /// Get an organization by ID
    pub async fn get_organization_by_id(
        &self,
        id: &str,
    ) -> Result<Option<(Organization, serde_json::Value)>> {
        let endpoint = format!("{}/{}/", api::ORGANIZATIONS, id);
        let Some(raw) = self
            .fetch_resource::<serde_json::Value>(&endpoint, &format!("organization {}", id))
            .await?
        else {
            return Ok(None);
        };

        let org: Organization = serde_json::from_value(raw.clone())?;
        Ok(Some((org, raw)))
    }

    /// Get an organization by name
    ///
    /// The API filters by exact name; if several organizations come back the
    /// first one is used and a warning is logged.
    pub async fn get_organization_by_name(
        &self,
        name: &str,
    ) -> Result<Option<(Organization, serde_json::Value)>> {
        let endpoint = format!(
            "{}/?name={}",
            api::ORGANIZATIONS,
            urlencoding::encode(name)
        );
        debug!("Searching organization by name: {}", name);

        let response: ApiListResponse<serde_json::Value> = self.get(&endpoint).await?;
        if response.count > 1 {
            warn!(
                "{} organizations match name '{}', using the first one",
                response.count, name
            );
        }

        match response.into_results().into_iter().next() {
            Some(raw) => {
                let org: Organization = serde_json::from_value(raw.clone())?;
                if !org.matches(name) {
                    warn!(
                        "Name filter '{}' returned organization '{}' (id {})",
                        name,
                        org.name(),
                        org.id()
                    );
                }
                Ok(Some((org, raw)))
            }
            None => Ok(None),
        }
    }

    /// Resolve an identifier: numeric IDs go to the ID lookup only,
    /// anything else to the name lookup only
    pub async fn resolve_organization(
        &self,
        identifier: &str,
    ) -> Result<Option<(Organization, serde_json::Value)>> {
        match OrgIdentifier::parse(identifier) {
            OrgIdentifier::Id(id) => {
                debug!("Resolving organization by ID: {}", id);
                self.get_organization_by_id(&id).await
            }
            OrgIdentifier::Name(name) => self.get_organization_by_name(&name).await,
        }
    }
}
