//! Organization dependency traversal

use log::{debug, info, warn};

use crate::aap::related::{ItemSummary, ResourceKind};
use crate::aap::AapClient;
use crate::config::api;
use crate::error::{AapError, Result};

use super::report::{CredentialFinding, InspectionReport, ResourceSection, SectionOutcome};

/// Walks an organization's related collections and checks credential ownership
pub struct OrganizationInspector<'a> {
    client: &'a AapClient,
}

impl<'a> OrganizationInspector<'a> {
    pub fn new(client: &'a AapClient) -> Self {
        Self { client }
    }

    /// Inspect the organization named by `identifier` (name or numeric ID)
    ///
    /// Failing to resolve the organization is an error; failures while
    /// walking its dependencies are recorded in the report instead.
    pub async fn inspect(&self, identifier: &str) -> Result<InspectionReport> {
        let (organization, raw) = self
            .client
            .resolve_organization(identifier)
            .await?
            .ok_or_else(|| AapError::OrganizationNotFound(identifier.to_string()))?;

        info!(
            "Inspecting organization '{}' (id {})",
            organization.name, organization.id
        );

        let mut report = InspectionReport::new(organization, raw);
        self.collect_related(&mut report).await;
        self.check_credentials(&mut report).await;

        Ok(report)
    }

    /// Fetch the first page of every catalogued type the organization links to
    async fn collect_related(&self, report: &mut InspectionReport) {
        for kind in ResourceKind::ALL {
            let Some(link) = report.organization.related_link(kind.field()) else {
                debug!("No related link for {}", kind.field());
                continue;
            };

            let outcome = match self.client.get_related_data(link).await {
                Ok(Some(page)) => {
                    let count = page.count;
                    let more_pages = page.has_more_pages();
                    if more_pages {
                        debug!(
                            "{} has more than one page; only the first is inspected",
                            kind.field()
                        );
                    }

                    if count > 0 {
                        if let Some(results) = page.results {
                            let preview: Vec<ItemSummary> = results
                                .iter()
                                .take(api::PREVIEW_LIMIT)
                                .map(ItemSummary::from)
                                .collect();
                            report.dependencies.insert(kind, preview);
                        }
                    }

                    SectionOutcome::Fetched { count, more_pages }
                }
                Ok(None) => {
                    let err = AapError::InvalidLink(link.to_string());
                    warn!("Error retrieving {}: {}", kind, err);
                    SectionOutcome::Failed(err.to_string())
                }
                Err(e) => {
                    warn!("Error retrieving {}: {}", kind, e);
                    SectionOutcome::Failed(e.to_string())
                }
            };

            report.sections.push(ResourceSection { kind, outcome });
        }
    }

    /// Compare each previewed credential's owner against the inspected organization
    async fn check_credentials(&self, report: &mut InspectionReport) {
        let Some(credentials) = report.dependencies.get(ResourceKind::Credentials) else {
            return;
        };
        let credentials = credentials.to_vec();
        let org_id = report.organization.id;

        debug!(
            "Checking {} credentials for cross-organization ownership",
            credentials.len()
        );

        let mut findings = Vec::new();
        for credential in credentials {
            let Some(id) = credential.id else {
                findings.push(CredentialFinding::Failed {
                    message: "credential has no id".to_string(),
                    credential,
                });
                continue;
            };

            match self.client.get_credential(id).await {
                Ok(detail) => {
                    if let Some(owner) = detail.foreign_owner(org_id) {
                        warn!(
                            "Credential '{}' belongs to different organization (ID: {})",
                            credential.name, owner
                        );
                        report.dependencies.push_cross_org(credential.clone(), owner);
                        findings.push(CredentialFinding::CrossOrg {
                            credential,
                            organization_id: owner,
                        });
                    }
                }
                Err(e) => {
                    warn!("Error checking credential {}: {}", id, e);
                    findings.push(CredentialFinding::Failed {
                        credential,
                        message: e.to_string(),
                    });
                }
            }
        }

        report.credential_findings = Some(findings);
    }
}
