//! Inspection report types

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::aap::organizations::Organization;
use crate::aap::related::{ItemSummary, ResourceKind};

/// Key under which mismatched credentials are reported
pub const CROSS_ORG_KEY: &str = "cross_org_credentials";

/// Credential owned by another organization than the one inspected
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CrossOrgCredential {
    pub credential: ItemSummary,
    pub organization_id: u64,
}

/// Preview lists per resource type, plus cross-organization credentials
///
/// Serializes as a JSON object whose keys follow traversal order;
/// `cross_org_credentials` only appears when something was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyReport {
    resources: Vec<(ResourceKind, Vec<ItemSummary>)>,
    cross_org_credentials: Vec<CrossOrgCredential>,
}

impl DependencyReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the preview for a resource type, replacing any previous one
    pub fn insert(&mut self, kind: ResourceKind, items: Vec<ItemSummary>) {
        match self.resources.iter_mut().find(|entry| entry.0 == kind) {
            Some(entry) => entry.1 = items,
            None => self.resources.push((kind, items)),
        }
    }

    /// Preview for a resource type, if it was populated
    pub fn get(&self, kind: ResourceKind) -> Option<&[ItemSummary]> {
        self.resources
            .iter()
            .find(|entry| entry.0 == kind)
            .map(|entry| entry.1.as_slice())
    }

    /// Record a credential that belongs to another organization
    pub fn push_cross_org(&mut self, credential: ItemSummary, organization_id: u64) {
        self.cross_org_credentials.push(CrossOrgCredential {
            credential,
            organization_id,
        });
    }

    pub fn cross_org_credentials(&self) -> &[CrossOrgCredential] {
        &self.cross_org_credentials
    }

    /// Report keys in serialization order
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.resources.iter().map(|(k, _)| k.field()).collect();
        if !self.cross_org_credentials.is_empty() {
            keys.push(CROSS_ORG_KEY);
        }
        keys
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty() && self.cross_org_credentials.is_empty()
    }
}

impl Serialize for DependencyReport {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.keys().len()))?;
        for (kind, items) in &self.resources {
            map.serialize_entry(kind.field(), items)?;
        }
        if !self.cross_org_credentials.is_empty() {
            map.serialize_entry(CROSS_ORG_KEY, &self.cross_org_credentials)?;
        }
        map.end()
    }
}

/// What happened when a resource type was fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    /// First page read; `count` is the server-side total
    Fetched { count: u64, more_pages: bool },
    /// Fetch failed; traversal moved on
    Failed(String),
}

/// Per-type traversal record used for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSection {
    pub kind: ResourceKind,
    pub outcome: SectionOutcome,
}

/// Result of checking one previewed credential, in check order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialFinding {
    /// Owned by another organization
    CrossOrg {
        credential: ItemSummary,
        organization_id: u64,
    },
    /// Detail could not be fetched
    Failed {
        credential: ItemSummary,
        message: String,
    },
}

/// Everything one inspection run produced
#[derive(Debug, Clone)]
pub struct InspectionReport {
    pub organization: Organization,
    /// Organization payload exactly as the API returned it
    pub raw: serde_json::Value,
    pub dependencies: DependencyReport,
    pub sections: Vec<ResourceSection>,
    /// `None` when no credentials were previewed, so no check ran
    pub credential_findings: Option<Vec<CredentialFinding>>,
}

/// Shape written by `--export` and `-o json|yaml`
#[derive(Serialize, Debug)]
pub struct ExportDocument<'a> {
    pub organization: &'a serde_json::Value,
    pub dependencies: &'a DependencyReport,
}

impl InspectionReport {
    pub fn new(organization: Organization, raw: serde_json::Value) -> Self {
        Self {
            organization,
            raw,
            dependencies: DependencyReport::new(),
            sections: Vec::new(),
            credential_findings: None,
        }
    }

    /// View for serialization
    pub fn export_document(&self) -> ExportDocument<'_> {
        ExportDocument {
            organization: &self.raw,
            dependencies: &self.dependencies,
        }
    }

    /// Count of per-type and per-credential failures
    pub fn error_count(&self) -> usize {
        let section_errors = self
            .sections
            .iter()
            .filter(|s| matches!(s.outcome, SectionOutcome::Failed(_)))
            .count();
        let credential_errors = self.credential_findings.as_ref().map_or(0, |findings| {
            findings
                .iter()
                .filter(|f| matches!(f, CredentialFinding::Failed { .. }))
                .count()
        });
        section_errors + credential_errors
    }
}
