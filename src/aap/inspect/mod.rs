//! Organization inspection: dependency traversal, credential check and reporting

mod commands;
mod inspector;
mod report;

pub use commands::run_inspect_command;
pub use inspector::OrganizationInspector;
pub use report::{
    CredentialFinding, CrossOrgCredential, DependencyReport, ExportDocument, InspectionReport,
    ResourceSection, SectionOutcome, CROSS_ORG_KEY,
};
