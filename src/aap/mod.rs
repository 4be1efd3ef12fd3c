//! AAP API client module
//!
//! This module provides functionality to interact with the Ansible Automation
//! Platform controller API (`/api/v2/`).

mod auth;
mod client;
pub mod credentials;
pub mod inspect;
pub mod organizations;
pub mod related;
pub mod traits;

pub use auth::{BasicAuth, LoginResolver};
pub use client::AapClient;
pub use credentials::Credential;
pub use inspect::{
    run_inspect_command, DependencyReport, InspectionReport, OrganizationInspector,
};
pub use organizations::{OrgIdentifier, Organization};
pub use related::{ItemSummary, RelatedItem, ResourceKind};
pub use traits::{AapResource, ApiListResponse};
