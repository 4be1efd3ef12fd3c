//! aap-inspect - Inspect Ansible Automation Platform organizations
//!
//! A CLI tool that resolves one organization by name or ID and reports the
//! resources that depend on it.
//!
//! # Features
//!
//! - Details of the organization itself
//! - Counts and previews for every related resource type
//! - Detection of credentials owned by another organization
//! - Text, JSON and YAML output, plus JSON export to a file
//!
//! # Example
//!
//! ```bash
//! # Inspect by name
//! aap-inspect Engineering --url https://aap.example.com
//!
//! # Inspect by ID and export the report
//! aap-inspect 5 --url https://aap.example.com --export engineering.json
//!
//! # Self-signed lab instance, YAML on stdout
//! aap-inspect Engineering --url https://aap.local --no-verify-ssl -o yaml
//! ```

pub mod aap;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;

pub use aap::{
    run_inspect_command, AapClient, BasicAuth, InspectionReport, LoginResolver,
    OrganizationInspector,
};
pub use cli::{Cli, OutputFormat};
pub use error::{AapError, Result};
pub use output::{export_to_json, output_report};
