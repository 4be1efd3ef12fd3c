//! Organization module

mod api;
mod models;

pub use api::OrgIdentifier;
pub use models::Organization;
