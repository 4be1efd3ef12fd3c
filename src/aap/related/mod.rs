//! Related resource module

mod api;
mod models;

pub use api::related_endpoint;
pub use models::{ItemSummary, RelatedItem, ResourceKind};
