//! Organization data models

use serde::Deserialize;
use std::collections::HashMap;

use crate::aap::traits::AapResource;

/// Organization data from the AAP API
///
/// Only the fields the inspector reasons about are typed; the raw payload
/// is kept next to it for display and export.
#[derive(Deserialize, Debug, Clone)]
pub struct Organization {
    pub id: u64,
    pub name: String,
    /// Resource-type label -> link to that collection
    #[serde(default)]
    pub related: HashMap<String, serde_json::Value>,
}

impl Organization {
    /// Get the link for a related resource type, if the API listed one
    pub fn related_link(&self, field: &str) -> Option<&str> {
        self.related.get(field).and_then(|v| v.as_str())
    }
}

impl AapResource for Organization {
    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
