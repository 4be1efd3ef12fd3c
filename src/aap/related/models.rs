//! Related resource data models

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::config::defaults;

/// Related resource types the inspector walks, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Teams,
    Users,
    Projects,
    Inventories,
    JobTemplates,
    WorkflowJobTemplates,
    Credentials,
    NotificationTemplates,
    InstanceGroups,
    Applications,
    ActivityStream,
    AccessList,
}

impl ResourceKind {
    /// Full catalogue in traversal order
    pub const ALL: [ResourceKind; 12] = [
        ResourceKind::Teams,
        ResourceKind::Users,
        ResourceKind::Projects,
        ResourceKind::Inventories,
        ResourceKind::JobTemplates,
        ResourceKind::WorkflowJobTemplates,
        ResourceKind::Credentials,
        ResourceKind::NotificationTemplates,
        ResourceKind::InstanceGroups,
        ResourceKind::Applications,
        ResourceKind::ActivityStream,
        ResourceKind::AccessList,
    ];

    /// Key in the organization's `related` map and in the report
    pub fn field(&self) -> &'static str {
        match self {
            ResourceKind::Teams => "teams",
            ResourceKind::Users => "users",
            ResourceKind::Projects => "projects",
            ResourceKind::Inventories => "inventories",
            ResourceKind::JobTemplates => "job_templates",
            ResourceKind::WorkflowJobTemplates => "workflow_job_templates",
            ResourceKind::Credentials => "credentials",
            ResourceKind::NotificationTemplates => "notification_templates",
            ResourceKind::InstanceGroups => "instance_groups",
            ResourceKind::Applications => "applications",
            ResourceKind::ActivityStream => "activity_stream",
            ResourceKind::AccessList => "access_list",
        }
    }

    /// Human-readable heading
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Teams => "Teams",
            ResourceKind::Users => "Users",
            ResourceKind::Projects => "Projects",
            ResourceKind::Inventories => "Inventories",
            ResourceKind::JobTemplates => "Job Templates",
            ResourceKind::WorkflowJobTemplates => "Workflow Job Templates",
            ResourceKind::Credentials => "Credentials",
            ResourceKind::NotificationTemplates => "Notification Templates",
            ResourceKind::InstanceGroups => "Instance Groups",
            ResourceKind::Applications => "Applications",
            ResourceKind::ActivityStream => "Activity Stream",
            ResourceKind::AccessList => "Access List",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One entry of a related collection page, as much as the preview needs
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RelatedItem {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl RelatedItem {
    /// Display name: `name`, then `username`, then N/A
    pub fn display_name(&self) -> &str {
        [self.name.as_deref(), self.username.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or(defaults::MISSING)
    }
}

/// Preview entry stored in the dependency report
///
/// A missing `id` serializes as `"N/A"`, same as it renders.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    #[serde(serialize_with = "serialize_id_or_missing")]
    pub id: Option<u64>,
    pub name: String,
}

fn serialize_id_or_missing<S>(
    id: &Option<u64>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(id) => serializer.serialize_u64(*id),
        None => serializer.serialize_str(defaults::MISSING),
    }
}

impl ItemSummary {
    /// ID for display, N/A when the API did not send one
    pub fn display_id(&self) -> String {
        self.id
            .map(|id| id.to_string())
            .unwrap_or_else(|| defaults::MISSING.to_string())
    }
}

impl From<&RelatedItem> for ItemSummary {
    fn from(item: &RelatedItem) -> Self {
        Self {
            id: item.id,
            name: item.display_name().to_string(),
        }
    }
}
