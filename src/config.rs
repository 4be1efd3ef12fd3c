/// Configuration constants for the AAP API
pub mod api {
    /// Version root every API path lives under
    pub const BASE_PATH: &str = "/api/v2/";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Credentials endpoint
    pub const CREDENTIALS: &str = "credentials";

    /// Number of items previewed per related resource type
    pub const PREVIEW_LIMIT: usize = 5;

    /// TCP connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Whole-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
}

/// Configuration constants for Basic authentication
pub mod auth {
    /// Environment variable holding the AAP base URL
    pub const URL_ENV_VAR: &str = "AAP_URL";

    /// Environment variable holding the username
    pub const USERNAME_ENV_VAR: &str = "AAP_USERNAME";

    /// Environment variable holding the password
    pub const PASSWORD_ENV_VAR: &str = "AAP_PASSWORD";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Placeholder printed for missing or empty values
    pub const MISSING: &str = "N/A";
}

/// Organization fields shown under "Basic Information", in display order
pub const DETAIL_FIELDS: &[&str] = &[
    "id",
    "name",
    "description",
    "created",
    "modified",
    "max_hosts",
    "custom_virtualenv",
    "default_environment",
];
