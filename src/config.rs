/// Configuration constants for the Aria Automation APIs
pub mod api {
    /// Token refresh endpoint (exchanges a refresh token for an access token)
    pub const IAAS_LOGIN: &str = "/iaas/api/login";

    /// Credential login endpoint, basic path (no identity domain)
    pub const CSP_LOGIN_BASIC: &str = "/csp/gateway/am/api/login";

    /// Credential login endpoint, enhanced path (identity domain login)
    pub const CSP_LOGIN_ENHANCED: &str = "/csp/gateway/am/idp/auth/login";

    /// Cheap authenticated read used to test whether an access token is still valid
    pub const TOKEN_PROBE: &str = "/pipeline/api/user-preferences";

    /// Service catalog items endpoint
    pub const CATALOG_ITEMS: &str = "/catalog/api/items";

    /// IaaS cloud accounts endpoint
    pub const CLOUD_ACCOUNTS: &str = "/iaas/api/cloud-accounts";

    /// Cloud template (blueprint) endpoint
    pub const CLOUD_TEMPLATES: &str = "/blueprint/api/blueprints";

    /// IaaS projects endpoint
    pub const PROJECTS: &str = "/iaas/api/projects";

    /// Pipeline service endpoints
    pub const PIPELINES: &str = "/pipeline/api/pipelines";
    pub const PIPELINE_IMPORT: &str = "/pipeline/api/import";
    pub const EXECUTIONS: &str = "/pipeline/api/executions";
    pub const VARIABLES: &str = "/pipeline/api/variables";
    pub const ENDPOINTS: &str = "/pipeline/api/endpoints";

    /// Orchestrator inventory endpoints
    pub const VCO_WORKFLOWS: &str = "/vco/api/workflows";
    pub const VCO_ACTIONS: &str = "/vco/api/actions";
    pub const VCO_CATEGORIES: &str = "/vco/api/categories";
    pub const VCO_PACKAGES: &str = "/vco/api/packages";

    /// Default page size for list requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Maximum number of page requests in flight at once
    pub const MAX_CONCURRENT_PAGE_REQUESTS: usize = 10;
}

/// Environment variable names for target resolution (VRA_ prefix convention)
pub mod env {
    /// When set, the target is built from the environment and the config file is ignored
    pub const SERVER: &str = "VRA_SERVER";
    pub const DOMAIN: &str = "VRA_DOMAIN";
    pub const USERNAME: &str = "VRA_USERNAME";
    pub const PASSWORD: &str = "VRA_PASSWORD";
    pub const API_TOKEN: &str = "VRA_APITOKEN";
    pub const ACCESS_TOKEN: &str = "VRA_ACCESSTOKEN";
}

/// Default values for CLI
pub mod defaults {
    /// The fixed cloud-hosted multi-tenant endpoint. It has no local
    /// credential login, so a failed token refresh against it is terminal.
    pub const CLOUD_HOST: &str = "api.mgmt.cloud.vmware.com";

    /// Configuration file name (relative to HOME)
    pub const CONFIG_FILE_NAME: &str = ".vractl.yaml";

    /// Target profile used when none is selected
    pub const TARGET_NAME: &str = "default";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
