/// Configuration constants for the IONOS Cloud API
pub mod api {
    /// Default API endpoint
    pub const DEFAULT_URL: &str = "https://api.ionos.com/cloudapi/v6";

    /// Path of the Cloud API v6 under a host
    pub const BASE_PATH: &str = "/cloudapi/v6";

    /// Default depth for list requests (1 includes properties of items)
    pub const DEFAULT_DEPTH: u32 = 1;

    /// Path segment of asynchronous request resources
    pub const REQUESTS: &str = "requests";

    // Compute and network path segments
    pub const FIREWALL_RULES: &str = "firewallrules";
    pub const FLOW_LOGS: &str = "flowlogs";
    pub const LOADBALANCERS: &str = "loadbalancers";
    pub const NICS: &str = "nics";

    // User management
    pub const UM_GROUPS: &str = "um/groups";
    pub const UM_USERS: &str = "um/users";
    pub const UM_RESOURCES: &str = "um/resources";
    pub const SHARES: &str = "shares";
    pub const USERS: &str = "users";
    pub const RESOURCES: &str = "resources";
    pub const S3KEYS: &str = "s3keys";
}

/// Property values applied when a create command leaves them unset
pub mod create_defaults {
    pub const FIREWALL_RULE_NAME: &str = "Unnamed Rule";
    pub const FIREWALL_RULE_TYPE: &str = "INGRESS";

    pub const FLOW_LOG_NAME: &str = "Unnamed Flow Log";
    pub const FLOW_LOG_ACTION: &str = "ALL";
    pub const FLOW_LOG_DIRECTION: &str = "INGRESS";

    pub const LOADBALANCER_NAME: &str = "Unnamed Load Balancer";
    pub const LOADBALANCER_DHCP: bool = true;

    pub const NIC_NAME: &str = "Unnamed NIC";
    pub const NIC_LAN: i32 = 1;
    pub const NIC_DHCP: bool = true;

    pub const GROUP_NAME: &str = "Unnamed Group";
}

/// Environment variable names
pub mod env {
    /// Bearer token
    pub const TOKEN: &str = "IONOS_TOKEN";

    /// Username for basic authentication
    pub const USERNAME: &str = "IONOS_USERNAME";

    /// Password for basic authentication
    pub const PASSWORD: &str = "IONOS_PASSWORD";

    /// API URL override
    pub const API_URL: &str = "IONOS_API_URL";

    /// Config file path override
    pub const CONFIG_FILE: &str = "IONOS_CONFIG_FILE";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default timeout in seconds for --wait-for-request
    pub const WAIT_TIMEOUT_SECS: u64 = 60;

    /// Interval between request status polls in milliseconds
    pub const POLL_INTERVAL_MS: u64 = 1000;

    /// HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
}

/// Settings file location
pub mod settings {
    /// Directory name under the user's home
    pub const DIR_NAME: &str = ".ionosctl";

    /// Settings file name
    pub const FILE_NAME: &str = "config.json";
}
