//! Stable identifiers shared by the parsers, the engine, and the report.

// Schemas
pub const SCHEMA_CONFIG_V1: &str = "inicheck.config.v1";

// Restricted mode
pub const DEFAULT_RESTRICTED_MODE_KEY: &str = "safe_mode";

// Rule file
pub const CONTAINER_ELEMENT: &str = "configuration";
pub const ATTR_MESSAGE: &str = "MESSAGE";
pub const ATTR_VALUE: &str = "VALUE";
pub const ATTR_LEVEL: &str = "LEVEL";
pub const ATTR_IF_SAFE_MODE: &str = "IFSAFEMODE";

// Expected-value sentinels
pub const EXPECT_NON_BLANK: &str = "non-blank";
pub const EXPECT_TRUE: &str = "true";
pub const EXPECT_FALSE: &str = "false";

// Message template placeholders
pub const PLACEHOLDER_NAME: &str = "$name$";
pub const PLACEHOLDER_VALUE: &str = "$value$";
