//! Notification table layout.
//!
//! One table holds every notification record:
//!
//! - Partition key: `user_id` (S)
//! - Sort key: `id` (S), a time-ordered identifier
//!
//! All remaining attributes are flat S/N/BOOL values produced by the
//! attribute marshaler; composite payloads (`additionalData`) are stored
//! as a pre-serialized JSON string.

/// Logical table name; the physical name comes from configuration
pub const TABLE_NAME: &str = "notifications";

/// Partition key: owning user
pub const ATTR_USER_ID: &str = "user_id";
/// Sort key: record identifier
pub const ATTR_ID: &str = "id";
pub const ATTR_CATEGORY: &str = "category";
pub const ATTR_TYPE: &str = "type";
pub const ATTR_STATUS: &str = "status";
pub const ATTR_SEVERITY: &str = "severity";
pub const ATTR_ADDITIONAL_DATA: &str = "additionalData";
pub const ATTR_IS_EMAILED: &str = "isEmailed";
pub const ATTR_IS_SMS: &str = "isSMS";
pub const ATTR_CREATED_AT: &str = "createdAt";
