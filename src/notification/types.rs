use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::store::schema::{
    ATTR_ADDITIONAL_DATA, ATTR_CATEGORY, ATTR_CREATED_AT, ATTR_ID, ATTR_IS_EMAILED, ATTR_IS_SMS,
    ATTR_SEVERITY, ATTR_STATUS, ATTR_TYPE, ATTR_USER_ID,
};
use crate::store::StoreItem;
use crate::ulid;

/// A notification record as assembled at creation time.
///
/// The identifier, status, severity, delivery flags, and timestamp are
/// all fixed here and never mutated afterwards; retrieval hands back
/// whatever the store holds.
#[derive(Debug, Clone)]
pub struct NotificationRecord {
    /// Time-ordered identifier, assigned exactly once
    pub id: String,
    /// Partition key
    pub user_id: String,
    pub category: String,
    pub notification_type: String,
    pub status: NotificationStatus,
    pub severity: Severity,
    /// Caller-supplied key/value data, serialized to a JSON string
    pub additional_data: String,
    pub is_emailed: bool,
    pub is_sms: bool,
    pub created_at: DateTime<Utc>,
}

/// Read state of a record.
///
/// Every record starts `Unread`. The transition to `Read` belongs to a
/// separate write path that this service does not expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationStatus {
    Unread,
    Read,
}

impl NotificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationStatus::Unread => "UNREAD",
            NotificationStatus::Read => "READ",
        }
    }
}

/// Severity bucket derived from the request's `isCritical` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    NonCritical,
}

impl Severity {
    pub fn from_critical_flag(is_critical: bool) -> Self {
        if is_critical {
            Severity::Critical
        } else {
            Severity::NonCritical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::NonCritical => "NON_CRITICAL",
        }
    }
}

/// Request to create a notification record
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotificationRequest {
    /// Owning user (partition key)
    pub user_id: String,
    /// Free-form grouping label
    pub category: String,
    /// Free-form notification type
    #[serde(rename = "type")]
    pub notification_type: String,
    /// Optional key/value payload; values must be strings or numbers
    #[serde(rename = "additionalData", default)]
    pub additional_data: Option<BTreeMap<String, AdditionalValue>>,
    /// Marks the record CRITICAL instead of NON_CRITICAL
    #[serde(rename = "isCritical", default)]
    pub is_critical: bool,
}

/// A value allowed inside `additionalData`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalValue {
    Text(String),
    Number(Number),
}

/// Response for record creation
#[derive(Debug, Serialize)]
pub struct CreateNotificationResponse {
    /// Always true; failed creations surface as errors instead
    #[serde(rename = "isCreated")]
    pub is_created: bool,
}

/// Response listing a user's records in storage form
#[derive(Debug, Serialize)]
pub struct GetNotificationsResponse {
    pub notifications: Vec<StoreItem>,
}

impl NotificationRecord {
    /// Assemble a fresh record from a create request.
    ///
    /// Creation defaults: a new identifier, `UNREAD` status, severity
    /// from the critical flag, both delivery flags off, `additionalData`
    /// serialized (or `"{}"` when absent), and the current time.
    pub fn from_request(request: CreateNotificationRequest) -> Result<Self, serde_json::Error> {
        let additional_data = match &request.additional_data {
            Some(data) => serde_json::to_string(data)?,
            None => "{}".to_string(),
        };

        Ok(Self {
            id: ulid::generate(),
            user_id: request.user_id,
            category: request.category,
            notification_type: request.notification_type,
            status: NotificationStatus::Unread,
            severity: Severity::from_critical_flag(request.is_critical),
            additional_data,
            is_emailed: false,
            is_sms: false,
            created_at: Utc::now(),
        })
    }

    /// Flatten the record into named fields for the marshaler.
    ///
    /// `createdAt` is RFC 3339 with millisecond precision and a `Z`
    /// suffix.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(ATTR_ID.to_string(), Value::String(self.id.clone()));
        fields.insert(
            ATTR_USER_ID.to_string(),
            Value::String(self.user_id.clone()),
        );
        fields.insert(
            ATTR_CATEGORY.to_string(),
            Value::String(self.category.clone()),
        );
        fields.insert(
            ATTR_TYPE.to_string(),
            Value::String(self.notification_type.clone()),
        );
        fields.insert(
            ATTR_STATUS.to_string(),
            Value::String(self.status.as_str().to_string()),
        );
        fields.insert(
            ATTR_SEVERITY.to_string(),
            Value::String(self.severity.as_str().to_string()),
        );
        fields.insert(
            ATTR_ADDITIONAL_DATA.to_string(),
            Value::String(self.additional_data.clone()),
        );
        fields.insert(ATTR_IS_EMAILED.to_string(), Value::Bool(self.is_emailed));
        fields.insert(ATTR_IS_SMS.to_string(), Value::Bool(self.is_sms));
        fields.insert(
            ATTR_CREATED_AT.to_string(),
            Value::String(self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        fields
    }
}
