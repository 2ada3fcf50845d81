use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account. The `password` field holds the Argon2 digest and is
/// never serialized; wire responses go through [`crate::api::UserProfile`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub password: String,
    pub full_name: String,
    pub matric_no: String,
    pub gmail: String,
    pub department: Option<String>,
    pub level: Option<String>,
    pub phone_number: Option<String>,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Lost,
    Found,
    Claimed,
}

/// A lost/found report. Reporter name and contact are a snapshot taken at
/// creation time, independent of the live account record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub status: ItemStatus,
    pub location: String,
    /// Free-text date as entered by the reporter ("May 15, 2025").
    pub date: String,
    pub image: Option<String>,
    pub description: String,
    pub reporter_name: String,
    pub reporter_contact: String,
    pub reporter_id: Option<Uuid>,
    pub claimed_at: Option<DateTime<Utc>>,
    pub holder_info: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An inbox message, polled by the recipient.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub date: DateTime<Utc>,
    /// String-encoded boolean ("false"/"true"), kept from the original wire
    /// format the front end expects.
    pub read: String,
    /// Insertion sequence, used to keep a stable order among notifications
    /// that share a timestamp.
    #[serde(skip)]
    pub seq: u64,
}
