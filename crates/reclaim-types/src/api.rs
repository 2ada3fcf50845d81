use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ItemStatus, User};

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub matric_no: String,
    pub gmail: String,
    pub password: String,
}

/// Login identifier goes in `matricNo`; a gmail address is accepted there too.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub matric_no: String,
    pub password: String,
}

/// Sanitized user: the full account record minus the password digest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
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

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            matric_no: user.matric_no.clone(),
            gmail: user.gmail.clone(),
            department: user.department.clone(),
            level: user.level.clone(),
            phone_number: user.phone_number.clone(),
            profile_image: user.profile_image.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Partial profile update. Password and the unique identifiers (matricNo,
/// gmail) are deliberately absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub department: Option<String>,
    pub level: Option<String>,
    pub phone_number: Option<String>,
    pub profile_image: Option<String>,
}

// -- Items --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub name: String,
    pub category: String,
    pub status: ItemStatus,
    pub location: String,
    pub date: String,
    pub image: Option<String>,
    pub description: String,
    pub reporter_name: String,
    pub reporter_contact: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<ItemStatus>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveItemRequest {
    pub holder_info: String,
}

// -- Notifications --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    pub user_id: Uuid,
    pub message: String,
}
