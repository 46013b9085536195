//! Shared wire DTOs for the auth and notification collaborators.
//!
//! DESIGN
//! ======
//! Field names and role spellings mirror what the auth provider and the
//! notification backend emit, so serde handles the boundary without any
//! hand-written mapping in pages or components.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Marketplace account role.
///
/// The provider stores the French role names; English spellings are accepted
/// on input so fixtures and alternate backends can use either.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "pharmacien", alias = "pharmacist")]
    Pharmacist,
    #[serde(rename = "fournisseur", alias = "supplier")]
    Supplier,
}

impl Role {
    /// Human-readable label used in cards and banners.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Pharmacist => "Pharmacist",
            Self::Supplier => "Supplier",
        }
    }

    /// Kind of account a user of this role holds.
    #[must_use]
    pub fn account_kind(self) -> &'static str {
        match self {
            Self::Admin => "administrator",
            Self::Pharmacist => "pharmacy",
            Self::Supplier => "supplier",
        }
    }
}

/// Opaque authenticated identity issued by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Response body of the session lookup; `session` is `null` when signed out.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SessionEnvelope {
    #[serde(default)]
    pub session: Option<Session>,
}

/// Account metadata attached to a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub role: Role,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub pharmacy_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub wilaya: Option<String>,
}

impl Profile {
    /// Best display name for headers: business name first, then person.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.pharmacy_name
            .as_deref()
            .or(self.company_name.as_deref())
            .or(self.full_name.as_deref())
    }
}

/// A single notification record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Read flag; the backend column is nullable.
    #[serde(default, alias = "isRead")]
    pub read: Option<bool>,
}

impl Notification {
    /// A missing read flag counts as unread.
    #[must_use]
    pub fn is_unread(&self) -> bool {
        !self.read.unwrap_or(false)
    }
}

/// Response body of the notification list endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NotificationEnvelope {
    #[serde(default)]
    pub notifications: Option<Vec<Notification>>,
}

/// Credentials submitted by the login form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

/// A marketplace member shown in the home-page directory carousel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub image_ref: String,
    pub region: String,
}
