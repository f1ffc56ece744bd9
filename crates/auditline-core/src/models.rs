use serde::{Deserialize, Serialize};

/// Read-only projection of a user as supplied by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserRef {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }
}

/// Any record carrying audit metadata. The `legacy_*` fields hold the
/// same users under the names used before the backend renamed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditableRecord {
    pub creator_user: Option<UserRef>,
    pub legacy_creator_user: Option<UserRef>,
    pub updater_user: Option<UserRef>,
    pub legacy_updater_user: Option<UserRef>,
    pub deleter_user: Option<UserRef>,
    pub legacy_deleter_user: Option<UserRef>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditRole {
    Creator,
    Updater,
    Deleter,
}

impl AuditRole {
    /// Display order.
    pub const ALL: [AuditRole; 3] = [AuditRole::Creator, AuditRole::Updater, AuditRole::Deleter];

    pub fn label(self) -> &'static str {
        match self {
            AuditRole::Creator => "Created by",
            AuditRole::Updater => "Updated by",
            AuditRole::Deleter => "Deleted by",
        }
    }

    pub fn is_deletion(self) -> bool {
        matches!(self, AuditRole::Deleter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_reads_backend_field_names() {
        let record: AuditableRecord = serde_json::from_value(serde_json::json!({
            "id": 42,
            "creatorUser": { "username": "alice", "firstName": "Alice", "lastName": "Doe" },
            "legacyUpdaterUser": { "username": "bob" },
            "createdAt": "2024-03-05T14:07:00Z",
            "deletedAt": null
        }))
        .expect("record");

        let creator = record.creator_user.as_ref().expect("creator");
        assert_eq!(creator.username.as_deref(), Some("alice"));
        assert_eq!(creator.last_name.as_deref(), Some("Doe"));
        assert!(record.updater_user.is_none());
        assert_eq!(
            record
                .legacy_updater_user
                .as_ref()
                .and_then(|user| user.username.as_deref()),
            Some("bob")
        );
        assert_eq!(record.created_at.as_deref(), Some("2024-03-05T14:07:00Z"));
        assert!(record.deleted_at.is_none());
    }

    #[test]
    fn roles_are_listed_in_display_order() {
        let labels: Vec<_> = AuditRole::ALL.iter().map(|role| role.label()).collect();
        assert_eq!(labels, ["Created by", "Updated by", "Deleted by"]);
        assert!(AuditRole::Deleter.is_deletion());
        assert!(!AuditRole::Updater.is_deletion());
    }
}
