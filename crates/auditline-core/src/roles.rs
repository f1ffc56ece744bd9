use crate::models::{AuditRole, AuditableRecord, UserRef};

/// Picks the user for a role. The primary record wins as a whole; fields
/// are never merged from the legacy record.
pub fn resolve_user<'a>(
    primary: Option<&'a UserRef>,
    legacy: Option<&'a UserRef>,
) -> Option<&'a UserRef> {
    primary.or(legacy)
}

impl AuditableRecord {
    pub fn user_for(&self, role: AuditRole) -> Option<&UserRef> {
        let (primary, legacy) = match role {
            AuditRole::Creator => (&self.creator_user, &self.legacy_creator_user),
            AuditRole::Updater => (&self.updater_user, &self.legacy_updater_user),
            AuditRole::Deleter => (&self.deleter_user, &self.legacy_deleter_user),
        };
        resolve_user(primary.as_ref(), legacy.as_ref())
    }

    pub fn timestamp_for(&self, role: AuditRole) -> Option<&str> {
        let value = match role {
            AuditRole::Creator => &self.created_at,
            AuditRole::Updater => &self.updated_at,
            AuditRole::Deleter => &self.deleted_at,
        };
        value.as_deref().filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleEntry<'a> {
    pub role: AuditRole,
    pub user: &'a UserRef,
    pub timestamp: Option<&'a str>,
}

/// The roles of a record that resolved to a user, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAudit<'a> {
    entries: Vec<RoleEntry<'a>>,
}

impl<'a> ResolvedAudit<'a> {
    pub fn from_record(record: &'a AuditableRecord) -> Self {
        let entries = AuditRole::ALL
            .into_iter()
            .filter_map(|role| {
                record.user_for(role).map(|user| RoleEntry {
                    role,
                    user,
                    timestamp: record.timestamp_for(role),
                })
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[RoleEntry<'a>] {
        &self.entries
    }

    pub fn entry(&self, role: AuditRole) -> Option<&RoleEntry<'a>> {
        self.entries.iter().find(|entry| entry.role == role)
    }

    /// Entries to display; the deleter only when `show_deleted` is set.
    pub fn visible(&self, show_deleted: bool) -> impl Iterator<Item = &RoleEntry<'a>> + '_ {
        self.entries
            .iter()
            .filter(move |entry| show_deleted || !entry.role.is_deletion())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
