//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operations recorded in the audit log
///
/// Records are write-once, so there is no update or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// An entity was stored
    Create,
    /// A report or CSV file was written out
    Export,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Export => write!(f, "EXPORT"),
        }
    }
}

/// Kinds of entities that appear in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    User,
    Report,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::User => write!(f, "User"),
            EntityType::Report => write!(f, "Report"),
        }
    }
}

/// A single audit log line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Id of the affected entity, or the file name for exports
    pub entity_id: String,

    /// User on whose behalf the operation ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// JSON snapshot of the stored entity, or export details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for a newly stored entity
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        user: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            user,
            details: serde_json::to_value(entity).ok(),
        }
    }

    /// Entry for a file written by a report or export
    pub fn export<T: Serialize>(
        file_name: impl Into<String>,
        user: Option<String>,
        details: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Export,
            entity_type: EntityType::Report,
            entity_id: file_name.into(),
            user,
            details: serde_json::to_value(details).ok(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(user) = &self.user {
            output.push_str(&format!(" by {}", user));
        }

        output
    }
}
