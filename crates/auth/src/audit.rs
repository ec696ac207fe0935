//! Audit seam for authorization decisions.
//!
//! The engine itself stores nothing; callers that want an audit trail hand
//! decisions to an [`AuditSink`]. [`TracingAuditSink`] is the default sink,
//! emitting structured `tracing` events that the surrounding service's
//! subscriber ships wherever its logs go.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::guard::AccessDecision;
use crate::permissions::Permission;
use crate::roles::Role;

/// One authorization decision, ready for an audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRecord {
    pub role: Role,
    pub permission: Permission,
    pub resource: Option<String>,
    pub decision: AccessDecision,
    pub occurred_at: DateTime<Utc>,
}

impl AuditRecord {
    pub fn new(
        role: Role,
        permission: Permission,
        resource: Option<&str>,
        decision: AccessDecision,
    ) -> Self {
        Self {
            role,
            permission,
            resource: resource.map(str::to_owned),
            decision,
            occurred_at: Utc::now(),
        }
    }
}

/// Receives pass/deny decisions for logging.
pub trait AuditSink {
    fn record(&self, record: &AuditRecord);
}

/// Audit sink that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, record: &AuditRecord) {
        match &record.decision {
            AccessDecision::Allow => tracing::debug!(
                role = record.role.name(),
                permission = ?record.permission,
                resource = record.resource.as_deref(),
                "access allowed"
            ),
            AccessDecision::Deny(reason) => tracing::info!(
                role = record.role.name(),
                permission = ?record.permission,
                resource = record.resource.as_deref(),
                reason = ?reason,
                "access denied"
            ),
        }
    }
}
