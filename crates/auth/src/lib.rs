//! `fortimill-auth` — the authorization engine.
//!
//! Pure, in-process RBAC for the FortiMill platform: the role and permission
//! catalogs, the layered-inheritance permission matrix, the role hierarchy,
//! and the mill (tenant) isolation guard. Every business-logic handler
//! consults this crate before performing or exposing an action.
//!
//! This crate is intentionally decoupled from HTTP, storage, and
//! authentication: it decides, for an already-authenticated [`Principal`],
//! whether an action is allowed. All tables are built once and immutable for
//! the process lifetime, so every check is a pure O(1) set lookup.

pub mod audit;
pub mod guard;
pub mod matrix;
pub mod permissions;
pub mod principal;
pub mod roles;

pub use audit::{AuditRecord, AuditSink, TracingAuditSink};
pub use guard::{
    AccessDecision, AccessDenied, DenyReason, can_access_mill, can_access_resource,
    decide_mill_access, decide_permission, decide_resource_access, has_all_permissions,
    has_any_permission, has_permission, require_all_permissions, require_permission,
};
pub use matrix::role_permissions;
pub use permissions::Permission;
pub use principal::{Principal, ResourceDescriptor};
pub use roles::Role;
