//! The guard layer: the only decision API other components may call.
//!
//! Every function here is pure and synchronous — a lookup against the
//! immutable permission matrix and role hierarchy. Denials are policy
//! decisions, not transient faults: callers surface them (typically as an
//! HTTP 403) and never retry.

use serde::Serialize;
use thiserror::Error;

use fortimill_core::MillId;

use crate::matrix::role_permissions;
use crate::permissions::Permission;
use crate::roles::Role;

/// Typed denial returned by [`require_permission`] / [`require_all_permissions`].
///
/// Carries enough context to render a user-facing 403 message without the
/// caller re-deriving it.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("Access denied: {role} does not have permission to access {resource}")]
pub struct AccessDenied {
    pub role: Role,
    pub permission: Permission,
    pub resource: String,
}

/// Structured reason attached to a deny outcome, for diagnostics and audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// The role's permission set does not contain the requested permission.
    MissingPermission { permission: Permission },
    /// A mill-scoped principal targeted a mill other than its own.
    MillMismatch { target_mill_id: MillId },
    /// The role is not mill-scoped at all; tenant identity never grants it
    /// access (buyers and drivers are authorized via resource ownership).
    NotMillScoped,
    /// The caller ranks below the resource owner in the role hierarchy.
    InsufficientRank { owner_role: Role },
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    Allow,
    Deny(DenyReason),
}

impl AccessDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// Does `role` hold `permission`?
pub fn has_permission(role: Role, permission: Permission) -> bool {
    role_permissions(role).contains(&permission)
}

/// Does `role` hold at least one of `permissions`?
pub fn has_any_permission(role: Role, permissions: &[Permission]) -> bool {
    permissions.iter().any(|&p| has_permission(role, p))
}

/// Does `role` hold every one of `permissions`?
pub fn has_all_permissions(role: Role, permissions: &[Permission]) -> bool {
    permissions.iter().all(|&p| has_permission(role, p))
}

/// May `user_role` act on a resource owned by a principal of
/// `resource_owner_role`?
///
/// Two named rules, kept separate so each stays auditable:
///
/// 1. Regulator override: FWGA roles may always cross into mill-staff data,
///    regardless of relative rank — regulators need unconditional visibility
///    for compliance.
/// 2. Hierarchy rule: otherwise the caller must hold `permission` and rank
///    at or above the owner.
///
/// SystemAdmin is allowed unconditionally.
pub fn can_access_resource(
    user_role: Role,
    resource_owner_role: Role,
    permission: Permission,
) -> bool {
    if user_role == Role::SystemAdmin {
        return true;
    }
    if regulator_override_applies(user_role, resource_owner_role) {
        return true;
    }
    has_permission(user_role, permission) && user_role.is_senior_or_equal(resource_owner_role)
}

fn regulator_override_applies(user_role: Role, resource_owner_role: Role) -> bool {
    user_role.is_regulatory() && resource_owner_role.is_mill_staff()
}

/// May `user_role` touch data belonging to `target_mill_id`?
///
/// SystemAdmin and the FWGA roles bypass tenant isolation. Mill staff need an
/// exact mill match (`None` never matches). Buyers and drivers are not
/// mill-scoped: they are authorized through order/delivery ownership checks
/// elsewhere, never through tenant identity, so they always get `false` here.
pub fn can_access_mill(
    user_role: Role,
    user_mill_id: Option<MillId>,
    target_mill_id: MillId,
) -> bool {
    match user_role {
        Role::SystemAdmin | Role::FwgaInspector | Role::FwgaProgramManager => true,
        Role::MillOperator | Role::MillTechnician | Role::MillManager => {
            user_mill_id == Some(target_mill_id)
        }
        Role::InstitutionalBuyer | Role::DriverLogistics => false,
    }
}

/// [`has_permission`] as a structured decision.
pub fn decide_permission(role: Role, permission: Permission) -> AccessDecision {
    if has_permission(role, permission) {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny(DenyReason::MissingPermission { permission })
    }
}

/// [`can_access_mill`] as a structured decision.
pub fn decide_mill_access(
    user_role: Role,
    user_mill_id: Option<MillId>,
    target_mill_id: MillId,
) -> AccessDecision {
    if can_access_mill(user_role, user_mill_id, target_mill_id) {
        AccessDecision::Allow
    } else if user_role.is_mill_staff() {
        AccessDecision::Deny(DenyReason::MillMismatch { target_mill_id })
    } else {
        AccessDecision::Deny(DenyReason::NotMillScoped)
    }
}

/// [`can_access_resource`] as a structured decision.
pub fn decide_resource_access(
    user_role: Role,
    resource_owner_role: Role,
    permission: Permission,
) -> AccessDecision {
    if can_access_resource(user_role, resource_owner_role, permission) {
        AccessDecision::Allow
    } else if !has_permission(user_role, permission) {
        AccessDecision::Deny(DenyReason::MissingPermission { permission })
    } else {
        AccessDecision::Deny(DenyReason::InsufficientRank {
            owner_role: resource_owner_role,
        })
    }
}

/// Require `permission`, or return a typed [`AccessDenied`].
///
/// `resource` names the thing being protected for the denial message;
/// defaults to `"this resource"`.
pub fn require_permission(
    role: Role,
    permission: Permission,
    resource: Option<&str>,
) -> Result<(), AccessDenied> {
    if has_permission(role, permission) {
        return Ok(());
    }
    let denied = AccessDenied {
        role,
        permission,
        resource: resource.unwrap_or("this resource").to_owned(),
    };
    tracing::debug!(
        role = role.name(),
        permission = ?permission,
        resource = %denied.resource,
        "permission denied"
    );
    Err(denied)
}

/// Require every permission in `permissions`, or return the first missing one
/// as a typed [`AccessDenied`].
pub fn require_all_permissions(
    role: Role,
    permissions: &[Permission],
    resource: Option<&str>,
) -> Result<(), AccessDenied> {
    for &permission in permissions {
        require_permission(role, permission, resource)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn any_and_all_combinators() {
        let wanted = [Permission::BatchView, Permission::BatchDelete];
        assert!(has_any_permission(Role::MillOperator, &wanted));
        assert!(!has_all_permissions(Role::MillOperator, &wanted));
        assert!(has_all_permissions(Role::MillManager, &wanted));
        // Vacuous truth over the empty list.
        assert!(!has_any_permission(Role::MillOperator, &[]));
        assert!(has_all_permissions(Role::MillOperator, &[]));
    }

    #[test]
    fn admin_passes_every_require() {
        for permission in Permission::iter() {
            require_permission(Role::SystemAdmin, permission, None).unwrap();
        }
    }

    #[test]
    fn denial_message_names_role_and_resource() {
        let err =
            require_permission(Role::MillOperator, Permission::BatchDelete, Some("batch"))
                .unwrap_err();
        assert_eq!(err.role, Role::MillOperator);
        assert_eq!(err.permission, Permission::BatchDelete);
        assert_eq!(err.resource, "batch");
        let msg = err.to_string();
        assert!(msg.contains("Mill Operator"));
        assert!(msg.contains("batch"));
        assert_eq!(
            msg,
            "Access denied: Mill Operator does not have permission to access batch"
        );
    }

    #[test]
    fn denial_resource_defaults() {
        let err = require_permission(Role::DriverLogistics, Permission::BatchCreate, None)
            .unwrap_err();
        assert_eq!(err.resource, "this resource");
        assert!(err.to_string().ends_with("this resource"));
    }

    #[test]
    fn require_all_reports_first_missing() {
        let err = require_all_permissions(
            Role::MillTechnician,
            &[Permission::EquipmentCalibrate, Permission::BatchApprove],
            Some("equipment"),
        )
        .unwrap_err();
        assert_eq!(err.permission, Permission::BatchApprove);
    }

    #[test]
    fn regulator_override_crosses_into_mill_data() {
        // Inspector ranks below a mill manager, yet the override applies.
        assert!(can_access_resource(
            Role::FwgaInspector,
            Role::MillManager,
            Permission::ComplianceReportView,
        ));
        assert!(can_access_resource(
            Role::FwgaInspector,
            Role::MillOperator,
            Permission::QcTestView,
        ));
        // The override is scoped to mill-staff-owned resources only.
        assert!(!can_access_resource(
            Role::FwgaInspector,
            Role::InstitutionalBuyer,
            Permission::OrderCreate,
        ));
    }

    #[test]
    fn hierarchy_rule_requires_permission_and_rank() {
        // Manager holds the permission and outranks the operator.
        assert!(can_access_resource(
            Role::MillManager,
            Role::MillOperator,
            Permission::BatchApprove,
        ));
        // Operator holds BatchView but ranks below the manager.
        assert!(!can_access_resource(
            Role::MillOperator,
            Role::MillManager,
            Permission::BatchView,
        ));
        // Rank alone is not enough without the permission.
        assert!(!can_access_resource(
            Role::DriverLogistics,
            Role::MillOperator,
            Permission::BatchDelete,
        ));
    }

    #[test]
    fn mill_isolation_table() {
        let mill_a = MillId::new();
        let mill_b = MillId::new();

        assert!(can_access_mill(Role::SystemAdmin, None, mill_a));
        assert!(can_access_mill(Role::SystemAdmin, Some(mill_b), mill_a));
        assert!(can_access_mill(Role::FwgaInspector, None, mill_a));
        assert!(can_access_mill(Role::FwgaProgramManager, Some(mill_b), mill_a));

        assert!(can_access_mill(Role::MillOperator, Some(mill_a), mill_a));
        assert!(!can_access_mill(Role::MillOperator, Some(mill_a), mill_b));
        assert!(!can_access_mill(Role::MillManager, None, mill_a));

        assert!(!can_access_mill(Role::InstitutionalBuyer, Some(mill_a), mill_a));
        assert!(!can_access_mill(Role::InstitutionalBuyer, None, mill_a));
        assert!(!can_access_mill(Role::DriverLogistics, Some(mill_a), mill_a));
    }

    #[test]
    fn decisions_carry_structured_reasons() {
        let mill_a = MillId::new();
        let mill_b = MillId::new();

        assert!(decide_permission(Role::MillManager, Permission::BatchDelete).is_allow());
        assert_eq!(
            decide_permission(Role::MillOperator, Permission::BatchDelete),
            AccessDecision::Deny(DenyReason::MissingPermission {
                permission: Permission::BatchDelete
            })
        );
        assert_eq!(
            decide_mill_access(Role::MillOperator, Some(mill_a), mill_b),
            AccessDecision::Deny(DenyReason::MillMismatch { target_mill_id: mill_b })
        );
        assert_eq!(
            decide_mill_access(Role::InstitutionalBuyer, None, mill_a),
            AccessDecision::Deny(DenyReason::NotMillScoped)
        );
        assert_eq!(
            decide_resource_access(Role::MillOperator, Role::MillManager, Permission::BatchView),
            AccessDecision::Deny(DenyReason::InsufficientRank {
                owner_role: Role::MillManager
            })
        );
    }

    #[test]
    fn checks_are_idempotent() {
        let first = can_access_resource(Role::MillManager, Role::MillOperator, Permission::BatchView);
        let second =
            can_access_resource(Role::MillManager, Role::MillOperator, Permission::BatchView);
        assert_eq!(first, second);
    }
}
