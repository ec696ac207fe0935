//! Principals and resource descriptors.

use serde::{Deserialize, Serialize};

use fortimill_core::{BuyerId, MillId};

use crate::guard;
use crate::permissions::Permission;
use crate::roles::Role;

/// The authenticated caller.
///
/// Constructed by the authentication layer and trusted as-is; this crate
/// performs no authentication of its own. Immutable for the lifetime of one
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub role: Role,
    /// Set for mill-staff principals; the tenant-isolation boundary.
    pub mill_id: Option<MillId>,
    /// Set for institutional-buyer principals.
    pub buyer_id: Option<BuyerId>,
}

impl Principal {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            mill_id: None,
            buyer_id: None,
        }
    }

    pub fn mill_staff(role: Role, mill_id: MillId) -> Self {
        Self {
            role,
            mill_id: Some(mill_id),
            buyer_id: None,
        }
    }

    pub fn buyer(buyer_id: BuyerId) -> Self {
        Self {
            role: Role::InstitutionalBuyer,
            mill_id: None,
            buyer_id: Some(buyer_id),
        }
    }

    /// Does this principal's role hold `permission`?
    pub fn can(&self, permission: Permission) -> bool {
        guard::has_permission(self.role, permission)
    }

    /// May this principal touch data belonging to `target_mill_id`?
    pub fn can_access_mill(&self, target_mill_id: MillId) -> bool {
        guard::can_access_mill(self.role, self.mill_id, target_mill_id)
    }

    /// May this principal act on `resource` with `permission`?
    ///
    /// Combines the cross-role resource check with tenant isolation when the
    /// resource belongs to a mill. The tenant dimension only applies to
    /// mill-staff callers; buyers and drivers are authorized through
    /// resource-ownership checks their handlers perform.
    pub fn can_access(&self, resource: &ResourceDescriptor, permission: Permission) -> bool {
        if !guard::can_access_resource(self.role, resource.owner_role, permission) {
            return false;
        }
        match resource.owner_mill_id {
            Some(mill_id) if self.role.is_mill_staff() => self.can_access_mill(mill_id),
            _ => true,
        }
    }
}

/// Describes the entity being accessed.
///
/// Supplied per call by the business-logic handler; never persisted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Role of the principal that owns the entity.
    pub owner_role: Role,
    /// Mill the entity belongs to, when it is mill-scoped.
    pub owner_mill_id: Option<MillId>,
}

impl ResourceDescriptor {
    pub fn owned_by(owner_role: Role) -> Self {
        Self {
            owner_role,
            owner_mill_id: None,
        }
    }

    pub fn mill_scoped(owner_role: Role, owner_mill_id: MillId) -> Self {
        Self {
            owner_role,
            owner_mill_id: Some(owner_mill_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_convenience_matches_guard() {
        let mill = MillId::new();
        let operator = Principal::mill_staff(Role::MillOperator, mill);
        assert!(operator.can(Permission::BatchCreate));
        assert!(!operator.can(Permission::BatchDelete));
        assert!(operator.can_access_mill(mill));
        assert!(!operator.can_access_mill(MillId::new()));
    }

    #[test]
    fn mill_staff_cannot_reach_other_mills_resources() {
        let mill_a = MillId::new();
        let mill_b = MillId::new();
        let manager = Principal::mill_staff(Role::MillManager, mill_a);
        let own = ResourceDescriptor::mill_scoped(Role::MillOperator, mill_a);
        let foreign = ResourceDescriptor::mill_scoped(Role::MillOperator, mill_b);

        assert!(manager.can_access(&own, Permission::BatchApprove));
        assert!(!manager.can_access(&foreign, Permission::BatchApprove));
    }

    #[test]
    fn inspector_reaches_any_mill() {
        let inspector = Principal::new(Role::FwgaInspector);
        let resource = ResourceDescriptor::mill_scoped(Role::MillManager, MillId::new());
        assert!(inspector.can_access(&resource, Permission::ComplianceReportView));
    }

    #[test]
    fn buyer_is_checked_on_role_and_permission_not_tenant() {
        let buyer = Principal::buyer(BuyerId::new());
        // A buyer-owned order: same rank, permission held.
        let order = ResourceDescriptor::owned_by(Role::InstitutionalBuyer);
        assert!(buyer.can_access(&order, Permission::OrderView));
        // A mill-scoped batch: the hierarchy rule denies (buyer lacks the
        // permission), tenant identity never comes into it.
        let batch = ResourceDescriptor::mill_scoped(Role::MillManager, MillId::new());
        assert!(!buyer.can_access(&batch, Permission::BatchUpdate));
    }
}
