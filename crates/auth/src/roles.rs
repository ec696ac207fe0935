//! The role catalog and role hierarchy.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Principal role used for RBAC decisions.
///
/// The enum is closed: every principal carries exactly one of these values,
/// assigned by the authentication layer. There is no "unknown role" runtime
/// path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Line operator at a fortification mill.
    MillOperator,
    /// Mill technician responsible for equipment and sensor upkeep.
    MillTechnician,
    /// Mill manager with staff, procurement, and reporting authority.
    MillManager,
    /// FWGA field inspector with cross-mill read access.
    FwgaInspector,
    /// FWGA program manager overseeing the fortification program.
    FwgaProgramManager,
    /// Institutional buyer procuring fortified product.
    InstitutionalBuyer,
    /// Driver / logistics operator executing deliveries.
    DriverLogistics,
    /// Platform administrator with the full permission catalog.
    SystemAdmin,
}

impl Role {
    /// Human-readable role label, used in denial messages and UIs.
    pub fn name(&self) -> &'static str {
        match self {
            Role::MillOperator => "Mill Operator",
            Role::MillTechnician => "Mill Technician",
            Role::MillManager => "Mill Manager",
            Role::FwgaInspector => "FWGA Inspector",
            Role::FwgaProgramManager => "FWGA Program Manager",
            Role::InstitutionalBuyer => "Institutional Buyer",
            Role::DriverLogistics => "Driver",
            Role::SystemAdmin => "System Administrator",
        }
    }

    /// One-line role description for UI consumption.
    pub fn description(&self) -> &'static str {
        match self {
            Role::MillOperator => {
                "Records fortification batches and QC samples on the production line"
            }
            Role::MillTechnician => {
                "Maintains and calibrates mill equipment and premix dosing sensors"
            }
            Role::MillManager => {
                "Manages mill staff, approvals, procurement and compliance reporting"
            }
            Role::FwgaInspector => {
                "Conducts regulatory audits and inspections across mills"
            }
            Role::FwgaProgramManager => {
                "Oversees the national fortification program, certification and training"
            }
            Role::InstitutionalBuyer => {
                "Procures fortified product through RFPs and purchase orders"
            }
            Role::DriverLogistics => {
                "Executes delivery trips and captures proof of delivery"
            }
            Role::SystemAdmin => "Administers the platform with unrestricted access",
        }
    }

    /// Seniority rank used for escalation comparisons.
    ///
    /// Defined independently of permission content: two roles at the same
    /// rank can hold incomparable permission sets. Ties are reserved for
    /// lateral peers (MillManager and DriverLogistics).
    pub fn rank(&self) -> u8 {
        match self {
            Role::MillOperator => 1,
            Role::InstitutionalBuyer => 2,
            Role::MillTechnician => 3,
            Role::FwgaInspector => 4,
            Role::MillManager => 5,
            Role::DriverLogistics => 5,
            Role::FwgaProgramManager => 6,
            Role::SystemAdmin => 7,
        }
    }

    /// `true` when `self` ranks at or above `other` in the hierarchy.
    pub fn is_senior_or_equal(&self, other: Role) -> bool {
        self.rank() >= other.rank()
    }

    /// Mill-staff roles are the ones scoped to a single mill (tenant).
    pub fn is_mill_staff(&self) -> bool {
        matches!(
            self,
            Role::MillOperator | Role::MillTechnician | Role::MillManager
        )
    }

    /// FWGA regulatory roles carry unconditional cross-mill visibility.
    pub fn is_regulatory(&self) -> bool {
        matches!(self, Role::FwgaInspector | Role::FwgaProgramManager)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
