//! The role → permission-set matrix.
//!
//! Built once on first use and read-only thereafter; concurrent readers need
//! no locking because there are no writers after initialization.
//!
//! The mill operational chain (operator → technician → manager) and the FWGA
//! chain (inspector → program manager) are constructed as unions: each tier is
//! its predecessor's set plus an explicit addition list. That makes the
//! monotonic-inheritance invariant true by construction instead of something
//! a reviewer has to re-verify against two hand-maintained lists.

use std::collections::HashSet;
use std::sync::LazyLock;

use strum::IntoEnumIterator;

use crate::permissions::Permission;
use crate::permissions::Permission::*;
use crate::roles::Role;

/// Base set for the least-privileged mill role.
const OPERATOR_BASE: &[Permission] = &[
    BatchView,
    BatchCreate,
    BatchUpdate,
    QcTestView,
    QcTestRecord,
    QcSampleRegister,
    EquipmentView,
    MaintenanceTaskView,
    TrainingCourseView,
    TrainingCourseEnroll,
    TrainingRecordView,
    AlertView,
    AlertAcknowledge,
    ActionItemView,
    ActionItemComplete,
    SensorView,
    SupportTicketView,
    SupportTicketCreate,
    TrackingView,
];

/// Granted to technicians on top of everything an operator holds.
const TECHNICIAN_ADDITIONS: &[Permission] = &[
    QcTestUpdate,
    QcResultExport,
    EquipmentUpdate,
    EquipmentCalibrate,
    MaintenanceTaskCreate,
    MaintenanceTaskComplete,
    SensorRegister,
    SensorCalibrate,
    SensorThresholdConfigure,
    SensorDataExport,
    AlertResolve,
    ActionItemCreate,
];

/// Granted to managers on top of everything a technician holds.
const MANAGER_ADDITIONS: &[Permission] = &[
    BatchDelete,
    BatchApprove,
    BatchExport,
    QcTestApprove,
    ComplianceReportView,
    ComplianceReportCreate,
    ComplianceReportSubmit,
    EquipmentRegister,
    TrainingCourseAssign,
    AlertCreate,
    AlertConfigure,
    ActionItemAssign,
    ActionItemClose,
    OrderView,
    OrderUpdate,
    RfpView,
    RfpRespond,
    DeliveryView,
    AnalyticsView,
    AnalyticsDashboardView,
    AnalyticsReportGenerate,
    AnalyticsReportExport,
    AnalyticsTrendView,
    UserView,
    UserCreate,
    UserUpdate,
    UserRoleAssign,
    MillView,
    MillUpdate,
    SupportTicketRespond,
    SupportTicketClose,
];

/// Base set for the FWGA field inspector.
const INSPECTOR_BASE: &[Permission] = &[
    BatchView,
    BatchExport,
    QcTestView,
    QcResultExport,
    ComplianceReportView,
    ComplianceAuditConduct,
    ComplianceViolationFlag,
    EquipmentView,
    TrainingRecordView,
    AlertView,
    ActionItemView,
    ActionItemCreate,
    SensorView,
    SensorDataExport,
    AnalyticsView,
    AnalyticsTrendView,
    MillView,
    TrackingView,
];

/// Granted to FWGA program managers on top of everything an inspector holds.
const PROGRAM_MANAGER_ADDITIONS: &[Permission] = &[
    ComplianceReportCreate,
    ComplianceReportSubmit,
    ComplianceAuditSchedule,
    ComplianceCertificateIssue,
    TrainingCourseView,
    TrainingCourseCreate,
    TrainingCourseAssign,
    TrainingCertificateIssue,
    ActionItemAssign,
    ActionItemClose,
    AlertCreate,
    AlertConfigure,
    AnalyticsDashboardView,
    AnalyticsReportGenerate,
    AnalyticsReportExport,
    UserView,
    MillCreate,
    MillUpdate,
];

/// Buyers are scoped by order/RFP ownership, not mill membership; their set
/// is authored independently of the mill chain.
const BUYER_SET: &[Permission] = &[
    OrderView,
    OrderCreate,
    OrderUpdate,
    OrderApprove,
    OrderCancel,
    RfpView,
    RfpCreate,
    RfpAward,
    DeliveryView,
    TrackingView,
    ShipmentLocate,
    PodView,
    QcTestView,
    ComplianceReportView,
    AnalyticsView,
    AnalyticsDashboardView,
    SupportTicketView,
    SupportTicketCreate,
];

/// Drivers are scoped by delivery/trip assignment; authored independently.
const DRIVER_SET: &[Permission] = &[
    OrderView,
    DeliveryView,
    DeliveryUpdate,
    RouteView,
    RoutePlan,
    TripView,
    TripStart,
    TripComplete,
    PodView,
    PodCapture,
    TrackingView,
    TrackingUpdate,
    ShipmentLocate,
    AlertView,
    SupportTicketView,
    SupportTicketCreate,
];

fn extend(base: &HashSet<Permission>, additions: &[Permission]) -> HashSet<Permission> {
    base.iter().copied().chain(additions.iter().copied()).collect()
}

static MILL_OPERATOR: LazyLock<HashSet<Permission>> =
    LazyLock::new(|| OPERATOR_BASE.iter().copied().collect());

static MILL_TECHNICIAN: LazyLock<HashSet<Permission>> =
    LazyLock::new(|| extend(&MILL_OPERATOR, TECHNICIAN_ADDITIONS));

static MILL_MANAGER: LazyLock<HashSet<Permission>> =
    LazyLock::new(|| extend(&MILL_TECHNICIAN, MANAGER_ADDITIONS));

static FWGA_INSPECTOR: LazyLock<HashSet<Permission>> =
    LazyLock::new(|| INSPECTOR_BASE.iter().copied().collect());

static FWGA_PROGRAM_MANAGER: LazyLock<HashSet<Permission>> =
    LazyLock::new(|| extend(&FWGA_INSPECTOR, PROGRAM_MANAGER_ADDITIONS));

static INSTITUTIONAL_BUYER: LazyLock<HashSet<Permission>> =
    LazyLock::new(|| BUYER_SET.iter().copied().collect());

static DRIVER_LOGISTICS: LazyLock<HashSet<Permission>> =
    LazyLock::new(|| DRIVER_SET.iter().copied().collect());

// The admin set is derived from the catalog itself, never from the union
// chain: a permission added to the enum is granted here with no further edit.
static SYSTEM_ADMIN: LazyLock<HashSet<Permission>> =
    LazyLock::new(|| Permission::iter().collect());

/// Look up the permission set for a role.
///
/// Total over the closed [`Role`] enum; a missing arm is a compile error.
pub fn role_permissions(role: Role) -> &'static HashSet<Permission> {
    match role {
        Role::MillOperator => &MILL_OPERATOR,
        Role::MillTechnician => &MILL_TECHNICIAN,
        Role::MillManager => &MILL_MANAGER,
        Role::FwgaInspector => &FWGA_INSPECTOR,
        Role::FwgaProgramManager => &FWGA_PROGRAM_MANAGER,
        Role::InstitutionalBuyer => &INSTITUTIONAL_BUYER,
        Role::DriverLogistics => &DRIVER_LOGISTICS,
        Role::SystemAdmin => &SYSTEM_ADMIN,
    }
}
