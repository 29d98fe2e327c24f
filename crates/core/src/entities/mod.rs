//! The dashboard's entities as flat view models.
//!
//! Each module holds the record type along with its search fields, filter,
//! sortable columns, summary statistics and (where the console offers it)
//! CSV layout.

pub mod complaint;
pub mod customer;
pub mod follow_up;
pub mod invoice;
pub mod operator;
pub mod plan;
pub mod technician;
pub mod vendor;

pub use complaint::{Complaint, ComplaintFilter, ComplaintSortKey, ComplaintStats, NewComplaint};
pub use customer::{Customer, CustomerFilter, CustomerSortKey, CustomerStats, CustomerUpdate};
pub use follow_up::{FollowUp, FollowUpFilter, FollowUpSortKey, FollowUpStats};
pub use invoice::{Invoice, InvoiceFilter, InvoiceSortKey, InvoiceStats};
pub use operator::{Operator, OperatorAddress, OperatorFilter, OperatorSortKey, OperatorStats};
pub use plan::{Plan, PlanFilter, PlanSortKey, PlanStats};
pub use technician::{
    DepartmentCount, Technician, TechnicianFilter, TechnicianProfile, TechnicianSortKey,
    TechnicianStats,
};
pub use vendor::{Vendor, VendorFilter, VendorSortKey, VendorStats, VendorUpdate};
