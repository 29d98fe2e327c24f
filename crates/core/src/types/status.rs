//! Status, type and role enums for the ISP entities.
//!
//! Every enum here has a canonical lowercase wire spelling (used for JSON,
//! CSV and query parameters) and a forgiving parser: the backend is not
//! consistent about `in_progress` vs `In Progress` vs `in-progress`, so
//! parsing ignores case and treats `_`, `-` and spaces alike.

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name any variant of a status enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value:?}")]
pub struct ParseStatusError {
    /// Which enum was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Normalise a status spelling for comparison.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Define a string-backed enum with canonical spellings.
///
/// Generates `as_str()`, `ALL`, `Display`, a lenient `FromStr`, and serde
/// impls using the canonical spelling.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical spelling.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ParseStatusError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize(v.as_str()) == wanted)
                    .ok_or_else(|| ParseStatusError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

string_enum! {
    /// Customer connection status.
    #[derive(Default)]
    pub enum ConnectionStatus: "connection status" {
        Active => "active",
        Inactive => "inactive",
        Suspended => "suspended",
        #[default]
        Pending => "pending",
    }
}

string_enum! {
    /// Operator account status.
    #[derive(Default)]
    pub enum OperatorStatus: "operator status" {
        Active => "active",
        Suspended => "suspended",
        Expired => "expired",
        #[default]
        Inactive => "inactive",
    }
}

string_enum! {
    /// Technician employment status.
    #[derive(Default)]
    pub enum TechnicianStatus: "technician status" {
        #[default]
        Active => "active",
        Inactive => "inactive",
        OnLeave => "on-leave",
    }
}

string_enum! {
    /// Vendor onboarding status.
    #[derive(Default)]
    pub enum VendorStatus: "vendor status" {
        Active => "active",
        #[default]
        Pending => "pending",
        Suspended => "suspended",
        Rejected => "rejected",
    }
}

string_enum! {
    /// Invoice payment status.
    #[derive(Default)]
    pub enum InvoiceStatus: "invoice status" {
        Paid => "paid",
        #[default]
        Pending => "pending",
        Overdue => "overdue",
    }
}

string_enum! {
    /// Complaint ticket status.
    ///
    /// A flat field: any status may be overwritten with any other.
    #[derive(Default)]
    pub enum ComplaintStatus: "complaint status" {
        #[default]
        Open => "open",
        InProgress => "in-progress",
        Resolved => "resolved",
        Closed => "closed",
        Cancelled => "cancelled",
        ByMistake => "by mistake",
    }
}

impl ComplaintStatus {
    /// Whether the ticket no longer needs work. Display only; it does not
    /// restrict further status changes.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(
            self,
            Self::Resolved | Self::Closed | Self::Cancelled | Self::ByMistake
        )
    }
}

string_enum! {
    /// Follow-up task status.
    #[derive(Default)]
    pub enum FollowUpStatus: "follow-up status" {
        #[default]
        Pending => "pending",
        InProgress => "in-progress",
        Completed => "completed",
        Overdue => "overdue",
    }
}

impl FollowUpStatus {
    /// Whether the task is done.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

string_enum! {
    /// Subscription plan type.
    #[derive(Default)]
    pub enum PlanType: "plan type" {
        #[default]
        Residential => "residential",
        Business => "business",
        Promotional => "promotional",
        Custom => "custom",
    }
}

string_enum! {
    /// Ticket and task priority, ordered from least to most pressing.
    #[derive(Default)]
    pub enum Priority: "priority" {
        Low => "low",
        #[default]
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
}

string_enum! {
    /// Console user role. No default: unknown roles are rejected.
    pub enum Role: "role" {
        Admin => "admin",
        Operator => "operator",
        Technician => "technician",
        Customer => "customer",
        Staff => "staff",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!(
            "In Progress".parse::<ComplaintStatus>().unwrap(),
            ComplaintStatus::InProgress
        );
        assert_eq!(
            "in_progress".parse::<FollowUpStatus>().unwrap(),
            FollowUpStatus::InProgress
        );
        assert_eq!(
            "by_mistake".parse::<ComplaintStatus>().unwrap(),
            ComplaintStatus::ByMistake
        );
        assert_eq!(
            " ACTIVE ".parse::<ConnectionStatus>().unwrap(),
            ConnectionStatus::Active
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "archived".parse::<InvoiceStatus>().unwrap_err();
        assert_eq!(err.kind, "invoice status");
        assert_eq!(err.to_string(), "invalid invoice status: \"archived\"");
    }

    #[test]
    fn test_display_uses_canonical_spelling() {
        assert_eq!(ComplaintStatus::ByMistake.to_string(), "by mistake");
        assert_eq!(TechnicianStatus::OnLeave.to_string(), "on-leave");
        assert_eq!(Role::Staff.to_string(), "staff");
    }

    #[test]
    fn test_serde_uses_canonical_spelling() {
        let json = serde_json::to_string(&ComplaintStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let parsed: ComplaintStatus = serde_json::from_str("\"by mistake\"").unwrap();
        assert_eq!(parsed, ComplaintStatus::ByMistake);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::High < Priority::Urgent);
    }

    #[test]
    fn test_complaint_is_closed() {
        assert!(!ComplaintStatus::Open.is_closed());
        assert!(!ComplaintStatus::InProgress.is_closed());
        assert!(ComplaintStatus::Resolved.is_closed());
        assert!(ComplaintStatus::ByMistake.is_closed());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ComplaintStatus::default(), ComplaintStatus::Open);
        assert_eq!(OperatorStatus::default(), OperatorStatus::Inactive);
        assert_eq!(Priority::default(), Priority::Medium);
    }
}
