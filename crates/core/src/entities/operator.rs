//! Operators: reseller ISPs onboarded onto the platform.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::export::CsvRecord;
use crate::listing::sort::cmp_text;
use crate::listing::stats::percentage;
use crate::listing::{Facet, RecordFilter, SearchQuery, Searchable, SortKey};
use crate::{Email, OperatorId, OperatorStatus};

/// Where an operator runs its network.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OperatorAddress {
    pub state: String,
    pub district: String,
    pub area: String,
}

/// A reseller business and its service footprint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    /// The operator's user id.
    #[serde(rename = "user_id")]
    pub id: OperatorId,
    pub company_name: String,
    pub owner_name: String,
    pub phone: String,
    pub email: Option<Email>,
    pub address: OperatorAddress,
    pub plan_assigned: String,
    pub revenue: Decimal,
    pub customer_count: u32,
    pub service_capacity: u32,
    pub status: OperatorStatus,
    /// Permission names granted to the operator's login.
    pub permissions: Vec<String>,
}

impl Operator {
    /// Share of capacity in use, in percent.
    #[must_use]
    pub fn utilization(&self) -> Decimal {
        percentage(
            Decimal::from(self.customer_count),
            Decimal::from(self.service_capacity),
        )
    }
}

impl Searchable for Operator {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.company_name.as_str(),
            self.owner_name.as_str(),
            self.email.as_ref().map_or("", Email::as_str),
            self.phone.as_str(),
            self.address.state.as_str(),
            self.address.district.as_str(),
            self.address.area.as_str(),
        ]
    }
}

/// Operator list filter.
#[derive(Debug, Clone, Default)]
pub struct OperatorFilter {
    pub search: SearchQuery,
    pub status: Facet<OperatorStatus>,
    pub state: Facet<String>,
    pub plan: Facet<String>,
}

impl RecordFilter<Operator> for OperatorFilter {
    fn matches(&self, o: &Operator) -> bool {
        self.search.matches(o)
            && self.status.matches(&o.status)
            && self.state.matches_text(&o.address.state)
            && self.plan.matches_text(&o.plan_assigned)
    }
}

/// Operator list columns that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorSortKey {
    #[default]
    Company,
    Owner,
    State,
    Revenue,
    Customers,
    Utilization,
    Status,
}

impl OperatorSortKey {
    /// Parse a sort key from a URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "company" | "company_name" | "companyname" => Some(Self::Company),
            "owner" | "owner_name" | "ownername" => Some(Self::Owner),
            "state" => Some(Self::State),
            "revenue" => Some(Self::Revenue),
            "customers" | "customer_count" | "customercount" => Some(Self::Customers),
            "utilization" | "capacity" => Some(Self::Utilization),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}

impl SortKey<Operator> for OperatorSortKey {
    fn compare(self, a: &Operator, b: &Operator) -> Ordering {
        match self {
            Self::Company => cmp_text(&a.company_name, &b.company_name),
            Self::Owner => cmp_text(&a.owner_name, &b.owner_name),
            Self::State => cmp_text(&a.address.state, &b.address.state),
            Self::Revenue => a.revenue.cmp(&b.revenue),
            Self::Customers => a.customer_count.cmp(&b.customer_count),
            Self::Utilization => a.utilization().cmp(&b.utilization()),
            Self::Status => a.status.cmp(&b.status),
        }
    }
}

/// Operator summary cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorStats {
    pub total: usize,
    pub active: usize,
    pub suspended: usize,
    pub expired: usize,
    pub inactive: usize,
    pub total_revenue: Decimal,
    pub total_customers: u64,
    pub total_capacity: u64,
    /// Customers over capacity across all operators, in percent.
    pub capacity_utilization: Decimal,
}

impl OperatorStats {
    /// Aggregate over any set of operators.
    pub fn from_records<'a>(operators: impl IntoIterator<Item = &'a Operator>) -> Self {
        let mut stats = Self::default();
        for o in operators {
            stats.total += 1;
            match o.status {
                OperatorStatus::Active => stats.active += 1,
                OperatorStatus::Suspended => stats.suspended += 1,
                OperatorStatus::Expired => stats.expired += 1,
                OperatorStatus::Inactive => stats.inactive += 1,
            }
            stats.total_revenue += o.revenue;
            stats.total_customers += u64::from(o.customer_count);
            stats.total_capacity += u64::from(o.service_capacity);
        }
        stats.capacity_utilization = percentage(
            Decimal::from(stats.total_customers),
            Decimal::from(stats.total_capacity),
        );
        stats
    }
}

impl CsvRecord for Operator {
    const HEADERS: &'static [&'static str] = &[
        "Operator ID",
        "Company",
        "Owner",
        "Email",
        "Phone",
        "State",
        "District",
        "Area",
        "Plan",
        "Customers",
        "Capacity",
        "Revenue",
        "Status",
    ];

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.company_name.clone(),
            self.owner_name.clone(),
            self.email.as_ref().map(ToString::to_string).unwrap_or_default(),
            self.phone.clone(),
            self.address.state.clone(),
            self.address.district.clone(),
            self.address.area.clone(),
            self.plan_assigned.clone(),
            self.customer_count.to_string(),
            self.service_capacity.to_string(),
            self.revenue.to_string(),
            self.status.to_string(),
        ]
    }
}
