//! Customers and their connections.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::export::{CsvRecord, date_cell};
use crate::listing::sort::{cmp_missing_last, cmp_text};
use crate::listing::stats::sum;
use crate::listing::{Facet, RecordFilter, SearchQuery, Searchable, SortKey};
use crate::{ConnectionStatus, CustomerId, Email};

/// A subscriber with an internet connection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Backend record id.
    pub id: CustomerId,
    /// Human-facing customer code, e.g. `CUST-0091`.
    pub customer_id: String,
    pub name: String,
    pub email: Option<Email>,
    pub phone: String,
    /// Plan name as shown on the connection.
    pub plan: String,
    pub connection_status: ConnectionStatus,
    pub monthly_charges: Decimal,
    pub outstanding_amount: Decimal,
    pub address: String,
    pub join_date: Option<NaiveDate>,
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_ref().map_or("", Email::as_str),
            self.phone.as_str(),
            self.customer_id.as_str(),
        ]
    }
}

/// Customer list filter.
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub search: SearchQuery,
    pub status: Facet<ConnectionStatus>,
    pub plan: Facet<String>,
}

impl RecordFilter<Customer> for CustomerFilter {
    fn matches(&self, c: &Customer) -> bool {
        self.search.matches(c)
            && self.status.matches(&c.connection_status)
            && self.plan.matches_text(&c.plan)
    }
}

/// Customer list columns that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerSortKey {
    #[default]
    Name,
    CustomerId,
    Plan,
    Status,
    MonthlyCharges,
    Outstanding,
    JoinDate,
}

impl CustomerSortKey {
    /// Parse a sort key from a URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "customer_id" | "customerid" | "code" => Some(Self::CustomerId),
            "plan" => Some(Self::Plan),
            "status" => Some(Self::Status),
            "monthly_charges" | "monthlycharges" | "charges" => Some(Self::MonthlyCharges),
            "outstanding" | "outstanding_amount" => Some(Self::Outstanding),
            "join_date" | "joindate" | "joined" => Some(Self::JoinDate),
            _ => None,
        }
    }
}

impl SortKey<Customer> for CustomerSortKey {
    fn compare(self, a: &Customer, b: &Customer) -> Ordering {
        match self {
            Self::Name => cmp_text(&a.name, &b.name),
            Self::CustomerId => a.customer_id.cmp(&b.customer_id),
            Self::Plan => cmp_text(&a.plan, &b.plan),
            Self::Status => a.connection_status.cmp(&b.connection_status),
            Self::MonthlyCharges => a.monthly_charges.cmp(&b.monthly_charges),
            Self::Outstanding => a.outstanding_amount.cmp(&b.outstanding_amount),
            Self::JoinDate => cmp_missing_last(a.join_date.as_ref(), b.join_date.as_ref()),
        }
    }
}

/// Customer summary cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub suspended: usize,
    pub pending: usize,
    /// Sum of monthly charges.
    pub total_revenue: Decimal,
    pub total_outstanding: Decimal,
}

impl CustomerStats {
    /// Aggregate over any set of customers.
    pub fn from_records<'a>(customers: impl IntoIterator<Item = &'a Customer>) -> Self {
        let customers: Vec<&Customer> = customers.into_iter().collect();
        let count = |status| {
            customers
                .iter()
                .filter(|c| c.connection_status == status)
                .count()
        };
        Self {
            total: customers.len(),
            active: count(ConnectionStatus::Active),
            inactive: count(ConnectionStatus::Inactive),
            suspended: count(ConnectionStatus::Suspended),
            pending: count(ConnectionStatus::Pending),
            total_revenue: sum(customers.iter().map(|c| c.monthly_charges)),
            total_outstanding: sum(customers.iter().map(|c| c.outstanding_amount)),
        }
    }
}

impl CsvRecord for Customer {
    const HEADERS: &'static [&'static str] = &[
        "Customer ID",
        "Name",
        "Email",
        "Phone",
        "Plan",
        "Status",
        "Monthly Charges",
        "Outstanding",
        "Address",
        "Join Date",
    ];

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.customer_id.clone(),
            self.name.clone(),
            self.email.as_ref().map(ToString::to_string).unwrap_or_default(),
            self.phone.clone(),
            self.plan.clone(),
            self.connection_status.to_string(),
            self.monthly_charges.to_string(),
            self.outstanding_amount.to_string(),
            self.address.clone(),
            date_cell(self.join_date),
        ]
    }
}

/// Editable customer fields. Unset fields are left alone by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_charges: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CustomerUpdate {
    /// Whether the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.plan.is_none()
            && self.monthly_charges.is_none()
            && self.address.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::export::to_csv;
    use crate::listing::{SortDirection, apply_filter, sort_records};

    fn customer(code: &str, name: &str, status: ConnectionStatus, charges: i64) -> Customer {
        Customer {
            id: CustomerId::new(code.trim_start_matches("CUST-")),
            customer_id: code.to_string(),
            name: name.to_string(),
            email: Email::parse(&format!("{}@mail.in", name.to_lowercase())).ok(),
            phone: "98200 00000".to_string(),
            plan: "Fiber 100".to_string(),
            connection_status: status,
            monthly_charges: Decimal::from(charges),
            ..Customer::default()
        }
    }

    fn sample() -> Vec<Customer> {
        vec![
            customer("CUST-1", "Asha", ConnectionStatus::Active, 500),
            customer("CUST-2", "Vikram", ConnectionStatus::Suspended, 999),
            customer("CUST-3", "Meera", ConnectionStatus::Active, 750),
            customer("CUST-4", "Kabir", ConnectionStatus::Pending, 0),
        ]
    }

    #[test]
    fn test_default_filter_keeps_everything_in_order() {
        let customers = sample();
        let kept = apply_filter(&customers, &CustomerFilter::default());
        assert_eq!(kept, customers.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_status_filter_keeps_only_active() {
        let customers = sample();
        let filter = CustomerFilter {
            status: Facet::Only(ConnectionStatus::Active),
            ..CustomerFilter::default()
        };
        let kept = apply_filter(&customers, &filter);
        let expected = customers
            .iter()
            .filter(|c| c.connection_status == ConnectionStatus::Active)
            .count();
        assert_eq!(kept.len(), expected);
        assert!(
            kept.iter()
                .all(|c| c.connection_status == ConnectionStatus::Active)
        );
    }

    #[test]
    fn test_search_matches_email_phone_and_code() {
        let customers = sample();
        let by_email = CustomerFilter {
            search: SearchQuery::new("VIKRAM@"),
            ..CustomerFilter::default()
        };
        assert_eq!(apply_filter(&customers, &by_email).len(), 1);

        let by_code = CustomerFilter {
            search: SearchQuery::new("cust-3"),
            ..CustomerFilter::default()
        };
        assert_eq!(apply_filter(&customers, &by_code)[0].name, "Meera");
    }

    #[test]
    fn test_search_and_facets_combine() {
        let customers = sample();
        let filter = CustomerFilter {
            search: SearchQuery::new("a"),
            status: Facet::Only(ConnectionStatus::Active),
            plan: Facet::Only("fiber 100".to_string()),
        };
        let names: Vec<_> = apply_filter(&customers, &filter)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Asha", "Meera"]);
    }

    #[test]
    fn test_total_revenue_sums_monthly_charges() {
        let customers = vec![
            customer("CUST-1", "A", ConnectionStatus::Active, 500),
            customer("CUST-2", "B", ConnectionStatus::Active, 999),
        ];
        let stats = CustomerStats::from_records(&customers);
        assert_eq!(stats.total_revenue, Decimal::from(1499));
        assert_eq!(stats.active, 2);
    }

    #[test]
    fn test_stats_counts_by_status() {
        let stats = CustomerStats::from_records(&sample());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.suspended, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.inactive, 0);
    }

    #[test]
    fn test_sort_by_charges_desc() {
        let customers = sample();
        let mut view = apply_filter(&customers, &CustomerFilter::default());
        sort_records(&mut view, CustomerSortKey::MonthlyCharges, SortDirection::Desc);
        let names: Vec<_> = view.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Vikram", "Meera", "Asha", "Kabir"]);
    }

    #[test]
    fn test_csv_rows_and_header_order() {
        let customers = sample();
        let kept = apply_filter(&customers, &CustomerFilter::default());
        let csv = to_csv(kept.iter().copied());
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), customers.len() + 1);
        assert_eq!(
            lines[0],
            "Customer ID,Name,Email,Phone,Plan,Status,Monthly Charges,Outstanding,Address,Join Date"
        );
        assert!(lines[1].starts_with("CUST-1,Asha,asha@mail.in,"));
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let update = CustomerUpdate {
            plan: Some("Fiber 200".to_string()),
            ..CustomerUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "plan": "Fiber 200" }));
        assert!(CustomerUpdate::default().is_empty());
    }
}
