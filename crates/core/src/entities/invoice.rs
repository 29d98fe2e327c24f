//! Operator invoices.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::export::{CsvRecord, date_cell};
use crate::listing::sort::{cmp_missing_last, cmp_text};
use crate::listing::stats::percentage;
use crate::listing::{Facet, RecordFilter, SearchQuery, Searchable, SortKey};
use crate::{InvoiceId, InvoiceStatus};

/// A platform invoice billed to an operator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    /// Operator company name.
    pub operator: String,
    pub amount: Decimal,
    pub gst: Decimal,
    /// Amount plus GST.
    pub total_amount: Decimal,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub paid_date: Option<NaiveDate>,
    pub status: InvoiceStatus,
}

impl Searchable for Invoice {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.operator.as_str()]
    }
}

/// Invoice list filter.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    pub search: SearchQuery,
    pub status: Facet<InvoiceStatus>,
}

impl RecordFilter<Invoice> for InvoiceFilter {
    fn matches(&self, i: &Invoice) -> bool {
        self.search.matches(i) && self.status.matches(&i.status)
    }
}

/// Invoice list columns that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvoiceSortKey {
    #[default]
    IssueDate,
    DueDate,
    Operator,
    Total,
    Status,
}

impl InvoiceSortKey {
    /// Parse a sort key from a URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "issue_date" | "issuedate" | "issued" => Some(Self::IssueDate),
            "due_date" | "duedate" | "due" => Some(Self::DueDate),
            "operator" => Some(Self::Operator),
            "total" | "total_amount" | "totalamount" => Some(Self::Total),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}

impl SortKey<Invoice> for InvoiceSortKey {
    fn compare(self, a: &Invoice, b: &Invoice) -> Ordering {
        match self {
            Self::IssueDate => cmp_missing_last(a.issue_date.as_ref(), b.issue_date.as_ref()),
            Self::DueDate => cmp_missing_last(a.due_date.as_ref(), b.due_date.as_ref()),
            Self::Operator => cmp_text(&a.operator, &b.operator),
            Self::Total => a.total_amount.cmp(&b.total_amount),
            Self::Status => a.status.cmp(&b.status),
        }
    }
}

/// Invoice summary cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceStats {
    pub total: usize,
    pub paid: usize,
    pub pending: usize,
    pub overdue: usize,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub pending_amount: Decimal,
    pub overdue_amount: Decimal,
    pub total_gst: Decimal,
    /// Paid amount over billed amount, in percent.
    pub collection_rate: Decimal,
}

impl InvoiceStats {
    /// Aggregate over any set of invoices.
    pub fn from_records<'a>(invoices: impl IntoIterator<Item = &'a Invoice>) -> Self {
        let mut stats = Self::default();
        for invoice in invoices {
            stats.total += 1;
            stats.total_amount += invoice.total_amount;
            stats.total_gst += invoice.gst;
            match invoice.status {
                InvoiceStatus::Paid => {
                    stats.paid += 1;
                    stats.paid_amount += invoice.total_amount;
                }
                InvoiceStatus::Pending => {
                    stats.pending += 1;
                    stats.pending_amount += invoice.total_amount;
                }
                InvoiceStatus::Overdue => {
                    stats.overdue += 1;
                    stats.overdue_amount += invoice.total_amount;
                }
            }
        }
        stats.collection_rate = percentage(stats.paid_amount, stats.total_amount);
        stats
    }
}

impl CsvRecord for Invoice {
    const HEADERS: &'static [&'static str] = &[
        "Invoice ID",
        "Operator",
        "Amount",
        "GST",
        "Total",
        "Issue Date",
        "Due Date",
        "Paid Date",
        "Status",
    ];

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.operator.clone(),
            self.amount.to_string(),
            self.gst.to_string(),
            self.total_amount.to_string(),
            date_cell(self.issue_date),
            date_cell(self.due_date),
            date_cell(self.paid_date),
            self.status.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(id: &str, status: InvoiceStatus, amount: i64) -> Invoice {
        let amount = Decimal::from(amount);
        let gst = amount * Decimal::new(18, 2);
        Invoice {
            id: InvoiceId::new(id),
            operator: "Skyline Net".to_string(),
            amount,
            gst,
            total_amount: amount + gst,
            status,
            ..Invoice::default()
        }
    }

    #[test]
    fn test_stats_and_collection_rate() {
        let invoices = vec![
            invoice("INV-1", InvoiceStatus::Paid, 1000),
            invoice("INV-2", InvoiceStatus::Pending, 1000),
            invoice("INV-3", InvoiceStatus::Overdue, 2000),
        ];
        let stats = InvoiceStats::from_records(&invoices);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.paid_amount, Decimal::from(1180));
        assert_eq!(stats.overdue_amount, Decimal::from(2360));
        assert_eq!(stats.total_gst, Decimal::from(720));
        assert_eq!(stats.collection_rate, Decimal::from(25));
    }

    #[test]
    fn test_collection_rate_no_invoices() {
        let stats = InvoiceStats::from_records(std::iter::empty());
        assert_eq!(stats.collection_rate, Decimal::ZERO);
    }

    #[test]
    fn test_search_by_id() {
        let invoices = vec![
            invoice("INV-1001", InvoiceStatus::Paid, 10),
            invoice("INV-2002", InvoiceStatus::Paid, 10),
        ];
        let filter = InvoiceFilter {
            search: SearchQuery::new("inv-2"),
            ..InvoiceFilter::default()
        };
        assert_eq!(crate::listing::apply_filter(&invoices, &filter).len(), 1);
    }

    #[test]
    fn test_csv_row_blank_dates() {
        let row = invoice("INV-7", InvoiceStatus::Pending, 100).csv_row();
        assert_eq!(row.len(), Invoice::HEADERS.len());
        assert_eq!(row[5], "");
        assert_eq!(row[8], "pending");
    }
}
