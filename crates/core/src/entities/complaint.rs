//! Customer complaint tickets.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::export::CsvRecord;
use crate::listing::sort::cmp_missing_last;
use crate::listing::stats::{mean, percentage_of_count};
use crate::listing::{Facet, RecordFilter, SearchQuery, Searchable, SortKey};
use crate::workflow::StatusTracked;
use crate::{ComplaintId, ComplaintStatus, CustomerId, Priority, TechnicianId};

/// A support ticket raised by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    #[serde(rename = "complaint_id")]
    pub id: ComplaintId,
    pub description: String,
    #[serde(rename = "type")]
    pub complaint_type: String,
    pub priority: Priority,
    pub status: ComplaintStatus,
    pub customer_id: Option<CustomerId>,
    pub technician_id: Option<TechnicianId>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Customer rating 1-5 once the ticket is closed.
    pub rating: Option<u8>,
}

impl StatusTracked for Complaint {
    type Status = ComplaintStatus;

    fn key(&self) -> &str {
        self.id.as_str()
    }

    fn status(&self) -> ComplaintStatus {
        self.status
    }

    fn overwrite_status(&mut self, status: ComplaintStatus, at: DateTime<Utc>) {
        self.status = status;
        self.updated_at = Some(at);
    }
}

impl Searchable for Complaint {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.description.as_str(),
            self.complaint_type.as_str(),
        ]
    }
}

/// Complaint queue filter.
#[derive(Debug, Clone, Default)]
pub struct ComplaintFilter {
    pub search: SearchQuery,
    pub status: Facet<ComplaintStatus>,
    pub complaint_type: Facet<String>,
    /// Inclusive lower bound on priority.
    pub min_priority: Option<Priority>,
    /// Inclusive upper bound on priority.
    pub max_priority: Option<Priority>,
    pub technician: Facet<TechnicianId>,
}

impl RecordFilter<Complaint> for ComplaintFilter {
    fn matches(&self, c: &Complaint) -> bool {
        self.search.matches(c)
            && self.status.matches(&c.status)
            && self.complaint_type.matches_text(&c.complaint_type)
            && self.min_priority.is_none_or(|min| c.priority >= min)
            && self.max_priority.is_none_or(|max| c.priority <= max)
            && match &self.technician {
                Facet::All => true,
                Facet::Only(id) => c.technician_id.as_ref() == Some(id),
            }
    }
}

/// Complaint queue columns that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplaintSortKey {
    #[default]
    CreatedAt,
    UpdatedAt,
    Priority,
    Status,
    Rating,
}

impl ComplaintSortKey {
    /// Parse a sort key from a URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "created_at" | "createdat" | "created" => Some(Self::CreatedAt),
            "updated_at" | "updatedat" | "updated" => Some(Self::UpdatedAt),
            "priority" => Some(Self::Priority),
            "status" => Some(Self::Status),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }
}

impl SortKey<Complaint> for ComplaintSortKey {
    fn compare(self, a: &Complaint, b: &Complaint) -> Ordering {
        match self {
            Self::CreatedAt => cmp_missing_last(a.created_at.as_ref(), b.created_at.as_ref()),
            Self::UpdatedAt => cmp_missing_last(a.updated_at.as_ref(), b.updated_at.as_ref()),
            Self::Priority => a.priority.cmp(&b.priority),
            Self::Status => a.status.cmp(&b.status),
            Self::Rating => cmp_missing_last(a.rating.as_ref(), b.rating.as_ref()),
        }
    }
}

/// Complaint queue summary cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    /// Resolved plus closed.
    pub closed: usize,
    /// Cancelled plus raised by mistake.
    pub cancelled: usize,
    /// High or urgent tickets that are not closed yet.
    pub high_priority_open: usize,
    /// Mean rating over rated tickets.
    pub average_rating: Option<Decimal>,
    /// Share of tickets resolved or closed, in percent.
    pub resolution_rate: Decimal,
}

impl ComplaintStats {
    /// Aggregate over any set of complaints.
    pub fn from_records<'a>(complaints: impl IntoIterator<Item = &'a Complaint>) -> Self {
        let mut stats = Self::default();
        let mut rating_total = Decimal::ZERO;
        let mut rated = 0;
        for c in complaints {
            stats.total += 1;
            match c.status {
                ComplaintStatus::Open => stats.open += 1,
                ComplaintStatus::InProgress => stats.in_progress += 1,
                ComplaintStatus::Resolved => {
                    stats.resolved += 1;
                    stats.closed += 1;
                }
                ComplaintStatus::Closed => stats.closed += 1,
                ComplaintStatus::Cancelled | ComplaintStatus::ByMistake => stats.cancelled += 1,
            }
            if c.priority >= Priority::High && !c.status.is_closed() {
                stats.high_priority_open += 1;
            }
            if let Some(rating) = c.rating {
                rating_total += Decimal::from(rating);
                rated += 1;
            }
        }
        stats.average_rating = mean(rating_total, rated);
        stats.resolution_rate = percentage_of_count(stats.closed, stats.total);
        stats
    }
}

impl CsvRecord for Complaint {
    const HEADERS: &'static [&'static str] = &[
        "Complaint ID",
        "Type",
        "Description",
        "Priority",
        "Status",
        "Technician",
        "Created",
        "Updated",
        "Rating",
    ];

    fn csv_row(&self) -> Vec<String> {
        let stamp = |t: Option<DateTime<Utc>>| {
            t.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default()
        };
        vec![
            self.id.to_string(),
            self.complaint_type.clone(),
            self.description.clone(),
            self.priority.to_string(),
            self.status.to_string(),
            self.technician_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            stamp(self.created_at),
            stamp(self.updated_at),
            self.rating.map(|r| r.to_string()).unwrap_or_default(),
        ]
    }
}

/// A new ticket as raised by a customer or staff member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    pub customer_id: Option<CustomerId>,
    #[serde(rename = "type")]
    pub complaint_type: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::apply_filter;

    fn complaint(id: &str, status: ComplaintStatus, priority: Priority) -> Complaint {
        Complaint {
            id: ComplaintId::new(id),
            description: format!("No internet since morning ({id})"),
            complaint_type: "connectivity".to_string(),
            priority,
            status,
            ..Complaint::default()
        }
    }

    fn sample() -> Vec<Complaint> {
        vec![
            complaint("CMP-1", ComplaintStatus::Open, Priority::Urgent),
            complaint("CMP-2", ComplaintStatus::InProgress, Priority::Low),
            complaint("CMP-3", ComplaintStatus::Resolved, Priority::High),
            complaint("CMP-4", ComplaintStatus::ByMistake, Priority::Medium),
            complaint("CMP-5", ComplaintStatus::Closed, Priority::High),
        ]
    }

    #[test]
    fn test_default_filter_is_identity() {
        let complaints = sample();
        let kept = apply_filter(&complaints, &ComplaintFilter::default());
        assert_eq!(kept, complaints.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_priority_range() {
        let complaints = sample();
        let filter = ComplaintFilter {
            min_priority: Some(Priority::Medium),
            max_priority: Some(Priority::High),
            ..ComplaintFilter::default()
        };
        let ids: Vec<_> = apply_filter(&complaints, &filter)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["CMP-3", "CMP-4", "CMP-5"]);
    }

    #[test]
    fn test_technician_facet() {
        let mut complaints = sample();
        complaints[1].technician_id = Some(TechnicianId::new("T-7"));
        let filter = ComplaintFilter {
            technician: Facet::Only(TechnicianId::new("T-7")),
            ..ComplaintFilter::default()
        };
        let kept = apply_filter(&complaints, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id.as_str(), "CMP-2");
    }

    #[test]
    fn test_stats() {
        let mut complaints = sample();
        complaints[2].rating = Some(5);
        complaints[4].rating = Some(2);
        let stats = ComplaintStats::from_records(&complaints);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.open, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.closed, 2);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.high_priority_open, 1);
        assert_eq!(stats.average_rating, Some(Decimal::new(35, 1)));
        assert_eq!(stats.resolution_rate, Decimal::from(40));
    }

    #[test]
    fn test_wire_names() {
        let c = complaint("CMP-9", ComplaintStatus::ByMistake, Priority::Low);
        let json = serde_json::to_value(&c).unwrap_or_default();
        assert_eq!(json["complaint_id"], "CMP-9");
        assert_eq!(json["type"], "connectivity");
        assert_eq!(json["status"], "by mistake");
    }
}
