//! Staff follow-up tasks tied to customer interactions.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::sort::{cmp_missing_last, cmp_text};
use crate::listing::{Facet, RecordFilter, SearchQuery, Searchable, SortKey};
use crate::workflow::StatusTracked;
use crate::{CustomerId, FollowUpId, FollowUpStatus, Priority};

/// A scheduled reminder or task.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
    pub id: FollowUpId,
    pub customer_id: CustomerId,
    /// Kind of contact: call, visit, email.
    #[serde(rename = "type")]
    pub follow_up_type: String,
    pub title: String,
    pub status: FollowUpStatus,
    pub priority: Priority,
    pub scheduled_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: String,
    pub notes: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl FollowUp {
    /// Past due and not completed, as of `today`.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.status {
            FollowUpStatus::Completed => false,
            FollowUpStatus::Overdue => true,
            FollowUpStatus::Pending | FollowUpStatus::InProgress => {
                self.due_date.is_some_and(|due| due < today)
            }
        }
    }
}

impl StatusTracked for FollowUp {
    type Status = FollowUpStatus;

    fn key(&self) -> &str {
        self.id.as_str()
    }

    fn status(&self) -> FollowUpStatus {
        self.status
    }

    fn overwrite_status(&mut self, status: FollowUpStatus, at: DateTime<Utc>) {
        self.status = status;
        self.updated_at = Some(at);
    }
}

impl Searchable for FollowUp {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.customer_id.as_str(),
            self.assigned_to.as_str(),
        ]
    }
}

/// Follow-up list filter.
#[derive(Debug, Clone, Default)]
pub struct FollowUpFilter {
    pub search: SearchQuery,
    pub status: Facet<FollowUpStatus>,
    pub follow_up_type: Facet<String>,
    pub priority: Facet<Priority>,
}

impl RecordFilter<FollowUp> for FollowUpFilter {
    fn matches(&self, f: &FollowUp) -> bool {
        self.search.matches(f)
            && self.status.matches(&f.status)
            && self.follow_up_type.matches_text(&f.follow_up_type)
            && self.priority.matches(&f.priority)
    }
}

/// Follow-up list columns that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowUpSortKey {
    #[default]
    DueDate,
    ScheduledDate,
    Priority,
    AssignedTo,
}

impl FollowUpSortKey {
    /// Parse a sort key from a URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "due_date" | "duedate" | "due" => Some(Self::DueDate),
            "scheduled_date" | "scheduleddate" | "scheduled" => Some(Self::ScheduledDate),
            "priority" => Some(Self::Priority),
            "assigned_to" | "assignedto" | "assignee" => Some(Self::AssignedTo),
            _ => None,
        }
    }
}

impl SortKey<FollowUp> for FollowUpSortKey {
    fn compare(self, a: &FollowUp, b: &FollowUp) -> Ordering {
        match self {
            Self::DueDate => cmp_missing_last(a.due_date.as_ref(), b.due_date.as_ref()),
            Self::ScheduledDate => {
                cmp_missing_last(a.scheduled_date.as_ref(), b.scheduled_date.as_ref())
            }
            Self::Priority => a.priority.cmp(&b.priority),
            Self::AssignedTo => cmp_text(&a.assigned_to, &b.assigned_to),
        }
    }
}

/// Follow-up summary cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Overdue as of the day the stats were computed.
    pub overdue: usize,
}

impl FollowUpStats {
    /// Aggregate over any set of follow-ups.
    pub fn from_records<'a>(
        follow_ups: impl IntoIterator<Item = &'a FollowUp>,
        today: NaiveDate,
    ) -> Self {
        let mut stats = Self::default();
        for f in follow_ups {
            stats.total += 1;
            match f.status {
                FollowUpStatus::Pending => stats.pending += 1,
                FollowUpStatus::InProgress => stats.in_progress += 1,
                FollowUpStatus::Completed => stats.completed += 1,
                FollowUpStatus::Overdue => {}
            }
            if f.is_overdue(today) {
                stats.overdue += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    fn follow_up(id: &str, status: FollowUpStatus, due: u32) -> FollowUp {
        FollowUp {
            id: FollowUpId::new(id),
            customer_id: CustomerId::new("CUST-1"),
            follow_up_type: "call".to_string(),
            title: format!("Renewal call {id}"),
            status,
            due_date: Some(day(due)),
            assigned_to: "Neha".to_string(),
            ..FollowUp::default()
        }
    }

    #[test]
    fn test_overdue_as_of_today() {
        let today = day(10);
        assert!(follow_up("F1", FollowUpStatus::Pending, 9).is_overdue(today));
        assert!(!follow_up("F2", FollowUpStatus::Pending, 10).is_overdue(today));
        assert!(!follow_up("F3", FollowUpStatus::Completed, 1).is_overdue(today));
        assert!(follow_up("F4", FollowUpStatus::Overdue, 20).is_overdue(today));
    }

    #[test]
    fn test_stats() {
        let items = vec![
            follow_up("F1", FollowUpStatus::Pending, 1),
            follow_up("F2", FollowUpStatus::InProgress, 28),
            follow_up("F3", FollowUpStatus::Completed, 1),
            follow_up("F4", FollowUpStatus::Overdue, 3),
        ];
        let stats = FollowUpStats::from_records(&items, day(10));
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.overdue, 2);
    }

    #[test]
    fn test_priority_and_type_facets() {
        let mut visit = follow_up("F2", FollowUpStatus::Pending, 5);
        visit.follow_up_type = "visit".to_string();
        visit.priority = Priority::Urgent;
        let items = vec![follow_up("F1", FollowUpStatus::Pending, 5), visit];

        let filter = FollowUpFilter {
            priority: Facet::Only(Priority::Urgent),
            follow_up_type: Facet::Only("Visit".to_string()),
            ..FollowUpFilter::default()
        };
        let kept = crate::listing::apply_filter(&items, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id.as_str(), "F2");
    }
}
