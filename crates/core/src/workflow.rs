//! Status changes for complaints and follow-ups.
//!
//! Status is a flat field. A change is an overwrite sent to the backend;
//! there is no transition table, so `resolved -> open` is as valid as
//! `open -> in-progress`. Locally, a change touches exactly one record and
//! only its status and last-updated time.

use chrono::{DateTime, Utc};

/// A record with an overwritable status.
pub trait StatusTracked {
    /// The status vocabulary.
    type Status: Copy + PartialEq;

    /// The record's identifier as sent to the backend.
    fn key(&self) -> &str;

    /// Current status.
    fn status(&self) -> Self::Status;

    /// Overwrite the status and stamp the update time.
    fn overwrite_status(&mut self, status: Self::Status, at: DateTime<Utc>);
}

/// What a status change did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange<S> {
    /// Status before the change.
    pub previous: S,
    /// Status after the change.
    pub current: S,
}

/// Overwrite the status of the record with the given id.
///
/// Returns `None` when no record has that id; the slice is then unchanged.
pub fn apply_status_change<T: StatusTracked>(
    records: &mut [T],
    id: &str,
    status: T::Status,
    at: DateTime<Utc>,
) -> Option<StatusChange<T::Status>> {
    let record = records.iter_mut().find(|r| r.key() == id)?;
    let previous = record.status();
    record.overwrite_status(status, at);
    Some(StatusChange {
        previous,
        current: status,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::{Complaint, ComplaintId, ComplaintStatus, Priority};

    fn complaint(id: &str, status: ComplaintStatus) -> Complaint {
        Complaint {
            id: ComplaintId::new(id),
            description: format!("ticket {id}"),
            complaint_type: "connectivity".to_string(),
            priority: Priority::High,
            status,
            created_at: Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).single(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).single(),
            rating: Some(4),
            ..Complaint::default()
        }
    }

    #[test]
    fn test_change_touches_only_target_status_and_timestamp() {
        let mut complaints = vec![
            complaint("CMP-1", ComplaintStatus::Open),
            complaint("CMP-2", ComplaintStatus::Open),
            complaint("CMP-3", ComplaintStatus::InProgress),
        ];
        let before = complaints.clone();
        let now = Utc.with_ymd_and_hms(2026, 1, 6, 12, 30, 0).unwrap();

        let change =
            apply_status_change(&mut complaints, "CMP-2", ComplaintStatus::Resolved, now).unwrap();

        assert_eq!(change.previous, ComplaintStatus::Open);
        assert_eq!(change.current, ComplaintStatus::Resolved);
        assert_eq!(complaints[0], before[0]);
        assert_eq!(complaints[2], before[2]);

        let expected = Complaint {
            status: ComplaintStatus::Resolved,
            updated_at: Some(now),
            ..before[1].clone()
        };
        assert_eq!(complaints[1], expected);
    }

    #[test]
    fn test_no_transition_guard() {
        let mut complaints = vec![complaint("CMP-9", ComplaintStatus::Resolved)];
        let now = Utc::now();
        let change =
            apply_status_change(&mut complaints, "CMP-9", ComplaintStatus::Open, now).unwrap();
        assert_eq!(change.previous, ComplaintStatus::Resolved);
        assert_eq!(complaints[0].status, ComplaintStatus::Open);
    }

    #[test]
    fn test_unknown_id_changes_nothing() {
        let mut complaints = vec![complaint("CMP-1", ComplaintStatus::Open)];
        let before = complaints.clone();
        assert!(
            apply_status_change(&mut complaints, "CMP-404", ComplaintStatus::Closed, Utc::now())
                .is_none()
        );
        assert_eq!(complaints, before);
    }
}
