//! Complaint and follow-up endpoints.

use isp_console_core::{Complaint, ComplaintStatus, FollowUp, FollowUpStatus, NewComplaint};
use tracing::instrument;

use super::accounts::StatusBody;
use super::conversions::{convert_complaint, convert_follow_up};
use super::types::{RawComplaint, RawFollowUp};
use super::{IspApiClient, IspApiError, path_segment};

impl IspApiClient {
    /// List all complaints.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn list_complaints(&self, token: &str) -> Result<Vec<Complaint>, IspApiError> {
        let raw: Vec<RawComplaint> = self.get("/complaints", token).await?;
        Ok(raw.into_iter().map(convert_complaint).collect())
    }

    /// Get a single complaint by ID.
    ///
    /// # Errors
    ///
    /// Returns error if the complaint is not found or the API request fails.
    #[instrument(skip(self, token), fields(complaint_id = %id))]
    pub async fn get_complaint(&self, id: &str, token: &str) -> Result<Complaint, IspApiError> {
        let path = format!("/complaints/{}", path_segment(id)?);
        let raw: RawComplaint = self.get(&path, token).await?;
        Ok(convert_complaint(raw))
    }

    /// Raise a new complaint.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, complaint, token), fields(complaint_type = %complaint.complaint_type))]
    pub async fn raise_complaint(
        &self,
        complaint: &NewComplaint,
        token: &str,
    ) -> Result<Complaint, IspApiError> {
        let raw: RawComplaint = self.post("/complaints", complaint, Some(token)).await?;
        Ok(convert_complaint(raw))
    }

    /// Overwrite a complaint's status. Any status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token), fields(complaint_id = %id, status = %status))]
    pub async fn set_complaint_status(
        &self,
        id: &str,
        status: ComplaintStatus,
        token: &str,
    ) -> Result<(), IspApiError> {
        let body = StatusBody {
            status: status.as_str(),
        };
        let path = format!("/complaints/{}/status", path_segment(id)?);
        self.patch(&path, &body, token).await
    }

    /// List all follow-ups.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn list_follow_ups(&self, token: &str) -> Result<Vec<FollowUp>, IspApiError> {
        let raw: Vec<RawFollowUp> = self.get("/follow-ups", token).await?;
        Ok(raw.into_iter().map(convert_follow_up).collect())
    }

    /// Overwrite a follow-up's status.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token), fields(follow_up_id = %id, status = %status))]
    pub async fn set_follow_up_status(
        &self,
        id: &str,
        status: FollowUpStatus,
        token: &str,
    ) -> Result<(), IspApiError> {
        let body = StatusBody {
            status: status.as_str(),
        };
        let path = format!("/follow-ups/{}/status", path_segment(id)?);
        self.patch(&path, &body, token).await
    }
}
