//! The seam between route handlers and the ISP backend.
//!
//! Handlers only see [`IspBackend`], so the router can run against the real
//! [`IspApiClient`] or an in-memory double in tests.

use async_trait::async_trait;
use isp_console_core::analytics::{
    AnalyticsOverview, PlanShare, ReportHandle, ReportRequest, ReportSchedule, TimeRange,
    TimeSeriesPoint,
};
use isp_console_core::{
    Complaint, ComplaintStatus, ConnectionStatus, Customer, CustomerUpdate, FollowUp,
    FollowUpStatus, Invoice, NewComplaint, Operator, OperatorStatus, Plan, Technician, Vendor,
    VendorUpdate,
};

use crate::api::{IspApiClient, IspApiError, LoginResult};

/// Operations the dashboard needs from the ISP backend.
///
/// Every data call carries the bearer token of the user it is made for.
#[async_trait]
pub trait IspBackend: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResult, IspApiError>;
    async fn ping(&self, token: Option<&str>) -> Result<(), IspApiError>;

    async fn list_customers(&self, token: &str) -> Result<Vec<Customer>, IspApiError>;
    async fn get_customer(&self, id: &str, token: &str) -> Result<Customer, IspApiError>;
    async fn update_customer(
        &self,
        id: &str,
        update: &CustomerUpdate,
        token: &str,
    ) -> Result<(), IspApiError>;
    async fn delete_customer(&self, id: &str, token: &str) -> Result<(), IspApiError>;
    async fn set_customer_status(
        &self,
        id: &str,
        status: ConnectionStatus,
        token: &str,
    ) -> Result<(), IspApiError>;

    async fn list_operators(&self, token: &str) -> Result<Vec<Operator>, IspApiError>;
    async fn delete_operator_profile(&self, id: &str, token: &str) -> Result<(), IspApiError>;
    async fn set_operator_status(
        &self,
        id: &str,
        status: OperatorStatus,
        token: &str,
    ) -> Result<(), IspApiError>;

    async fn list_technicians(&self, token: &str) -> Result<Vec<Technician>, IspApiError>;
    async fn get_technician(&self, id: &str, token: &str) -> Result<Technician, IspApiError>;
    async fn delete_technician(&self, id: &str, token: &str) -> Result<(), IspApiError>;

    async fn list_vendors(&self, token: &str) -> Result<Vec<Vendor>, IspApiError>;
    async fn update_vendor(
        &self,
        id: &str,
        update: &VendorUpdate,
        token: &str,
    ) -> Result<(), IspApiError>;

    async fn list_invoices(&self, token: &str) -> Result<Vec<Invoice>, IspApiError>;
    async fn list_plans(&self, token: &str) -> Result<Vec<Plan>, IspApiError>;

    async fn list_complaints(&self, token: &str) -> Result<Vec<Complaint>, IspApiError>;
    async fn get_complaint(&self, id: &str, token: &str) -> Result<Complaint, IspApiError>;
    async fn raise_complaint(
        &self,
        complaint: &NewComplaint,
        token: &str,
    ) -> Result<Complaint, IspApiError>;
    async fn set_complaint_status(
        &self,
        id: &str,
        status: ComplaintStatus,
        token: &str,
    ) -> Result<(), IspApiError>;

    async fn list_follow_ups(&self, token: &str) -> Result<Vec<FollowUp>, IspApiError>;
    async fn set_follow_up_status(
        &self,
        id: &str,
        status: FollowUpStatus,
        token: &str,
    ) -> Result<(), IspApiError>;

    async fn analytics_overview(&self, token: &str) -> Result<AnalyticsOverview, IspApiError>;
    async fn revenue(
        &self,
        range: TimeRange,
        token: &str,
    ) -> Result<Vec<TimeSeriesPoint>, IspApiError>;
    async fn customer_growth(
        &self,
        range: TimeRange,
        token: &str,
    ) -> Result<Vec<TimeSeriesPoint>, IspApiError>;
    /// Every share carries a percentage, derived from the counts when the
    /// ISP backend omits it.
    async fn plan_distribution(&self, token: &str) -> Result<Vec<PlanShare>, IspApiError>;
    async fn export_report(
        &self,
        request: &ReportRequest,
        token: &str,
    ) -> Result<ReportHandle, IspApiError>;
    async fn schedule_report(
        &self,
        schedule: &ReportSchedule,
        token: &str,
    ) -> Result<ReportHandle, IspApiError>;
}

#[async_trait]
impl IspBackend for IspApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResult, IspApiError> {
        Self::login(self, email, password).await
    }

    async fn ping(&self, token: Option<&str>) -> Result<(), IspApiError> {
        Self::ping(self, token).await
    }

    async fn list_customers(&self, token: &str) -> Result<Vec<Customer>, IspApiError> {
        Self::list_customers(self, token).await
    }

    async fn get_customer(&self, id: &str, token: &str) -> Result<Customer, IspApiError> {
        Self::get_customer(self, id, token).await
    }

    async fn update_customer(
        &self,
        id: &str,
        update: &CustomerUpdate,
        token: &str,
    ) -> Result<(), IspApiError> {
        Self::update_customer(self, id, update, token).await
    }

    async fn delete_customer(&self, id: &str, token: &str) -> Result<(), IspApiError> {
        Self::delete_customer(self, id, token).await
    }

    async fn set_customer_status(
        &self,
        id: &str,
        status: ConnectionStatus,
        token: &str,
    ) -> Result<(), IspApiError> {
        Self::set_customer_status(self, id, status, token).await
    }

    async fn list_operators(&self, token: &str) -> Result<Vec<Operator>, IspApiError> {
        Self::list_operators(self, token).await
    }

    async fn delete_operator_profile(&self, id: &str, token: &str) -> Result<(), IspApiError> {
        Self::delete_operator_profile(self, id, token).await
    }

    async fn set_operator_status(
        &self,
        id: &str,
        status: OperatorStatus,
        token: &str,
    ) -> Result<(), IspApiError> {
        Self::set_operator_status(self, id, status, token).await
    }

    async fn list_technicians(&self, token: &str) -> Result<Vec<Technician>, IspApiError> {
        Self::list_technicians(self, token).await
    }

    async fn get_technician(&self, id: &str, token: &str) -> Result<Technician, IspApiError> {
        Self::get_technician(self, id, token).await
    }

    async fn delete_technician(&self, id: &str, token: &str) -> Result<(), IspApiError> {
        Self::delete_technician(self, id, token).await
    }

    async fn list_vendors(&self, token: &str) -> Result<Vec<Vendor>, IspApiError> {
        Self::list_vendors(self, token).await
    }

    async fn update_vendor(
        &self,
        id: &str,
        update: &VendorUpdate,
        token: &str,
    ) -> Result<(), IspApiError> {
        Self::update_vendor(self, id, update, token).await
    }

    async fn list_invoices(&self, token: &str) -> Result<Vec<Invoice>, IspApiError> {
        Self::list_invoices(self, token).await
    }

    async fn list_plans(&self, token: &str) -> Result<Vec<Plan>, IspApiError> {
        Self::list_plans(self, token).await
    }

    async fn list_complaints(&self, token: &str) -> Result<Vec<Complaint>, IspApiError> {
        Self::list_complaints(self, token).await
    }

    async fn get_complaint(&self, id: &str, token: &str) -> Result<Complaint, IspApiError> {
        Self::get_complaint(self, id, token).await
    }

    async fn raise_complaint(
        &self,
        complaint: &NewComplaint,
        token: &str,
    ) -> Result<Complaint, IspApiError> {
        Self::raise_complaint(self, complaint, token).await
    }

    async fn set_complaint_status(
        &self,
        id: &str,
        status: ComplaintStatus,
        token: &str,
    ) -> Result<(), IspApiError> {
        Self::set_complaint_status(self, id, status, token).await
    }

    async fn list_follow_ups(&self, token: &str) -> Result<Vec<FollowUp>, IspApiError> {
        Self::list_follow_ups(self, token).await
    }

    async fn set_follow_up_status(
        &self,
        id: &str,
        status: FollowUpStatus,
        token: &str,
    ) -> Result<(), IspApiError> {
        Self::set_follow_up_status(self, id, status, token).await
    }

    async fn analytics_overview(&self, token: &str) -> Result<AnalyticsOverview, IspApiError> {
        Self::analytics_overview(self, token).await
    }

    async fn revenue(
        &self,
        range: TimeRange,
        token: &str,
    ) -> Result<Vec<TimeSeriesPoint>, IspApiError> {
        Self::revenue(self, range, token).await
    }

    async fn customer_growth(
        &self,
        range: TimeRange,
        token: &str,
    ) -> Result<Vec<TimeSeriesPoint>, IspApiError> {
        Self::customer_growth(self, range, token).await
    }

    async fn plan_distribution(&self, token: &str) -> Result<Vec<PlanShare>, IspApiError> {
        Self::plan_distribution(self, token).await
    }

    async fn export_report(
        &self,
        request: &ReportRequest,
        token: &str,
    ) -> Result<ReportHandle, IspApiError> {
        Self::export_report(self, request, token).await
    }

    async fn schedule_report(
        &self,
        schedule: &ReportSchedule,
        token: &str,
    ) -> Result<ReportHandle, IspApiError> {
        Self::schedule_report(self, schedule, token).await
    }
}
