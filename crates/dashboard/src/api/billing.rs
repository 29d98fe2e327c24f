//! Invoice and plan endpoints.

use isp_console_core::{Invoice, Plan};
use tracing::instrument;

use super::conversions::{convert_invoice, convert_plan};
use super::types::{RawInvoice, RawPlan};
use super::{IspApiClient, IspApiError};

impl IspApiClient {
    /// List all operator invoices.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn list_invoices(&self, token: &str) -> Result<Vec<Invoice>, IspApiError> {
        let raw: Vec<RawInvoice> = self.get("/invoices", token).await?;
        Ok(raw.into_iter().map(convert_invoice).collect())
    }

    /// List all subscription plans.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn list_plans(&self, token: &str) -> Result<Vec<Plan>, IspApiError> {
        let raw: Vec<RawPlan> = self.get("/plans", token).await?;
        Ok(raw.into_iter().map(convert_plan).collect())
    }
}
