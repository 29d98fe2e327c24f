//! Customer, operator, technician and vendor endpoints.

use isp_console_core::{
    ConnectionStatus, Customer, CustomerUpdate, Operator, OperatorStatus, Technician, Vendor,
    VendorUpdate,
};
use serde::Serialize;
use tracing::instrument;

use super::conversions::{convert_customer, convert_operator, convert_technician, convert_vendor};
use super::types::{RawCustomer, RawOperator, RawTechnician, RawVendor};
use super::{IspApiClient, IspApiError, path_segment};

/// Body of every `PATCH .../status` call.
#[derive(Debug, Serialize)]
pub(crate) struct StatusBody<'a> {
    pub status: &'a str,
}

impl IspApiClient {
    /// List all customers.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn list_customers(&self, token: &str) -> Result<Vec<Customer>, IspApiError> {
        let raw: Vec<RawCustomer> = self.get("/customers", token).await?;
        Ok(raw.into_iter().map(convert_customer).collect())
    }

    /// Get a single customer by ID.
    ///
    /// # Errors
    ///
    /// Returns error if the customer is not found or the API request fails.
    #[instrument(skip(self, token), fields(customer_id = %id))]
    pub async fn get_customer(&self, id: &str, token: &str) -> Result<Customer, IspApiError> {
        let path = format!("/customers/{}", path_segment(id)?);
        let raw: RawCustomer = self.get(&path, token).await?;
        Ok(convert_customer(raw))
    }

    /// Update a customer's editable fields.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, update, token), fields(customer_id = %id))]
    pub async fn update_customer(
        &self,
        id: &str,
        update: &CustomerUpdate,
        token: &str,
    ) -> Result<(), IspApiError> {
        let path = format!("/customers/{}", path_segment(id)?);
        self.put(&path, update, token).await
    }

    /// Delete a customer.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token), fields(customer_id = %id))]
    pub async fn delete_customer(&self, id: &str, token: &str) -> Result<(), IspApiError> {
        let path = format!("/customers/{}", path_segment(id)?);
        self.delete(&path, token).await
    }

    /// Overwrite a customer's connection status (suspend / activate).
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token), fields(customer_id = %id, status = %status))]
    pub async fn set_customer_status(
        &self,
        id: &str,
        status: ConnectionStatus,
        token: &str,
    ) -> Result<(), IspApiError> {
        let body = StatusBody {
            status: status.as_str(),
        };
        let path = format!("/customers/{}/status", path_segment(id)?);
        self.patch(&path, &body, token).await
    }

    /// List all operators.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn list_operators(&self, token: &str) -> Result<Vec<Operator>, IspApiError> {
        let raw: Vec<RawOperator> = self.get("/operators", token).await?;
        Ok(raw.into_iter().map(convert_operator).collect())
    }

    /// Delete an operator's profile.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token), fields(operator_id = %id))]
    pub async fn delete_operator_profile(&self, id: &str, token: &str) -> Result<(), IspApiError> {
        let path = format!("/operators/{}/profile", path_segment(id)?);
        self.delete(&path, token).await
    }

    /// Overwrite an operator's status.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token), fields(operator_id = %id, status = %status))]
    pub async fn set_operator_status(
        &self,
        id: &str,
        status: OperatorStatus,
        token: &str,
    ) -> Result<(), IspApiError> {
        let body = StatusBody {
            status: status.as_str(),
        };
        let path = format!("/operators/{}/status", path_segment(id)?);
        self.patch(&path, &body, token).await
    }

    /// List all technicians.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn list_technicians(&self, token: &str) -> Result<Vec<Technician>, IspApiError> {
        let raw: Vec<RawTechnician> = self.get("/technicians", token).await?;
        Ok(raw.into_iter().map(convert_technician).collect())
    }

    /// Get a single technician by ID.
    ///
    /// # Errors
    ///
    /// Returns error if the technician is not found or the API request fails.
    #[instrument(skip(self, token), fields(technician_id = %id))]
    pub async fn get_technician(&self, id: &str, token: &str) -> Result<Technician, IspApiError> {
        let path = format!("/technicians/{}", path_segment(id)?);
        let raw: RawTechnician = self.get(&path, token).await?;
        Ok(convert_technician(raw))
    }

    /// Delete a technician.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token), fields(technician_id = %id))]
    pub async fn delete_technician(&self, id: &str, token: &str) -> Result<(), IspApiError> {
        let path = format!("/technicians/{}", path_segment(id)?);
        self.delete(&path, token).await
    }

    /// List all vendors.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn list_vendors(&self, token: &str) -> Result<Vec<Vendor>, IspApiError> {
        let raw: Vec<RawVendor> = self.get("/vendors", token).await?;
        Ok(raw.into_iter().map(convert_vendor).collect())
    }

    /// Update a vendor (approval, rejection, suspension, terms).
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, update, token), fields(vendor_id = %id))]
    pub async fn update_vendor(
        &self,
        id: &str,
        update: &VendorUpdate,
        token: &str,
    ) -> Result<(), IspApiError> {
        let path = format!("/vendors/{}", path_segment(id)?);
        self.put(&path, update, token).await
    }
}
