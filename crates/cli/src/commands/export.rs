//! CSV export.
//!
//! Fetches one list from the backend, applies the same search and status
//! filter as the dashboard, and writes the filtered rows as CSV.

use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use isp_console_core::export::{CsvRecord, to_csv};
use isp_console_core::listing::{Facet, RecordFilter, SearchQuery, apply_filter};
use isp_console_core::{
    ComplaintFilter, CustomerFilter, InvoiceFilter, OperatorFilter, PlanFilter, TechnicianFilter,
    VendorFilter,
};

use super::{CommandError, connect};

/// Lists that can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    Customers,
    Operators,
    Technicians,
    Vendors,
    Invoices,
    Complaints,
    Plans,
}

impl Entity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Operators => "operators",
            Self::Technicians => "technicians",
            Self::Vendors => "vendors",
            Self::Invoices => "invoices",
            Self::Complaints => "complaints",
            Self::Plans => "plans",
        }
    }
}

fn status_facet<T>(status: Option<&str>) -> Result<Facet<T>, CommandError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Facet::<T>::parse(status).map_err(|e: T::Err| CommandError::InvalidFilter(e.to_string()))
}

/// Filter `records` and render the survivors. Returns the CSV and row count.
fn render<T: CsvRecord, F: RecordFilter<T>>(records: &[T], filter: &F) -> (String, usize) {
    let kept = apply_filter(records, filter);
    (to_csv(kept.iter().copied()), kept.len())
}

/// Export `entity` to `output`, or stdout when no file is given.
///
/// # Errors
///
/// Returns `CommandError` if the backend cannot be reached, a filter value
/// is unknown, or the output cannot be written.
pub async fn run(
    entity: Entity,
    search: Option<&str>,
    status: Option<&str>,
    output: Option<&Path>,
) -> Result<(), CommandError> {
    let conn = connect()?;
    let client = &conn.client;
    let token = conn.token.as_str();
    let search = SearchQuery::from_param(search);

    let (csv, rows) = match entity {
        Entity::Customers => {
            let filter = CustomerFilter {
                search,
                status: status_facet(status)?,
                ..CustomerFilter::default()
            };
            render(&client.list_customers(token).await?, &filter)
        }
        Entity::Operators => {
            let filter = OperatorFilter {
                search,
                status: status_facet(status)?,
                ..OperatorFilter::default()
            };
            render(&client.list_operators(token).await?, &filter)
        }
        Entity::Technicians => {
            let filter = TechnicianFilter {
                search,
                status: status_facet(status)?,
                ..TechnicianFilter::default()
            };
            render(&client.list_technicians(token).await?, &filter)
        }
        Entity::Vendors => {
            let filter = VendorFilter {
                search,
                status: status_facet(status)?,
                ..VendorFilter::default()
            };
            render(&client.list_vendors(token).await?, &filter)
        }
        Entity::Invoices => {
            let filter = InvoiceFilter {
                search,
                status: status_facet(status)?,
            };
            render(&client.list_invoices(token).await?, &filter)
        }
        Entity::Complaints => {
            let filter = ComplaintFilter {
                search,
                status: status_facet(status)?,
                ..ComplaintFilter::default()
            };
            render(&client.list_complaints(token).await?, &filter)
        }
        Entity::Plans => {
            // Plans have a type instead of a status.
            let filter = PlanFilter {
                search,
                plan_type: status_facet(status)?,
            };
            render(&client.list_plans(token).await?, &filter)
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, &csv)?;
            tracing::info!(entity = entity.name(), rows, path = %path.display(), "Export written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(csv.as_bytes())?;
            stdout.flush()?;
            tracing::info!(entity = entity.name(), rows, "Export written to stdout");
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use isp_console_core::{ConnectionStatus, Customer, CustomerId};
    use rust_decimal::Decimal;

    use super::*;

    fn customer(id: &str, name: &str, status: ConnectionStatus) -> Customer {
        Customer {
            id: CustomerId::new(id),
            customer_id: id.to_string(),
            name: name.to_string(),
            connection_status: status,
            monthly_charges: Decimal::new(499, 0),
            ..Customer::default()
        }
    }

    #[test]
    fn test_render_applies_filter() {
        let customers = [
            customer("CUST-1", "Ravi Kumar", ConnectionStatus::Active),
            customer("CUST-2", "Meena, Iyer", ConnectionStatus::Suspended),
            customer("CUST-3", "Ravi Shankar", ConnectionStatus::Suspended),
        ];
        let filter = CustomerFilter {
            search: SearchQuery::from_param(Some("ravi")),
            status: status_facet(Some("suspended")).unwrap(),
            ..CustomerFilter::default()
        };

        let (csv, rows) = render(&customers, &filter);
        assert_eq!(rows, 1);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Customer ID,Name"));
        assert!(lines[1].starts_with("CUST-3,Ravi Shankar"));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<Facet<ConnectionStatus>, _> = status_facet(Some("frozen"));
        assert!(matches!(result, Err(CommandError::InvalidFilter(_))));
    }

    #[test]
    fn test_entity_names_match_export_filenames() {
        assert_eq!(Entity::Customers.name(), "customers");
        assert_eq!(Entity::Complaints.name(), "complaints");
    }
}
