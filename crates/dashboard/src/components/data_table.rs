//! Data table configurations.
//!
//! Each list page renders from one of these: its columns (and which of them
//! sort), its facet filters with their allowed values, and the row actions
//! the page offers. Column keys are the `sort` values the list endpoint
//! accepts; filter keys are its query parameters.

use isp_console_core::{
    ComplaintStatus, ConnectionStatus, FollowUpStatus, InvoiceStatus, OperatorStatus, PlanType,
    Priority, TechnicianStatus, VendorStatus,
};
use serde::Serialize;

/// Column definition for a data table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub default_visible: bool,
}

impl TableColumn {
    /// A sortable column.
    #[must_use]
    pub const fn sortable(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
            default_visible: true,
        }
    }

    /// A display-only column.
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
            default_visible: true,
        }
    }

    /// Hide the column until the user picks it.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.default_visible = false;
        self
    }
}

/// How a filter is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Dropdown with an "All" entry first.
    Select,
    /// A pair of selects bounding an ordered scale (`min_*` / `max_*`).
    Range,
    /// Free text matched exactly.
    Text,
}

/// Option for select and range filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    /// The "no filter" option.
    #[must_use]
    pub fn all() -> Self {
        Self {
            value: "all".to_string(),
            label: "All".to_string(),
        }
    }

    /// One option per value, labelled in title case.
    pub fn from_values<T: ToString>(values: &[T]) -> Vec<Self> {
        values
            .iter()
            .map(|v| {
                let value = v.to_string();
                Self {
                    label: title_case(&value),
                    value,
                }
            })
            .collect()
    }
}

/// `in-progress` -> `In Progress`, `by mistake` -> `By Mistake`.
fn title_case(value: &str) -> String {
    value
        .split(['-', ' ', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Filter definition for a data table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableFilter {
    /// Query parameter key.
    pub key: &'static str,
    pub label: &'static str,
    pub filter_type: FilterType,
    pub options: Vec<FilterOption>,
}

impl TableFilter {
    /// A select over fixed values, with "All" first.
    #[must_use]
    pub fn select<T: ToString>(key: &'static str, label: &'static str, values: &[T]) -> Self {
        let mut options = vec![FilterOption::all()];
        options.extend(FilterOption::from_values(values));
        Self {
            key,
            label,
            filter_type: FilterType::Select,
            options,
        }
    }

    /// A range over an ordered scale; `key` is suffixed with `min_`/`max_`.
    #[must_use]
    pub fn range<T: ToString>(key: &'static str, label: &'static str, values: &[T]) -> Self {
        Self {
            key,
            label,
            filter_type: FilterType::Range,
            options: FilterOption::from_values(values),
        }
    }

    /// A free-text facet whose values come from the data (plan, state...).
    #[must_use]
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            filter_type: FilterType::Text,
            options: Vec::new(),
        }
    }
}

/// A per-row action and the endpoint it calls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowAction {
    pub key: &'static str,
    pub label: &'static str,
    pub method: &'static str,
    /// Endpoint with `{id}` standing for the row id.
    pub path: &'static str,
    /// Ask for confirmation first.
    pub destructive: bool,
}

impl RowAction {
    /// A `POST` action.
    #[must_use]
    pub const fn post(key: &'static str, label: &'static str, path: &'static str) -> Self {
        Self {
            key,
            label,
            method: "POST",
            path,
            destructive: false,
        }
    }

    /// A `DELETE` action; always destructive.
    #[must_use]
    pub const fn delete(label: &'static str, path: &'static str) -> Self {
        Self {
            key: "delete",
            label,
            method: "DELETE",
            path,
            destructive: true,
        }
    }

    /// Mark this action as destructive.
    #[must_use]
    pub const fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTableConfig {
    pub table_id: &'static str,
    /// List endpoint.
    pub endpoint: &'static str,
    /// CSV export endpoint, if the table offers one.
    pub export_endpoint: Option<&'static str>,
    pub columns: Vec<TableColumn>,
    pub filters: Vec<TableFilter>,
    pub row_actions: Vec<RowAction>,
    pub search_placeholder: &'static str,
    pub empty_title: &'static str,
}

impl DataTableConfig {
    /// Start a table served from `endpoint`.
    #[must_use]
    pub const fn new(table_id: &'static str, endpoint: &'static str) -> Self {
        Self {
            table_id,
            endpoint,
            export_endpoint: None,
            columns: Vec::new(),
            filters: Vec::new(),
            row_actions: Vec::new(),
            search_placeholder: "Search...",
            empty_title: "Nothing found",
        }
    }

    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn action(mut self, action: RowAction) -> Self {
        self.row_actions.push(action);
        self
    }

    #[must_use]
    pub const fn export(mut self, endpoint: &'static str) -> Self {
        self.export_endpoint = Some(endpoint);
        self
    }

    #[must_use]
    pub const fn search_placeholder(mut self, placeholder: &'static str) -> Self {
        self.search_placeholder = placeholder;
        self
    }

    #[must_use]
    pub const fn empty_title(mut self, title: &'static str) -> Self {
        self.empty_title = title;
        self
    }

    /// Keys of the columns shown before the user changes anything.
    #[must_use]
    pub fn default_columns(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter(|c| c.default_visible)
            .map(|c| c.key)
            .collect()
    }
}

/// Every table the console knows.
pub const TABLE_IDS: &[&str] = &[
    "customers",
    "operators",
    "technicians",
    "vendors",
    "invoices",
    "complaints",
    "plans",
    "follow-ups",
];

/// Look up a table configuration by id.
#[must_use]
pub fn table_config(table_id: &str) -> Option<DataTableConfig> {
    match table_id {
        "customers" => Some(customers_table_config()),
        "operators" => Some(operators_table_config()),
        "technicians" => Some(technicians_table_config()),
        "vendors" => Some(vendors_table_config()),
        "invoices" => Some(invoices_table_config()),
        "complaints" => Some(complaints_table_config()),
        "plans" => Some(plans_table_config()),
        "follow-ups" => Some(follow_ups_table_config()),
        _ => None,
    }
}

/// Build the customers table configuration.
#[must_use]
pub fn customers_table_config() -> DataTableConfig {
    DataTableConfig::new("customers", "/api/customers")
        .export("/api/customers/export")
        .column(TableColumn::sortable("customer_id", "Customer ID"))
        .column(TableColumn::sortable("name", "Name"))
        .column(TableColumn::new("email", "Email"))
        .column(TableColumn::new("phone", "Phone").hidden())
        .column(TableColumn::sortable("plan", "Plan"))
        .column(TableColumn::sortable("status", "Status"))
        .column(TableColumn::sortable("monthly_charges", "Monthly Charges"))
        .column(TableColumn::sortable("outstanding", "Outstanding"))
        .column(TableColumn::new("address", "Address").hidden())
        .column(TableColumn::sortable("join_date", "Join Date").hidden())
        .filter(TableFilter::select("status", "Status", ConnectionStatus::ALL))
        .filter(TableFilter::text("plan", "Plan"))
        .action(RowAction::post("suspend", "Suspend", "/api/customers/{id}/suspend").destructive())
        .action(RowAction::post("activate", "Activate", "/api/customers/{id}/activate"))
        .action(RowAction::delete("Delete", "/api/customers/{id}"))
        .search_placeholder("Search by name, email, phone or customer ID...")
        .empty_title("No customers found")
}

/// Build the operators table configuration.
#[must_use]
pub fn operators_table_config() -> DataTableConfig {
    DataTableConfig::new("operators", "/api/operators")
        .export("/api/operators/export")
        .column(TableColumn::sortable("company", "Company"))
        .column(TableColumn::sortable("owner", "Owner"))
        .column(TableColumn::new("email", "Email").hidden())
        .column(TableColumn::sortable("state", "State"))
        .column(TableColumn::new("plan", "Plan"))
        .column(TableColumn::sortable("customers", "Customers"))
        .column(TableColumn::sortable("utilization", "Capacity"))
        .column(TableColumn::sortable("revenue", "Revenue"))
        .column(TableColumn::sortable("status", "Status"))
        .filter(TableFilter::select("status", "Status", OperatorStatus::ALL))
        .filter(TableFilter::text("state", "State"))
        .filter(TableFilter::text("plan", "Plan"))
        .action(RowAction::post("suspend", "Suspend", "/api/operators/{id}/suspend").destructive())
        .action(RowAction::post("activate", "Activate", "/api/operators/{id}/activate"))
        .action(RowAction::delete("Delete profile", "/api/operators/{id}"))
        .search_placeholder("Search by company, owner, email, phone or location...")
        .empty_title("No operators found")
}

/// Build the technicians table configuration.
#[must_use]
pub fn technicians_table_config() -> DataTableConfig {
    DataTableConfig::new("technicians", "/api/technicians")
        .export("/api/technicians/export")
        .column(TableColumn::sortable("employee_id", "Employee ID"))
        .column(TableColumn::sortable("name", "Name"))
        .column(TableColumn::sortable("department", "Department"))
        .column(TableColumn::new("position", "Position"))
        .column(TableColumn::sortable("area", "Area"))
        .column(TableColumn::sortable("salary", "Salary").hidden())
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("skills", "Skills").hidden())
        .filter(TableFilter::select("status", "Status", TechnicianStatus::ALL))
        .filter(TableFilter::text("department", "Department"))
        .action(RowAction::delete("Remove", "/api/technicians/{id}"))
        .search_placeholder("Search by name, email, employee ID or area...")
        .empty_title("No technicians found")
}

/// Build the vendors table configuration.
#[must_use]
pub fn vendors_table_config() -> DataTableConfig {
    DataTableConfig::new("vendors", "/api/vendors")
        .export("/api/vendors/export")
        .column(TableColumn::sortable("name", "Vendor"))
        .column(TableColumn::sortable("category", "Category"))
        .column(TableColumn::new("products", "Products"))
        .column(TableColumn::sortable("orders", "Orders"))
        .column(TableColumn::sortable("revenue", "Revenue"))
        .column(TableColumn::new("commission", "Commission %"))
        .column(TableColumn::sortable("rating", "Rating"))
        .column(TableColumn::new("status", "Status"))
        .filter(TableFilter::select("status", "Status", VendorStatus::ALL))
        .filter(TableFilter::text("category", "Category"))
        .action(RowAction::post("approve", "Approve", "/api/vendors/{id}/approve"))
        .action(RowAction::post("reject", "Reject", "/api/vendors/{id}/reject").destructive())
        .action(RowAction::post("suspend", "Suspend", "/api/vendors/{id}/suspend").destructive())
        .search_placeholder("Search by name, email or category...")
        .empty_title("No vendors found")
}

/// Build the invoices table configuration.
#[must_use]
pub fn invoices_table_config() -> DataTableConfig {
    DataTableConfig::new("invoices", "/api/invoices")
        .export("/api/invoices/export")
        .column(TableColumn::new("id", "Invoice ID"))
        .column(TableColumn::sortable("operator", "Operator"))
        .column(TableColumn::new("amount", "Amount").hidden())
        .column(TableColumn::new("gst", "GST").hidden())
        .column(TableColumn::sortable("total", "Total"))
        .column(TableColumn::sortable("issue_date", "Issue Date"))
        .column(TableColumn::sortable("due_date", "Due Date"))
        .column(TableColumn::sortable("status", "Status"))
        .filter(TableFilter::select("status", "Status", InvoiceStatus::ALL))
        .search_placeholder("Search by invoice ID or operator...")
        .empty_title("No invoices found")
}

/// Build the complaints table configuration.
#[must_use]
pub fn complaints_table_config() -> DataTableConfig {
    DataTableConfig::new("complaints", "/api/complaints")
        .export("/api/complaints/export")
        .column(TableColumn::new("id", "Complaint ID"))
        .column(TableColumn::new("type", "Type"))
        .column(TableColumn::new("description", "Description"))
        .column(TableColumn::sortable("priority", "Priority"))
        .column(TableColumn::sortable("status", "Status"))
        .column(TableColumn::new("technician", "Technician").hidden())
        .column(TableColumn::sortable("created", "Created"))
        .column(TableColumn::sortable("updated", "Updated").hidden())
        .column(TableColumn::sortable("rating", "Rating").hidden())
        .filter(TableFilter::select("status", "Status", ComplaintStatus::ALL))
        .filter(TableFilter::text("type", "Type"))
        .filter(TableFilter::range("priority", "Priority", Priority::ALL))
        .filter(TableFilter::text("technician", "Technician"))
        .search_placeholder("Search by complaint ID, description or type...")
        .empty_title("No complaints found")
}

/// Build the plans table configuration.
#[must_use]
pub fn plans_table_config() -> DataTableConfig {
    DataTableConfig::new("plans", "/api/plans")
        .export("/api/plans/export")
        .column(TableColumn::sortable("name", "Name"))
        .column(TableColumn::new("speed", "Speed"))
        .column(TableColumn::new("type", "Type"))
        .column(TableColumn::sortable("price", "Price"))
        .column(TableColumn::new("max_connections", "Max Connections").hidden())
        .column(TableColumn::sortable("subscribers", "Subscribers"))
        .column(TableColumn::sortable("revenue", "Revenue"))
        .filter(TableFilter::select("type", "Type", PlanType::ALL))
        .search_placeholder("Search by name or speed...")
        .empty_title("No plans found")
}

/// Build the follow-ups table configuration.
#[must_use]
pub fn follow_ups_table_config() -> DataTableConfig {
    DataTableConfig::new("follow-ups", "/api/follow-ups")
        .column(TableColumn::new("title", "Title"))
        .column(TableColumn::new("customer_id", "Customer"))
        .column(TableColumn::new("type", "Type"))
        .column(TableColumn::sortable("priority", "Priority"))
        .column(TableColumn::sortable("scheduled", "Scheduled").hidden())
        .column(TableColumn::sortable("due", "Due"))
        .column(TableColumn::sortable("assignee", "Assigned To"))
        .column(TableColumn::new("status", "Status"))
        .filter(TableFilter::select("status", "Status", FollowUpStatus::ALL))
        .filter(TableFilter::text("type", "Type"))
        .filter(TableFilter::select("priority", "Priority", Priority::ALL))
        .search_placeholder("Search by title, customer or assignee...")
        .empty_title("No follow-ups found")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use isp_console_core::{
        ComplaintSortKey, CustomerSortKey, FollowUpSortKey, InvoiceSortKey, OperatorSortKey,
        PlanSortKey, TechnicianSortKey, VendorSortKey,
    };

    use super::*;

    #[test]
    fn test_every_table_id_resolves() {
        for id in TABLE_IDS {
            let config = table_config(id).unwrap();
            assert_eq!(config.table_id, *id);
            assert!(!config.columns.is_empty());
        }
        assert!(table_config("payouts").is_none());
    }

    #[test]
    fn test_sortable_columns_are_accepted_sort_keys() {
        let parses = |table: &str, key: &str| match table {
            "customers" => CustomerSortKey::from_str_param(key).is_some(),
            "operators" => OperatorSortKey::from_str_param(key).is_some(),
            "technicians" => TechnicianSortKey::from_str_param(key).is_some(),
            "vendors" => VendorSortKey::from_str_param(key).is_some(),
            "invoices" => InvoiceSortKey::from_str_param(key).is_some(),
            "complaints" => ComplaintSortKey::from_str_param(key).is_some(),
            "plans" => PlanSortKey::from_str_param(key).is_some(),
            "follow-ups" => FollowUpSortKey::from_str_param(key).is_some(),
            _ => false,
        };

        for id in TABLE_IDS {
            let config = table_config(id).unwrap();
            for column in config.columns.iter().filter(|c| c.sortable) {
                assert!(parses(id, column.key), "{id}: {}", column.key);
            }
        }
    }

    #[test]
    fn test_select_filter_starts_with_all() {
        let filter = TableFilter::select("status", "Status", ComplaintStatus::ALL);
        assert_eq!(filter.options[0], FilterOption::all());
        assert_eq!(filter.options.len(), ComplaintStatus::ALL.len() + 1);
        assert!(
            filter
                .options
                .iter()
                .any(|o| o.value == "by mistake" && o.label == "By Mistake")
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("in-progress"), "In Progress");
        assert_eq!(title_case("active"), "Active");
    }

    #[test]
    fn test_default_columns_skip_hidden() {
        let config = customers_table_config();
        let defaults = config.default_columns();
        assert!(defaults.contains(&"name"));
        assert!(!defaults.contains(&"phone"));
    }
}
