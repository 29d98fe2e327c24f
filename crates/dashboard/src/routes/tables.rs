//! Table configuration lookup for the front end.

use axum::{Json, extract::Path};

use crate::components::{DataTableConfig, table_config};
use crate::error::AppError;
use crate::middleware::RequireAuth;

pub async fn show(
    RequireAuth(_user): RequireAuth,
    Path(table_id): Path<String>,
) -> Result<Json<DataTableConfig>, AppError> {
    table_config(&table_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Table {table_id}")))
}
