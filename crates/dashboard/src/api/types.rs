//! Raw wire records as the ISP backend sends them.
//!
//! Every field is optional: the backend omits, nulls and renames fields
//! freely between endpoints. Every field goes through [`lenient`], so a
//! value of the wrong shape becomes `None` instead of failing the list it
//! arrived in. Statuses and dates stay strings here and are parsed leniently
//! in [`super::conversions`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Field deserializers that never reject a record.
pub(crate) mod lenient {
    use std::str::FromStr;

    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::{Decimal, RoundingStrategy};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn to_decimal(value: &Value) -> Option<Decimal> {
        let text = match value {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.trim().to_string(),
            _ => return None,
        };
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .ok()
    }

    /// Strings as-is; numbers and booleans as their JSON text.
    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    /// Anything that deserializes as `T`; other shapes become `None`.
    pub fn shaped<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: serde::de::DeserializeOwned,
    {
        Ok(T::deserialize(Value::deserialize(deserializer)?).ok())
    }

    /// Numbers or numeric strings.
    pub fn decimal<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error> {
        Ok(to_decimal(&Value::deserialize(deserializer)?))
    }

    /// Non-negative whole numbers; fractions round half away from zero and
    /// anything negative or out of range is dropped.
    pub fn count<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<u64>,
    {
        Ok(to_decimal(&Value::deserialize(deserializer)?)
            .map(|d| d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|d| d.to_u64())
            .and_then(|n| T::try_from(n).ok()))
    }
}

/// A response body that may or may not be wrapped in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// Error body shapes the backend uses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "error", alias = "detail")]
    message: String,
}

const MAX_ERROR_MESSAGE_LEN: usize = 200;

/// Pull a readable message out of an error response body.
pub fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "Unknown error".to_string();
    }
    trimmed.chars().take(MAX_ERROR_MESSAGE_LEN).collect()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawCustomer {
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "lenient::text")]
    pub object_id: Option<String>,
    #[serde(alias = "customer_id")]
    #[serde(deserialize_with = "lenient::text")]
    pub customer_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub plan: Option<String>,
    #[serde(alias = "status")]
    #[serde(deserialize_with = "lenient::text")]
    pub connection_status: Option<String>,
    #[serde(alias = "monthly_charges")]
    #[serde(deserialize_with = "lenient::decimal")]
    pub monthly_charges: Option<Decimal>,
    #[serde(alias = "outstanding_amount")]
    #[serde(deserialize_with = "lenient::decimal")]
    pub outstanding_amount: Option<Decimal>,
    #[serde(deserialize_with = "lenient::text")]
    pub address: Option<String>,
    #[serde(alias = "join_date")]
    #[serde(deserialize_with = "lenient::text")]
    pub join_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawAddress {
    #[serde(deserialize_with = "lenient::text")]
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub district: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub area: Option<String>,
}

/// Operator business details nested under `profileDetail`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawOperatorProfile {
    #[serde(deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub owner_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::shaped")]
    pub address: Option<RawAddress>,
    #[serde(deserialize_with = "lenient::text")]
    pub plan_assigned: Option<String>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub revenue: Option<Decimal>,
    #[serde(deserialize_with = "lenient::count")]
    pub customer_count: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub service_capacity: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawOperator {
    #[serde(rename = "user_id", alias = "userId")]
    #[serde(deserialize_with = "lenient::text")]
    pub user_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::shaped")]
    pub profile_detail: Option<RawOperatorProfile>,
    /// Permission flags; only those set to `true` are kept.
    #[serde(rename = "Permissions", alias = "permissions")]
    #[serde(deserialize_with = "lenient::shaped")]
    pub permissions: Option<BTreeMap<String, serde_json::Value>>,
    // Flat fallbacks for records without `profileDetail`
    #[serde(deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub owner_name: Option<String>,
    #[serde(deserialize_with = "lenient::shaped")]
    pub address: Option<RawAddress>,
    #[serde(deserialize_with = "lenient::text")]
    pub plan_assigned: Option<String>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub revenue: Option<Decimal>,
    #[serde(deserialize_with = "lenient::count")]
    pub customer_count: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub service_capacity: Option<u32>,
}

/// Employment details nested under `profileDetail`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTechnicianProfile {
    #[serde(deserialize_with = "lenient::text")]
    pub employee_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub department: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub position: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub assigned_area: Option<String>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub salary: Option<Decimal>,
    #[serde(deserialize_with = "lenient::text")]
    pub specialization: Option<String>,
    #[serde(deserialize_with = "lenient::shaped")]
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTechnician {
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "lenient::text")]
    pub object_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub employee_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub department: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub position: Option<String>,
    #[serde(alias = "area")]
    #[serde(deserialize_with = "lenient::text")]
    pub assigned_area: Option<String>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub salary: Option<Decimal>,
    #[serde(deserialize_with = "lenient::text")]
    pub specialization: Option<String>,
    #[serde(deserialize_with = "lenient::shaped")]
    pub skills: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::count")]
    pub experience_years: Option<u32>,
    #[serde(deserialize_with = "lenient::shaped")]
    pub profile_detail: Option<RawTechnicianProfile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawVendor {
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "lenient::text")]
    pub object_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub revenue: Option<Decimal>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub rating: Option<Decimal>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub commission: Option<Decimal>,
    #[serde(deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub products: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub orders: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawInvoice {
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "lenient::text")]
    pub object_id: Option<String>,
    #[serde(alias = "operatorName")]
    #[serde(deserialize_with = "lenient::text")]
    pub operator: Option<String>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub amount: Option<Decimal>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub gst: Option<Decimal>,
    #[serde(alias = "total_amount")]
    #[serde(deserialize_with = "lenient::decimal")]
    pub total_amount: Option<Decimal>,
    #[serde(alias = "issue_date")]
    #[serde(deserialize_with = "lenient::text")]
    pub issue_date: Option<String>,
    #[serde(alias = "due_date")]
    #[serde(deserialize_with = "lenient::text")]
    pub due_date: Option<String>,
    #[serde(alias = "paid_date")]
    #[serde(deserialize_with = "lenient::text")]
    pub paid_date: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawComplaint {
    #[serde(rename = "complaint_id", alias = "complaintId")]
    #[serde(deserialize_with = "lenient::text")]
    pub complaint_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient::text")]
    pub complaint_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub priority: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(alias = "customer_id")]
    #[serde(deserialize_with = "lenient::text")]
    pub customer_id: Option<String>,
    #[serde(alias = "technician_id")]
    #[serde(deserialize_with = "lenient::text")]
    pub technician_id: Option<String>,
    #[serde(alias = "created_at")]
    #[serde(deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
    #[serde(alias = "updated_at")]
    #[serde(deserialize_with = "lenient::text")]
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub rating: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPlan {
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "lenient::text")]
    pub object_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub speed: Option<String>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub price: Option<Decimal>,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient::text")]
    pub plan_type: Option<String>,
    #[serde(deserialize_with = "lenient::shaped")]
    pub features: Option<Vec<String>>,
    #[serde(alias = "max_connections")]
    #[serde(deserialize_with = "lenient::count")]
    pub max_connections: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub subscribers: Option<u32>,
    #[serde(alias = "data_limit")]
    #[serde(deserialize_with = "lenient::text")]
    pub data_limit: Option<String>,
}

/// Follow-up notes arrive either as plain strings or as note objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawNote {
    Text(String),
    Entry {
        #[serde(alias = "note", alias = "content")]
        text: String,
    },
}

impl RawNote {
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) | Self::Entry { text } => text,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawFollowUp {
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "lenient::text")]
    pub object_id: Option<String>,
    #[serde(alias = "customer_id")]
    #[serde(deserialize_with = "lenient::text")]
    pub customer_id: Option<String>,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient::text")]
    pub follow_up_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub priority: Option<String>,
    #[serde(alias = "scheduled_date")]
    #[serde(deserialize_with = "lenient::text")]
    pub scheduled_date: Option<String>,
    #[serde(alias = "due_date")]
    #[serde(deserialize_with = "lenient::text")]
    pub due_date: Option<String>,
    #[serde(alias = "assigned_to")]
    #[serde(deserialize_with = "lenient::text")]
    pub assigned_to: Option<String>,
    #[serde(deserialize_with = "lenient::shaped")]
    pub notes: Option<Vec<RawNote>>,
    #[serde(alias = "updated_at")]
    #[serde(deserialize_with = "lenient::text")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawUser {
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "lenient::text")]
    pub object_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawLoginResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub user: RawUser,
}

/// A point of a revenue or growth series. Label and value keys vary by
/// endpoint, so each spelling gets its own field.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSeriesPoint {
    #[serde(deserialize_with = "lenient::text")]
    pub period: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub month: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub value: Option<Decimal>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub revenue: Option<Decimal>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub customers: Option<Decimal>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub count: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPlanShare {
    #[serde(deserialize_with = "lenient::text")]
    pub plan: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub subscribers: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub count: Option<u64>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub percentage: Option<Decimal>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_accepts_wrapped_and_bare_lists() {
        let wrapped: Envelope<Vec<RawPlan>> =
            serde_json::from_str(r#"{"data":[{"id":"p1","name":"Fiber 100"}]}"#).unwrap();
        let bare: Envelope<Vec<RawPlan>> =
            serde_json::from_str(r#"[{"id":"p1","name":"Fiber 100"}]"#).unwrap();

        let wrapped = wrapped.into_inner();
        let bare = bare.into_inner();
        assert_eq!(wrapped.len(), 1);
        assert_eq!(bare.len(), 1);
        assert_eq!(wrapped[0].name.as_deref(), Some("Fiber 100"));
        assert_eq!(bare[0].id.as_deref(), Some("p1"));
    }

    #[test]
    fn test_envelope_accepts_wrapped_record() {
        let envelope: Envelope<RawComplaint> =
            serde_json::from_str(r#"{"data":{"complaint_id":"C-7","type":"No signal"}}"#)
                .unwrap();
        let complaint = envelope.into_inner();
        assert_eq!(complaint.complaint_id.as_deref(), Some("C-7"));
        assert_eq!(complaint.complaint_type.as_deref(), Some("No signal"));
    }

    #[test]
    fn test_operator_profile_and_permissions() {
        let raw: RawOperator = serde_json::from_str(
            r#"{
                "user_id": "op-1",
                "status": "active",
                "profileDetail": {
                    "companyName": "Skyline Net",
                    "address": {"state": "Kerala", "district": "Ernakulam", "area": "Kakkanad"},
                    "customerCount": 120,
                    "serviceCapacity": 200,
                    "revenue": "45000.50"
                },
                "Permissions": {"billing": true, "complaints": false}
            }"#,
        )
        .unwrap();

        let profile = raw.profile_detail.unwrap();
        assert_eq!(profile.company_name.as_deref(), Some("Skyline Net"));
        assert_eq!(profile.customer_count, Some(120));
        assert_eq!(profile.revenue, Some(Decimal::new(4_500_050, 2)));
        assert_eq!(raw.permissions.unwrap().len(), 2);
    }

    #[test]
    fn test_money_fields_accept_numbers_and_strings() {
        let raw: RawCustomer =
            serde_json::from_str(r#"{"monthlyCharges": 999, "outstandingAmount": "120.75"}"#)
                .unwrap();
        assert_eq!(raw.monthly_charges, Some(Decimal::from(999)));
        assert_eq!(raw.outstanding_amount, Some(Decimal::new(12075, 2)));
    }

    #[test]
    fn test_one_malformed_record_does_not_fail_the_list() {
        let list: Envelope<Vec<RawComplaint>> = serde_json::from_str(
            r#"[
                {"complaint_id": "C-1", "rating": 5},
                {"complaint_id": "C-2", "rating": 4.5},
                {"complaint_id": "C-3", "rating": "lots", "status": 3},
                {"complaint_id": "C-4", "rating": -1, "priority": ["high"]}
            ]"#,
        )
        .unwrap();

        let list = list.into_inner();
        assert_eq!(list.len(), 4);
        let ratings: Vec<Option<u8>> = list.iter().map(|c| c.rating).collect();
        assert_eq!(ratings, vec![Some(5), Some(5), None, None]);
        assert_eq!(list[2].status.as_deref(), Some("3"));
        assert_eq!(list[3].priority, None);
    }

    #[test]
    fn test_counts_accept_strings_and_drop_nonsense() {
        let plans: Envelope<Vec<RawPlan>> = serde_json::from_str(
            r#"{"data": [
                {"id": "p1", "maxConnections": "5", "subscribers": 12},
                {"id": "p2", "maxConnections": 1e12, "subscribers": {"n": 1}}
            ]}"#,
        )
        .unwrap();
        let plans = plans.into_inner();
        assert_eq!(plans[0].max_connections, Some(5));
        assert_eq!(plans[0].subscribers, Some(12));
        assert_eq!(plans[1].max_connections, None);
        assert_eq!(plans[1].subscribers, None);

        let vendor: RawVendor =
            serde_json::from_str(r#"{"products": "40", "orders": -3, "revenue": "n/a"}"#).unwrap();
        assert_eq!(vendor.products, Some(40));
        assert_eq!(vendor.orders, None);
        assert_eq!(vendor.revenue, None);
    }

    #[test]
    fn test_misshapen_nested_fields_become_none() {
        let raw: RawOperator = serde_json::from_str(
            r#"{"user_id": "op-9", "address": "Kochi", "Permissions": [1, 2]}"#,
        )
        .unwrap();
        assert_eq!(raw.user_id.as_deref(), Some("op-9"));
        assert!(raw.address.is_none());
        assert!(raw.permissions.is_none());

        let raw: RawTechnician =
            serde_json::from_str(r#"{"skills": "fiber splicing", "profileDetail": 7}"#).unwrap();
        assert!(raw.skills.is_none());
        assert!(raw.profile_detail.is_none());
    }

    #[test]
    fn test_numeric_phone_is_kept_as_text() {
        let raw: RawCustomer = serde_json::from_str(r#"{"phone": 9845012345}"#).unwrap();
        assert_eq!(raw.phone.as_deref(), Some("9845012345"));
    }

    #[test]
    fn test_notes_accept_strings_and_objects() {
        let raw: RawFollowUp =
            serde_json::from_str(r#"{"notes": ["called", {"text": "no answer"}]}"#).unwrap();
        let notes: Vec<String> = raw
            .notes
            .unwrap()
            .into_iter()
            .map(RawNote::into_text)
            .collect();
        assert_eq!(notes, vec!["called", "no answer"]);
    }

    #[test]
    fn test_error_message_prefers_json_message() {
        assert_eq!(error_message(r#"{"message":"plan not found"}"#), "plan not found");
        assert_eq!(error_message(r#"{"error":"bad token"}"#), "bad token");
        assert_eq!(error_message("  gateway timeout  "), "gateway timeout");
        assert_eq!(error_message(""), "Unknown error");
    }
}
