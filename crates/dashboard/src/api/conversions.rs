//! Conversions from raw wire records to the console's view models.
//!
//! Missing fields become empty strings, zero amounts or `None`. Statuses
//! that do not parse fall back to the enum's default and are logged, so one
//! odd record never fails a whole list.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use isp_console_core::analytics::{PlanShare, TimeSeriesPoint, fill_plan_percentages};
use isp_console_core::{
    Complaint, ComplaintId, Customer, CustomerId, Email, FollowUp, FollowUpId, Invoice, InvoiceId,
    Operator, OperatorAddress, OperatorId, Plan, PlanId, Role, Technician, TechnicianId, UserId,
    Vendor, VendorId,
};

use super::auth::LoginResult;
use super::types::{
    RawAddress, RawComplaint, RawCustomer, RawFollowUp, RawInvoice, RawLoginResponse, RawNote,
    RawOperator, RawPlan, RawPlanShare, RawSeriesPoint, RawTechnician, RawVendor,
};
use super::IspApiError;

/// Parse a status-like field, falling back to the default on unknown input.
fn lenient<S>(field: &'static str, value: Option<&str>) -> S
where
    S: FromStr + Default,
    S::Err: std::fmt::Display,
{
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return S::default();
    };
    value.parse().unwrap_or_else(|e| {
        tracing::warn!(field, error = %e, "Unrecognised value from ISP backend, using default");
        S::default()
    })
}

/// Parse a calendar date from RFC 3339, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .ok()
}

/// Parse a timestamp; bare dates are taken as midnight UTC.
pub fn parse_datetime(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
}

fn text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Convert a customer record.
pub fn convert_customer(raw: RawCustomer) -> Customer {
    let id = text(raw.id.or(raw.object_id));
    Customer {
        customer_id: non_blank(raw.customer_id).unwrap_or_else(|| id.clone()),
        id: CustomerId::new(id),
        name: text(raw.name),
        email: Email::parse_optional(raw.email.as_deref()),
        phone: text(raw.phone),
        plan: text(raw.plan),
        connection_status: lenient("customer.connectionStatus", raw.connection_status.as_deref()),
        monthly_charges: raw.monthly_charges.unwrap_or_default(),
        outstanding_amount: raw.outstanding_amount.unwrap_or_default(),
        address: text(raw.address),
        join_date: parse_date(raw.join_date.as_deref()),
    }
}

fn convert_address(raw: Option<RawAddress>) -> OperatorAddress {
    let raw = raw.unwrap_or_default();
    OperatorAddress {
        state: text(raw.state),
        district: text(raw.district),
        area: text(raw.area),
    }
}

/// Convert an operator record, flattening `profileDetail` and `Permissions`.
///
/// Profile values win over top-level ones when both are present.
pub fn convert_operator(raw: RawOperator) -> Operator {
    let profile = raw.profile_detail.unwrap_or_default();
    let permissions = raw
        .permissions
        .unwrap_or_default()
        .into_iter()
        .filter(|(_, granted)| granted.as_bool().unwrap_or(false))
        .map(|(name, _)| name)
        .collect();

    Operator {
        id: OperatorId::new(text(raw.user_id)),
        company_name: text(profile.company_name.or(raw.company_name)),
        owner_name: text(profile.owner_name.or(raw.owner_name)),
        phone: text(profile.phone.or(raw.phone)),
        email: Email::parse_optional(raw.email.as_deref()),
        address: convert_address(profile.address.or(raw.address)),
        plan_assigned: text(profile.plan_assigned.or(raw.plan_assigned)),
        revenue: profile.revenue.or(raw.revenue).unwrap_or_default(),
        customer_count: profile.customer_count.or(raw.customer_count).unwrap_or(0),
        service_capacity: profile.service_capacity.or(raw.service_capacity).unwrap_or(0),
        status: lenient("operator.status", raw.status.as_deref()),
        permissions,
    }
}

/// Convert a technician record.
///
/// Department, position and skills the backend leaves blank are inferred
/// from the specialization.
pub fn convert_technician(raw: RawTechnician) -> Technician {
    let profile = raw.profile_detail.unwrap_or_default();
    let mut technician = Technician {
        id: TechnicianId::new(text(raw.id.or(raw.object_id))),
        name: text(raw.name),
        email: Email::parse_optional(raw.email.as_deref()),
        phone: text(raw.phone),
        employee_id: text(raw.employee_id.or(profile.employee_id)),
        department: text(raw.department.or(profile.department)),
        position: text(raw.position.or(profile.position)),
        assigned_area: text(raw.assigned_area.or(profile.assigned_area)),
        salary: raw.salary.or(profile.salary).unwrap_or_default(),
        status: lenient("technician.status", raw.status.as_deref()),
        skills: raw.skills.or(profile.skills).unwrap_or_default(),
        specialization: text(raw.specialization.or(profile.specialization)),
        experience_years: raw.experience_years,
    };
    technician.fill_inferred_profile();
    technician
}

/// Convert a vendor record.
pub fn convert_vendor(raw: RawVendor) -> Vendor {
    Vendor {
        id: VendorId::new(text(raw.id.or(raw.object_id))),
        name: text(raw.name),
        email: Email::parse_optional(raw.email.as_deref()),
        category: text(raw.category),
        revenue: raw.revenue.unwrap_or_default(),
        rating: raw.rating.unwrap_or_default(),
        commission: raw.commission.unwrap_or_default(),
        status: lenient("vendor.status", raw.status.as_deref()),
        products: raw.products.unwrap_or(0),
        orders: raw.orders.unwrap_or(0),
    }
}

/// Convert an invoice record. A missing total is amount plus GST.
pub fn convert_invoice(raw: RawInvoice) -> Invoice {
    let amount = raw.amount.unwrap_or_default();
    let gst = raw.gst.unwrap_or_default();
    Invoice {
        id: InvoiceId::new(text(raw.id.or(raw.object_id))),
        operator: text(raw.operator),
        amount,
        gst,
        total_amount: raw.total_amount.unwrap_or(amount + gst),
        issue_date: parse_date(raw.issue_date.as_deref()),
        due_date: parse_date(raw.due_date.as_deref()),
        paid_date: parse_date(raw.paid_date.as_deref()),
        status: lenient("invoice.status", raw.status.as_deref()),
    }
}

/// Convert a complaint record.
pub fn convert_complaint(raw: RawComplaint) -> Complaint {
    Complaint {
        id: ComplaintId::new(text(raw.complaint_id)),
        description: text(raw.description),
        complaint_type: text(raw.complaint_type),
        priority: lenient("complaint.priority", raw.priority.as_deref()),
        status: lenient("complaint.status", raw.status.as_deref()),
        customer_id: non_blank(raw.customer_id).map(CustomerId::new),
        technician_id: non_blank(raw.technician_id).map(TechnicianId::new),
        created_at: parse_datetime(raw.created_at.as_deref()),
        updated_at: parse_datetime(raw.updated_at.as_deref()),
        rating: raw.rating.filter(|r| (1..=5).contains(r)),
    }
}

/// Convert a plan record.
pub fn convert_plan(raw: RawPlan) -> Plan {
    Plan {
        id: PlanId::new(text(raw.id.or(raw.object_id))),
        name: text(raw.name),
        speed: text(raw.speed),
        price: raw.price.unwrap_or_default(),
        plan_type: lenient("plan.type", raw.plan_type.as_deref()),
        features: raw.features.unwrap_or_default(),
        max_connections: raw.max_connections.unwrap_or(0),
        subscribers: raw.subscribers.unwrap_or(0),
        data_limit: non_blank(raw.data_limit),
    }
}

/// Convert a follow-up record.
pub fn convert_follow_up(raw: RawFollowUp) -> FollowUp {
    FollowUp {
        id: FollowUpId::new(text(raw.id.or(raw.object_id))),
        customer_id: CustomerId::new(text(raw.customer_id)),
        follow_up_type: text(raw.follow_up_type),
        title: text(raw.title),
        status: lenient("followUp.status", raw.status.as_deref()),
        priority: lenient("followUp.priority", raw.priority.as_deref()),
        scheduled_date: parse_date(raw.scheduled_date.as_deref()),
        due_date: parse_date(raw.due_date.as_deref()),
        assigned_to: text(raw.assigned_to),
        notes: raw
            .notes
            .unwrap_or_default()
            .into_iter()
            .map(RawNote::into_text)
            .collect(),
        updated_at: parse_datetime(raw.updated_at.as_deref()),
    }
}

/// Convert a login response.
///
/// # Errors
///
/// Returns `IspApiError::Parse` if the user has no id or an unknown role.
pub fn convert_login(raw: RawLoginResponse) -> Result<LoginResult, IspApiError> {
    let user = raw.user;
    let id = non_blank(user.id.or(user.object_id))
        .ok_or_else(|| IspApiError::Parse("login response has no user id".to_string()))?;
    let role: Role = user
        .role
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|e| IspApiError::Parse(format!("login response: {e}")))?;

    Ok(LoginResult {
        token: raw.token,
        user_id: UserId::new(id),
        name: text(user.name),
        email: Email::parse_optional(user.email.as_deref()),
        role,
    })
}

/// Convert a revenue or growth series.
pub fn convert_series(raw: Vec<RawSeriesPoint>) -> Vec<TimeSeriesPoint> {
    raw.into_iter()
        .map(|p| TimeSeriesPoint {
            period: text(p.period.or(p.month).or(p.date)),
            value: p
                .value
                .or(p.revenue)
                .or(p.customers)
                .or(p.count)
                .unwrap_or_default(),
        })
        .collect()
}

/// Convert a plan distribution, computing missing percentages.
pub fn convert_plan_distribution(raw: Vec<RawPlanShare>) -> Vec<PlanShare> {
    let mut shares: Vec<PlanShare> = raw
        .into_iter()
        .map(|s| PlanShare {
            plan: text(s.plan.or(s.name)),
            subscribers: s.subscribers.or(s.count).unwrap_or(0),
            percentage: s.percentage.unwrap_or_default(),
        })
        .collect();
    fill_plan_percentages(&mut shares);
    shares
}
