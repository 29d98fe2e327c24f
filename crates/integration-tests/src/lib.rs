//! End-to-end test harness for the ISP console dashboard.
//!
//! [`TestContext`] serves the real router on an ephemeral port, backed by a
//! [`FakeBackend`] holding seeded records. Tests talk to it over HTTP with a
//! cookie-keeping `reqwest` client, exactly as a browser session would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p isp-console-integration-tests
//! ```
//!
//! # Seeded logins
//!
//! | Email | Password | Role | User id |
//! |---|---|---|---|
//! | `admin@fibernet.in` | `admin-pass` | admin | `u-admin` |
//! | `staff@fibernet.in` | `staff-pass` | staff | `u-staff` |
//! | `operator@fibernet.in` | `operator-pass` | operator | `op-1` |
//! | `tech@fibernet.in` | `tech-pass` | technician | `t-1` |
//! | `ravi@example.in` | `ravi-pass` | customer | `c-1` |

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use isp_console_core::analytics::{
    AnalyticsOverview, PlanShare, ReportHandle, ReportRequest, ReportSchedule, TimeRange,
    TimeSeriesPoint,
};
use isp_console_core::workflow::{StatusTracked, apply_status_change};
use isp_console_core::{
    Complaint, ComplaintId, ComplaintStatus, ConnectionStatus, Customer, CustomerId,
    CustomerUpdate, Email, FollowUp, FollowUpId, FollowUpStatus, Invoice, InvoiceId,
    InvoiceStatus, NewComplaint, Operator, OperatorAddress, OperatorId, OperatorStatus, Plan,
    PlanId, PlanType, Priority, Role, Technician, TechnicianId, TechnicianStatus, UserId, Vendor,
    VendorId, VendorStatus, VendorUpdate,
};
use isp_console_dashboard::api::{IspApiError, LoginResult};
use isp_console_dashboard::backend::IspBackend;
use isp_console_dashboard::build_router;
use isp_console_dashboard::config::{DashboardConfig, IspApiConfig};
use isp_console_dashboard::state::AppState;
use rust_decimal::Decimal;
use serde_json::{Value, json};

/// Everything the fake backend serves.
#[derive(Debug, Clone, Default)]
pub struct FakeData {
    pub customers: Vec<Customer>,
    pub operators: Vec<Operator>,
    pub technicians: Vec<Technician>,
    pub vendors: Vec<Vendor>,
    pub invoices: Vec<Invoice>,
    pub complaints: Vec<Complaint>,
    pub plans: Vec<Plan>,
    pub follow_ups: Vec<FollowUp>,
}

struct Account {
    email: &'static str,
    password: &'static str,
    user_id: &'static str,
    name: &'static str,
    role: Role,
}

const ACCOUNTS: &[Account] = &[
    Account {
        email: "admin@fibernet.in",
        password: "admin-pass",
        user_id: "u-admin",
        name: "Anita Desai",
        role: Role::Admin,
    },
    Account {
        email: "staff@fibernet.in",
        password: "staff-pass",
        user_id: "u-staff",
        name: "Suresh Nair",
        role: Role::Staff,
    },
    Account {
        email: "operator@fibernet.in",
        password: "operator-pass",
        user_id: "op-1",
        name: "Kiran Broadband",
        role: Role::Operator,
    },
    Account {
        email: "tech@fibernet.in",
        password: "tech-pass",
        user_id: "t-1",
        name: "Imran Sheikh",
        role: Role::Technician,
    },
    Account {
        email: "ravi@example.in",
        password: "ravi-pass",
        user_id: "c-1",
        name: "Ravi Kumar",
        role: Role::Customer,
    },
];

/// An in-memory [`IspBackend`].
///
/// Mutations change the stored records, so a refetch sees them. Any list
/// endpoint can be made to fail with [`FakeBackend::fail`], and every
/// mutation is recorded in order.
pub struct FakeBackend {
    data: Mutex<FakeData>,
    failing: Mutex<HashSet<&'static str>>,
    mutations: Mutex<Vec<String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().expect("fake backend lock poisoned")
}

fn not_found(what: &str, id: &str) -> IspApiError {
    IspApiError::NotFound(format!("/{what}/{id}"))
}

impl FakeBackend {
    pub fn new(data: FakeData) -> Self {
        Self {
            data: Mutex::new(data),
            failing: Mutex::new(HashSet::new()),
            mutations: Mutex::new(Vec::new()),
        }
    }

    /// A backend with the standard seed records.
    pub fn seeded() -> Self {
        Self::new(seed_data())
    }

    /// Make `endpoint` (e.g. `"invoices"`, `"ping"`) fail from now on.
    pub fn fail(&self, endpoint: &'static str) {
        lock(&self.failing).insert(endpoint);
    }

    /// Mutations received so far, as `"<verb> <path> [<detail>]"`.
    pub fn mutations(&self) -> Vec<String> {
        lock(&self.mutations).clone()
    }

    /// A copy of the stored records.
    pub fn data(&self) -> FakeData {
        lock(&self.data).clone()
    }

    fn check(&self, endpoint: &'static str) -> Result<(), IspApiError> {
        if lock(&self.failing).contains(endpoint) {
            return Err(IspApiError::Api {
                status: 500,
                message: format!("{endpoint} unavailable"),
            });
        }
        Ok(())
    }

    fn record(&self, mutation: String) {
        lock(&self.mutations).push(mutation);
    }

    fn read<T>(
        &self,
        endpoint: &'static str,
        select: impl FnOnce(&FakeData) -> T,
    ) -> Result<T, IspApiError> {
        self.check(endpoint)?;
        Ok(select(&lock(&self.data)))
    }
}

fn set_status<T: StatusTracked>(
    records: &mut [T],
    what: &str,
    id: &str,
    status: T::Status,
) -> Result<(), IspApiError> {
    apply_status_change(records, id, status, Utc::now())
        .map(|_| ())
        .ok_or_else(|| not_found(what, id))
}

#[async_trait]
impl IspBackend for FakeBackend {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResult, IspApiError> {
        self.check("auth")?;
        let account = ACCOUNTS
            .iter()
            .find(|a| a.email == email && a.password == password)
            .ok_or(IspApiError::Unauthorized)?;
        Ok(LoginResult {
            token: format!("token-{}", account.user_id),
            user_id: UserId::new(account.user_id),
            name: account.name.to_string(),
            email: Email::parse(account.email).ok(),
            role: account.role,
        })
    }

    async fn ping(&self, _token: Option<&str>) -> Result<(), IspApiError> {
        self.check("ping")
    }

    async fn list_customers(&self, _token: &str) -> Result<Vec<Customer>, IspApiError> {
        self.read("customers", |d| d.customers.clone())
    }

    async fn get_customer(&self, id: &str, _token: &str) -> Result<Customer, IspApiError> {
        self.read("customers", |d| {
            d.customers.iter().find(|c| c.id.as_str() == id).cloned()
        })?
        .ok_or_else(|| not_found("customers", id))
    }

    async fn update_customer(
        &self,
        id: &str,
        update: &CustomerUpdate,
        _token: &str,
    ) -> Result<(), IspApiError> {
        self.check("customers")?;
        let mut data = lock(&self.data);
        let customer = data
            .customers
            .iter_mut()
            .find(|c| c.id.as_str() == id)
            .ok_or_else(|| not_found("customers", id))?;
        if let Some(name) = &update.name {
            customer.name.clone_from(name);
        }
        if let Some(plan) = &update.plan {
            customer.plan.clone_from(plan);
        }
        if let Some(charges) = update.monthly_charges {
            customer.monthly_charges = charges;
        }
        drop(data);
        self.record(format!("PUT /customers/{id}"));
        Ok(())
    }

    async fn delete_customer(&self, id: &str, _token: &str) -> Result<(), IspApiError> {
        self.check("customers")?;
        let mut data = lock(&self.data);
        let before = data.customers.len();
        data.customers.retain(|c| c.id.as_str() != id);
        if data.customers.len() == before {
            return Err(not_found("customers", id));
        }
        drop(data);
        self.record(format!("DELETE /customers/{id}"));
        Ok(())
    }

    async fn set_customer_status(
        &self,
        id: &str,
        status: ConnectionStatus,
        _token: &str,
    ) -> Result<(), IspApiError> {
        self.check("customers")?;
        let mut data = lock(&self.data);
        let customer = data
            .customers
            .iter_mut()
            .find(|c| c.id.as_str() == id)
            .ok_or_else(|| not_found("customers", id))?;
        customer.connection_status = status;
        drop(data);
        self.record(format!("PATCH /customers/{id}/status {status}"));
        Ok(())
    }

    async fn list_operators(&self, _token: &str) -> Result<Vec<Operator>, IspApiError> {
        self.read("operators", |d| d.operators.clone())
    }

    async fn delete_operator_profile(&self, id: &str, _token: &str) -> Result<(), IspApiError> {
        self.check("operators")?;
        lock(&self.data).operators.retain(|o| o.id.as_str() != id);
        self.record(format!("DELETE /operators/{id}/profile"));
        Ok(())
    }

    async fn set_operator_status(
        &self,
        id: &str,
        status: OperatorStatus,
        _token: &str,
    ) -> Result<(), IspApiError> {
        self.check("operators")?;
        let mut data = lock(&self.data);
        let operator = data
            .operators
            .iter_mut()
            .find(|o| o.id.as_str() == id)
            .ok_or_else(|| not_found("operators", id))?;
        operator.status = status;
        drop(data);
        self.record(format!("PATCH /operators/{id}/status {status}"));
        Ok(())
    }

    async fn list_technicians(&self, _token: &str) -> Result<Vec<Technician>, IspApiError> {
        self.read("technicians", |d| d.technicians.clone())
    }

    async fn get_technician(&self, id: &str, _token: &str) -> Result<Technician, IspApiError> {
        self.read("technicians", |d| {
            d.technicians.iter().find(|t| t.id.as_str() == id).cloned()
        })?
        .ok_or_else(|| not_found("technicians", id))
    }

    async fn delete_technician(&self, id: &str, _token: &str) -> Result<(), IspApiError> {
        self.check("technicians")?;
        lock(&self.data).technicians.retain(|t| t.id.as_str() != id);
        self.record(format!("DELETE /technicians/{id}"));
        Ok(())
    }

    async fn list_vendors(&self, _token: &str) -> Result<Vec<Vendor>, IspApiError> {
        self.read("vendors", |d| d.vendors.clone())
    }

    async fn update_vendor(
        &self,
        id: &str,
        update: &VendorUpdate,
        _token: &str,
    ) -> Result<(), IspApiError> {
        self.check("vendors")?;
        let mut data = lock(&self.data);
        let vendor = data
            .vendors
            .iter_mut()
            .find(|v| v.id.as_str() == id)
            .ok_or_else(|| not_found("vendors", id))?;
        if let Some(status) = update.status {
            vendor.status = status;
        }
        drop(data);
        self.record(format!("PUT /vendors/{id}"));
        Ok(())
    }

    async fn list_invoices(&self, _token: &str) -> Result<Vec<Invoice>, IspApiError> {
        self.read("invoices", |d| d.invoices.clone())
    }

    async fn list_plans(&self, _token: &str) -> Result<Vec<Plan>, IspApiError> {
        self.read("plans", |d| d.plans.clone())
    }

    async fn list_complaints(&self, _token: &str) -> Result<Vec<Complaint>, IspApiError> {
        self.read("complaints", |d| d.complaints.clone())
    }

    async fn get_complaint(&self, id: &str, _token: &str) -> Result<Complaint, IspApiError> {
        self.read("complaints", |d| {
            d.complaints.iter().find(|c| c.id.as_str() == id).cloned()
        })?
        .ok_or_else(|| not_found("complaints", id))
    }

    async fn raise_complaint(
        &self,
        complaint: &NewComplaint,
        _token: &str,
    ) -> Result<Complaint, IspApiError> {
        self.check("complaints")?;
        let mut data = lock(&self.data);
        let created = Complaint {
            id: ComplaintId::new(format!("CMP-{}", data.complaints.len() + 1)),
            description: complaint.description.clone(),
            complaint_type: complaint.complaint_type.clone(),
            priority: complaint.priority,
            status: ComplaintStatus::Open,
            customer_id: complaint.customer_id.clone(),
            created_at: Some(Utc::now()),
            ..Complaint::default()
        };
        data.complaints.push(created.clone());
        drop(data);
        self.record(format!("POST /complaints {}", created.id));
        Ok(created)
    }

    async fn set_complaint_status(
        &self,
        id: &str,
        status: ComplaintStatus,
        _token: &str,
    ) -> Result<(), IspApiError> {
        self.check("complaints")?;
        set_status(&mut lock(&self.data).complaints, "complaints", id, status)?;
        self.record(format!("PATCH /complaints/{id}/status {status}"));
        Ok(())
    }

    async fn list_follow_ups(&self, _token: &str) -> Result<Vec<FollowUp>, IspApiError> {
        self.read("follow-ups", |d| d.follow_ups.clone())
    }

    async fn set_follow_up_status(
        &self,
        id: &str,
        status: FollowUpStatus,
        _token: &str,
    ) -> Result<(), IspApiError> {
        self.check("follow-ups")?;
        set_status(&mut lock(&self.data).follow_ups, "follow-ups", id, status)?;
        self.record(format!("PATCH /follow-ups/{id}/status {status}"));
        Ok(())
    }

    async fn analytics_overview(&self, _token: &str) -> Result<AnalyticsOverview, IspApiError> {
        self.check("analytics")?;
        Ok(AnalyticsOverview {
            total_revenue: Decimal::new(1499, 0),
            total_customers: 3,
            active_customers: 1,
            ..AnalyticsOverview::default()
        })
    }

    async fn revenue(
        &self,
        range: TimeRange,
        _token: &str,
    ) -> Result<Vec<TimeSeriesPoint>, IspApiError> {
        self.check("analytics")?;
        Ok(vec![TimeSeriesPoint {
            period: range.as_str().to_string(),
            value: Decimal::new(1499, 0),
        }])
    }

    async fn customer_growth(
        &self,
        range: TimeRange,
        _token: &str,
    ) -> Result<Vec<TimeSeriesPoint>, IspApiError> {
        self.check("analytics")?;
        Ok(vec![TimeSeriesPoint {
            period: range.as_str().to_string(),
            value: Decimal::new(3, 0),
        }])
    }

    async fn plan_distribution(&self, _token: &str) -> Result<Vec<PlanShare>, IspApiError> {
        self.check("analytics")?;
        Ok(vec![
            PlanShare {
                plan: "Fiber 100".to_string(),
                subscribers: 3,
                percentage: Decimal::new(75, 0),
            },
            PlanShare {
                plan: "Fiber 200".to_string(),
                subscribers: 1,
                percentage: Decimal::new(25, 0),
            },
        ])
    }

    async fn export_report(
        &self,
        request: &ReportRequest,
        _token: &str,
    ) -> Result<ReportHandle, IspApiError> {
        self.check("analytics")?;
        self.record(format!("POST /analytics/reports/export {}", request.range.as_str()));
        Ok(ReportHandle {
            id: "RPT-1".to_string(),
            status: "queued".to_string(),
            url: None,
        })
    }

    async fn schedule_report(
        &self,
        schedule: &ReportSchedule,
        _token: &str,
    ) -> Result<ReportHandle, IspApiError> {
        self.check("analytics")?;
        self.record(format!(
            "POST /analytics/reports/schedule {} recipients",
            schedule.recipients.len()
        ));
        Ok(ReportHandle {
            id: "SCH-1".to_string(),
            status: "scheduled".to_string(),
            url: None,
        })
    }
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// The standard seed: three customers whose monthly charges sum to 1499,
/// three complaints across two customers and two technicians, and a little
/// of everything else.
pub fn seed_data() -> FakeData {
    let customer = |id: &str, code: &str, name: &str, plan: &str, status, charges, owed| Customer {
        id: CustomerId::new(id),
        customer_id: code.to_string(),
        name: name.to_string(),
        phone: "98450 00000".to_string(),
        plan: plan.to_string(),
        connection_status: status,
        monthly_charges: Decimal::new(charges, 0),
        outstanding_amount: Decimal::new(owed, 0),
        address: "Indiranagar, Bengaluru".to_string(),
        join_date: date(2025, 4, 1),
        ..Customer::default()
    };

    let complaint = |id: &str, customer: &str, technician: Option<&str>, status, priority, day| {
        Complaint {
            id: ComplaintId::new(id),
            description: format!("Connection drops every evening ({id})"),
            complaint_type: "connectivity".to_string(),
            priority,
            status,
            customer_id: Some(CustomerId::new(customer)),
            technician_id: technician.map(TechnicianId::new),
            created_at: Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).single(),
            updated_at: Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).single(),
            rating: None,
        }
    };

    FakeData {
        customers: vec![
            customer("c-1", "CUST-001", "Ravi Kumar", "Fiber 100", ConnectionStatus::Active, 500, 0),
            customer("c-2", "CUST-002", "Meena Iyer", "Fiber 200", ConnectionStatus::Suspended, 999, 999),
            customer("c-3", "CUST-003", "Arjun Rao", "Fiber 100", ConnectionStatus::Pending, 0, 0),
        ],
        operators: vec![
            Operator {
                id: OperatorId::new("op-1"),
                company_name: "Kiran Broadband".to_string(),
                owner_name: "Kiran Shetty".to_string(),
                address: OperatorAddress {
                    state: "Karnataka".to_string(),
                    district: "Udupi".to_string(),
                    area: "Manipal".to_string(),
                },
                plan_assigned: "Gold".to_string(),
                revenue: Decimal::new(120_000, 0),
                customer_count: 80,
                service_capacity: 100,
                status: OperatorStatus::Active,
                ..Operator::default()
            },
            Operator {
                id: OperatorId::new("op-2"),
                company_name: "Coastal Net".to_string(),
                owner_name: "Farah Khan".to_string(),
                address: OperatorAddress {
                    state: "Kerala".to_string(),
                    district: "Kochi".to_string(),
                    area: "Kakkanad".to_string(),
                },
                plan_assigned: "Silver".to_string(),
                revenue: Decimal::new(40_000, 0),
                customer_count: 20,
                service_capacity: 100,
                status: OperatorStatus::Suspended,
                ..Operator::default()
            },
        ],
        technicians: vec![
            Technician {
                id: TechnicianId::new("t-1"),
                name: "Imran Sheikh".to_string(),
                employee_id: "EMP-101".to_string(),
                department: "Field Operations".to_string(),
                assigned_area: "Indiranagar".to_string(),
                salary: Decimal::new(32_000, 0),
                status: TechnicianStatus::Active,
                ..Technician::default()
            },
            Technician {
                id: TechnicianId::new("t-2"),
                name: "Lakshmi Menon".to_string(),
                employee_id: "EMP-102".to_string(),
                department: "Network".to_string(),
                assigned_area: "Whitefield".to_string(),
                salary: Decimal::new(41_000, 0),
                status: TechnicianStatus::OnLeave,
                ..Technician::default()
            },
        ],
        vendors: vec![
            Vendor {
                id: VendorId::new("v-1"),
                name: "OptiCable Supplies".to_string(),
                category: "Cables".to_string(),
                revenue: Decimal::new(50_000, 0),
                rating: Decimal::new(45, 1),
                commission: Decimal::new(10, 0),
                status: VendorStatus::Pending,
                ..Vendor::default()
            },
            Vendor {
                id: VendorId::new("v-2"),
                name: "RouterHub".to_string(),
                category: "Routers".to_string(),
                revenue: Decimal::new(80_000, 0),
                rating: Decimal::new(40, 1),
                commission: Decimal::new(5, 0),
                status: VendorStatus::Active,
                ..Vendor::default()
            },
        ],
        invoices: vec![
            Invoice {
                id: InvoiceId::new("INV-1"),
                operator: "Kiran Broadband".to_string(),
                amount: Decimal::new(10_000, 0),
                gst: Decimal::new(1_800, 0),
                total_amount: Decimal::new(11_800, 0),
                issue_date: date(2026, 2, 1),
                due_date: date(2026, 2, 15),
                paid_date: date(2026, 2, 10),
                status: InvoiceStatus::Paid,
            },
            Invoice {
                id: InvoiceId::new("INV-2"),
                operator: "Coastal Net".to_string(),
                amount: Decimal::new(5_000, 0),
                gst: Decimal::new(900, 0),
                total_amount: Decimal::new(5_900, 0),
                issue_date: date(2026, 2, 1),
                due_date: date(2026, 2, 15),
                paid_date: None,
                status: InvoiceStatus::Overdue,
            },
        ],
        complaints: vec![
            complaint("CMP-1", "c-1", Some("t-1"), ComplaintStatus::Open, Priority::High, 1),
            complaint("CMP-2", "c-2", Some("t-2"), ComplaintStatus::InProgress, Priority::Medium, 2),
            complaint("CMP-3", "c-1", None, ComplaintStatus::Resolved, Priority::Low, 3),
        ],
        plans: vec![
            Plan {
                id: PlanId::new("p-1"),
                name: "Fiber 100".to_string(),
                speed: "100 Mbps".to_string(),
                price: Decimal::new(500, 0),
                plan_type: PlanType::Residential,
                subscribers: 2,
                ..Plan::default()
            },
            Plan {
                id: PlanId::new("p-2"),
                name: "Fiber 200".to_string(),
                speed: "200 Mbps".to_string(),
                price: Decimal::new(999, 0),
                plan_type: PlanType::Business,
                subscribers: 1,
                ..Plan::default()
            },
        ],
        follow_ups: vec![
            FollowUp {
                id: FollowUpId::new("FU-1"),
                customer_id: CustomerId::new("c-2"),
                follow_up_type: "payment".to_string(),
                title: "Collect overdue balance".to_string(),
                status: FollowUpStatus::Pending,
                priority: Priority::High,
                due_date: date(2026, 3, 5),
                assigned_to: "Suresh Nair".to_string(),
                ..FollowUp::default()
            },
            FollowUp {
                id: FollowUpId::new("FU-2"),
                customer_id: CustomerId::new("c-3"),
                follow_up_type: "installation".to_string(),
                title: "Confirm router install".to_string(),
                status: FollowUpStatus::Completed,
                priority: Priority::Low,
                assigned_to: "Suresh Nair".to_string(),
                ..FollowUp::default()
            },
        ],
    }
}

/// Dashboard settings for tests: plain http so the session cookie is not
/// marked secure.
pub fn test_config() -> DashboardConfig {
    DashboardConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        base_url: "http://127.0.0.1".to_string(),
        api: IspApiConfig::for_base_url("http://127.0.0.1:9/api")
            .expect("valid test backend URL"),
        json_logs: false,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 0.0,
        sentry_traces_sample_rate: 0.0,
        tls: None,
    }
}

/// A running dashboard plus a cookie-keeping client.
pub struct TestContext {
    pub client: reqwest::Client,
    pub addr: SocketAddr,
    pub backend: Arc<FakeBackend>,
}

impl TestContext {
    /// Serve the dashboard over the standard seed.
    pub async fn new() -> Self {
        Self::with_backend(FakeBackend::seeded()).await
    }

    pub async fn with_backend(backend: FakeBackend) -> Self {
        let backend = Arc::new(backend);
        let state = AppState::new(test_config(), backend.clone());
        let app = build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            addr,
            backend,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Log in as the seeded account with `email`; panics on failure.
    pub async fn login(&self, email: &str) -> Value {
        let account = ACCOUNTS
            .iter()
            .find(|a| a.email == email)
            .expect("unknown seeded account");
        let resp = self
            .client
            .post(self.url("/auth/login"))
            .json(&json!({ "email": account.email, "password": account.password }))
            .send()
            .await
            .expect("Failed to send login");
        assert_eq!(resp.status(), reqwest::StatusCode::OK, "login as {email}");
        resp.json().await.expect("Failed to parse login response")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET")
    }

    pub async fn get_json(&self, path: &str) -> Value {
        let resp = self.get(path).await;
        assert_eq!(resp.status(), reqwest::StatusCode::OK, "GET {path}");
        resp.json().await.expect("Failed to parse JSON")
    }

    pub async fn send_json(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &Value,
    ) -> reqwest::Response {
        self.client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn post(&self, path: &str) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .send()
            .await
            .expect("Failed to send POST")
    }
}

/// Ids of the `items` in a list response, read from `field`.
pub fn item_ids(body: &Value, field: &str) -> Vec<String> {
    body["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item[field].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
