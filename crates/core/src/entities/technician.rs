//! Field technicians.
//!
//! Technician records often arrive with only a free-text `specialization`.
//! [`TechnicianProfile::infer`] derives a department, position and skill list
//! from it so the directory can still be grouped; fields the backend does
//! supply always win over the inferred ones.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::export::CsvRecord;
use crate::listing::sort::cmp_text;
use crate::listing::stats::sum;
use crate::listing::{Facet, RecordFilter, SearchQuery, Searchable, SortKey};
use crate::{Email, TechnicianId, TechnicianStatus};

/// A field technician.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: TechnicianId,
    pub name: String,
    pub email: Option<Email>,
    pub phone: String,
    pub employee_id: String,
    pub department: String,
    pub position: String,
    pub assigned_area: String,
    pub salary: Decimal,
    pub status: TechnicianStatus,
    pub skills: Vec<String>,
    /// Free-text specialization as entered by the backend.
    pub specialization: String,
    /// Only present when the backend reports it.
    pub experience_years: Option<u32>,
}

/// Department, position and skills derived from a specialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicianProfile {
    pub department: String,
    pub position: String,
    pub skills: Vec<String>,
}

/// Keyword table: first matching row wins.
const PROFILE_RULES: &[(&[&str], &str, &str, &[&str])] = &[
    (
        &["fiber", "fibre", "ftth", "splic"],
        "Fiber Operations",
        "Fiber Technician",
        &["Fiber Splicing", "OTDR Testing", "FTTH Installation"],
    ),
    (
        &["network", "router", "switch", "olt"],
        "Network Operations",
        "Network Technician",
        &["Router Configuration", "Network Troubleshooting", "OLT Management"],
    ),
    (
        &["install", "setup", "wiring"],
        "Installation",
        "Installation Technician",
        &["Site Survey", "Cable Laying", "CPE Setup"],
    ),
    (
        &["support", "customer", "helpdesk"],
        "Customer Support",
        "Support Technician",
        &["Customer Handling", "Remote Troubleshooting"],
    ),
    (
        &["maint", "repair", "fault"],
        "Maintenance",
        "Maintenance Technician",
        &["Fault Diagnosis", "Preventive Maintenance"],
    ),
];

impl TechnicianProfile {
    /// Derive a profile from a specialization string.
    #[must_use]
    pub fn infer(specialization: &str) -> Self {
        let lower = specialization.to_lowercase();
        for (keywords, department, position, skills) in PROFILE_RULES {
            if keywords.iter().any(|k| lower.contains(k)) {
                return Self {
                    department: (*department).to_string(),
                    position: (*position).to_string(),
                    skills: skills.iter().map(ToString::to_string).collect(),
                };
            }
        }

        let trimmed = specialization.trim();
        Self {
            department: "Field Operations".to_string(),
            position: "Field Technician".to_string(),
            skills: if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![trimmed.to_string()]
            },
        }
    }
}

impl Technician {
    /// Fill blank department, position and skills from the specialization.
    pub fn fill_inferred_profile(&mut self) {
        if !self.department.trim().is_empty()
            && !self.position.trim().is_empty()
            && !self.skills.is_empty()
        {
            return;
        }
        let profile = TechnicianProfile::infer(&self.specialization);
        if self.department.trim().is_empty() {
            self.department = profile.department;
        }
        if self.position.trim().is_empty() {
            self.position = profile.position;
        }
        if self.skills.is_empty() {
            self.skills = profile.skills;
        }
    }
}

impl Searchable for Technician {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_ref().map_or("", Email::as_str),
            self.employee_id.as_str(),
            self.assigned_area.as_str(),
        ]
    }
}

/// Technician directory filter.
#[derive(Debug, Clone, Default)]
pub struct TechnicianFilter {
    pub search: SearchQuery,
    pub status: Facet<TechnicianStatus>,
    pub department: Facet<String>,
}

impl RecordFilter<Technician> for TechnicianFilter {
    fn matches(&self, t: &Technician) -> bool {
        self.search.matches(t)
            && self.status.matches(&t.status)
            && self.department.matches_text(&t.department)
    }
}

/// Technician directory columns that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TechnicianSortKey {
    #[default]
    Name,
    EmployeeId,
    Department,
    Area,
    Salary,
}

impl TechnicianSortKey {
    /// Parse a sort key from a URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "employee_id" | "employeeid" => Some(Self::EmployeeId),
            "department" => Some(Self::Department),
            "area" | "assigned_area" | "assignedarea" => Some(Self::Area),
            "salary" => Some(Self::Salary),
            _ => None,
        }
    }
}

impl SortKey<Technician> for TechnicianSortKey {
    fn compare(self, a: &Technician, b: &Technician) -> Ordering {
        match self {
            Self::Name => cmp_text(&a.name, &b.name),
            Self::EmployeeId => a.employee_id.cmp(&b.employee_id),
            Self::Department => cmp_text(&a.department, &b.department),
            Self::Area => cmp_text(&a.assigned_area, &b.assigned_area),
            Self::Salary => a.salary.cmp(&b.salary),
        }
    }
}

/// Count of technicians in one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: usize,
}

/// Technician directory summary cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianStats {
    pub total: usize,
    pub active: usize,
    pub on_leave: usize,
    pub total_salary: Decimal,
    /// Departments in order of first appearance.
    pub departments: Vec<DepartmentCount>,
}

impl TechnicianStats {
    /// Aggregate over any set of technicians.
    pub fn from_records<'a>(technicians: impl IntoIterator<Item = &'a Technician>) -> Self {
        let technicians: Vec<&Technician> = technicians.into_iter().collect();
        let mut departments: Vec<DepartmentCount> = Vec::new();
        for t in &technicians {
            match departments.iter_mut().find(|d| d.department == t.department) {
                Some(entry) => entry.count += 1,
                None => departments.push(DepartmentCount {
                    department: t.department.clone(),
                    count: 1,
                }),
            }
        }
        Self {
            total: technicians.len(),
            active: technicians
                .iter()
                .filter(|t| t.status == TechnicianStatus::Active)
                .count(),
            on_leave: technicians
                .iter()
                .filter(|t| t.status == TechnicianStatus::OnLeave)
                .count(),
            total_salary: sum(technicians.iter().map(|t| t.salary)),
            departments,
        }
    }
}

impl CsvRecord for Technician {
    const HEADERS: &'static [&'static str] = &[
        "Employee ID",
        "Name",
        "Email",
        "Phone",
        "Department",
        "Position",
        "Area",
        "Salary",
        "Status",
        "Skills",
    ];

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.employee_id.clone(),
            self.name.clone(),
            self.email.as_ref().map(ToString::to_string).unwrap_or_default(),
            self.phone.clone(),
            self.department.clone(),
            self.position.clone(),
            self.assigned_area.clone(),
            self.salary.to_string(),
            self.status.to_string(),
            self.skills.join("; "),
        ]
    }
}
