//! Subscription plans.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::export::CsvRecord;
use crate::listing::sort::cmp_text;
use crate::listing::stats::mean;
use crate::listing::{Facet, RecordFilter, SearchQuery, Searchable, SortKey};
use crate::{PlanId, PlanType};

/// A priced internet-service tier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    /// Advertised speed, e.g. `100 Mbps`.
    pub speed: String,
    /// Monthly price.
    pub price: Decimal,
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    pub features: Vec<String>,
    pub max_connections: u32,
    pub subscribers: u32,
    /// Data cap, e.g. `Unlimited` or `500 GB`.
    pub data_limit: Option<String>,
}

impl Plan {
    /// Monthly revenue from current subscribers.
    #[must_use]
    pub fn monthly_revenue(&self) -> Decimal {
        self.price * Decimal::from(self.subscribers)
    }
}

impl Searchable for Plan {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.speed.as_str()]
    }
}

/// Plan catalogue filter.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    pub search: SearchQuery,
    pub plan_type: Facet<PlanType>,
}

impl RecordFilter<Plan> for PlanFilter {
    fn matches(&self, p: &Plan) -> bool {
        self.search.matches(p) && self.plan_type.matches(&p.plan_type)
    }
}

/// Plan catalogue columns that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanSortKey {
    #[default]
    Name,
    Price,
    Subscribers,
    Revenue,
}

impl PlanSortKey {
    /// Parse a sort key from a URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            "subscribers" => Some(Self::Subscribers),
            "revenue" => Some(Self::Revenue),
            _ => None,
        }
    }
}

impl SortKey<Plan> for PlanSortKey {
    fn compare(self, a: &Plan, b: &Plan) -> Ordering {
        match self {
            Self::Name => cmp_text(&a.name, &b.name),
            Self::Price => a.price.cmp(&b.price),
            Self::Subscribers => a.subscribers.cmp(&b.subscribers),
            Self::Revenue => a.monthly_revenue().cmp(&b.monthly_revenue()),
        }
    }
}

/// Plan catalogue summary cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStats {
    pub total: usize,
    pub residential: usize,
    pub business: usize,
    pub promotional: usize,
    pub custom: usize,
    pub total_subscribers: u64,
    /// Sum of price times subscribers.
    pub total_revenue: Decimal,
    /// `None` when there are no plans.
    pub average_revenue_per_plan: Option<Decimal>,
}

impl PlanStats {
    /// Aggregate over any set of plans.
    pub fn from_records<'a>(plans: impl IntoIterator<Item = &'a Plan>) -> Self {
        let mut stats = Self::default();
        for plan in plans {
            stats.total += 1;
            match plan.plan_type {
                PlanType::Residential => stats.residential += 1,
                PlanType::Business => stats.business += 1,
                PlanType::Promotional => stats.promotional += 1,
                PlanType::Custom => stats.custom += 1,
            }
            stats.total_subscribers += u64::from(plan.subscribers);
            stats.total_revenue += plan.monthly_revenue();
        }
        stats.average_revenue_per_plan = mean(stats.total_revenue, stats.total);
        stats
    }
}

impl CsvRecord for Plan {
    const HEADERS: &'static [&'static str] = &[
        "Plan ID",
        "Name",
        "Speed",
        "Type",
        "Price",
        "Max Connections",
        "Subscribers",
        "Features",
    ];

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.speed.clone(),
            self.plan_type.to_string(),
            self.price.to_string(),
            self.max_connections.to_string(),
            self.subscribers.to_string(),
            self.features.join("; "),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(name: &str, plan_type: PlanType, price: i64, subscribers: u32) -> Plan {
        Plan {
            id: PlanId::new(name.to_lowercase()),
            name: name.to_string(),
            speed: "100 Mbps".to_string(),
            price: Decimal::from(price),
            plan_type,
            subscribers,
            ..Plan::default()
        }
    }

    #[test]
    fn test_stats() {
        let plans = vec![
            plan("Basic", PlanType::Residential, 499, 100),
            plan("Pro", PlanType::Business, 1999, 10),
        ];
        let stats = PlanStats::from_records(&plans);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.residential, 1);
        assert_eq!(stats.business, 1);
        assert_eq!(stats.total_subscribers, 110);
        assert_eq!(stats.total_revenue, Decimal::from(69_890));
        assert_eq!(stats.average_revenue_per_plan, Some(Decimal::from(34_945)));
    }

    #[test]
    fn test_average_revenue_without_plans() {
        let stats = PlanStats::from_records(std::iter::empty());
        assert_eq!(stats.total_revenue, Decimal::ZERO);
        assert_eq!(stats.average_revenue_per_plan, None);
    }

    #[test]
    fn test_type_facet() {
        let plans = vec![
            plan("Basic", PlanType::Residential, 499, 1),
            plan("Festive", PlanType::Promotional, 299, 1),
        ];
        let filter = PlanFilter {
            plan_type: Facet::Only(PlanType::Promotional),
            ..PlanFilter::default()
        };
        let kept = crate::listing::apply_filter(&plans, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Festive");
    }

    #[test]
    fn test_features_joined_in_csv() {
        let mut p = plan("Basic", PlanType::Residential, 499, 1);
        p.features = vec!["Free router".to_string(), "OTT bundle".to_string()];
        assert_eq!(p.csv_row()[7], "Free router; OTT bundle");
    }
}
