//! Marketplace vendors supplying equipment on commission.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::export::CsvRecord;
use crate::listing::sort::cmp_text;
use crate::listing::stats::{mean, sum};
use crate::listing::{Facet, RecordFilter, SearchQuery, Searchable, SortKey};
use crate::{Email, VendorId, VendorStatus};

/// An equipment supplier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub email: Option<Email>,
    pub category: String,
    pub revenue: Decimal,
    /// Average buyer rating, 0-5.
    pub rating: Decimal,
    /// Commission rate in percent.
    pub commission: Decimal,
    pub status: VendorStatus,
    pub products: u32,
    pub orders: u32,
}

impl Vendor {
    /// Commission earned on this vendor's revenue.
    #[must_use]
    pub fn commission_earned(&self) -> Decimal {
        self.revenue * self.commission / Decimal::ONE_HUNDRED
    }
}

impl Searchable for Vendor {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_ref().map_or("", Email::as_str),
            self.category.as_str(),
        ]
    }
}

/// Vendor list filter.
#[derive(Debug, Clone, Default)]
pub struct VendorFilter {
    pub search: SearchQuery,
    pub status: Facet<VendorStatus>,
    pub category: Facet<String>,
}

impl RecordFilter<Vendor> for VendorFilter {
    fn matches(&self, v: &Vendor) -> bool {
        self.search.matches(v)
            && self.status.matches(&v.status)
            && self.category.matches_text(&v.category)
    }
}

/// Vendor list columns that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendorSortKey {
    #[default]
    Name,
    Category,
    Revenue,
    Rating,
    Orders,
}

impl VendorSortKey {
    /// Parse a sort key from a URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "category" => Some(Self::Category),
            "revenue" => Some(Self::Revenue),
            "rating" => Some(Self::Rating),
            "orders" => Some(Self::Orders),
            _ => None,
        }
    }
}

impl SortKey<Vendor> for VendorSortKey {
    fn compare(self, a: &Vendor, b: &Vendor) -> Ordering {
        match self {
            Self::Name => cmp_text(&a.name, &b.name),
            Self::Category => cmp_text(&a.category, &b.category),
            Self::Revenue => a.revenue.cmp(&b.revenue),
            Self::Rating => a.rating.cmp(&b.rating),
            Self::Orders => a.orders.cmp(&b.orders),
        }
    }
}

/// Vendor summary cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub suspended: usize,
    pub rejected: usize,
    pub total_revenue: Decimal,
    pub total_commission: Decimal,
    pub average_rating: Option<Decimal>,
}

impl VendorStats {
    /// Aggregate over any set of vendors.
    pub fn from_records<'a>(vendors: impl IntoIterator<Item = &'a Vendor>) -> Self {
        let vendors: Vec<&Vendor> = vendors.into_iter().collect();
        let count = |status| vendors.iter().filter(|v| v.status == status).count();
        Self {
            total: vendors.len(),
            active: count(VendorStatus::Active),
            pending: count(VendorStatus::Pending),
            suspended: count(VendorStatus::Suspended),
            rejected: count(VendorStatus::Rejected),
            total_revenue: sum(vendors.iter().map(|v| v.revenue)),
            total_commission: sum(vendors.iter().map(|v| v.commission_earned())),
            average_rating: mean(sum(vendors.iter().map(|v| v.rating)), vendors.len()),
        }
    }
}

impl CsvRecord for Vendor {
    const HEADERS: &'static [&'static str] = &[
        "Vendor ID",
        "Name",
        "Email",
        "Category",
        "Products",
        "Orders",
        "Revenue",
        "Commission %",
        "Rating",
        "Status",
    ];

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.as_ref().map(ToString::to_string).unwrap_or_default(),
            self.category.clone(),
            self.products.to_string(),
            self.orders.to_string(),
            self.revenue.to_string(),
            self.commission.to_string(),
            self.rating.to_string(),
            self.status.to_string(),
        ]
    }
}

/// Vendor fields an admin may change. Approve, reject and suspend are all
/// status overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VendorStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl VendorUpdate {
    /// An update that only changes status.
    #[must_use]
    pub fn status(status: VendorStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(name: &str, status: VendorStatus, revenue: i64, commission: i64, rating: i64) -> Vendor {
        Vendor {
            id: VendorId::new(name.to_lowercase()),
            name: name.to_string(),
            category: "Routers".to_string(),
            revenue: Decimal::from(revenue),
            commission: Decimal::from(commission),
            rating: Decimal::new(rating, 1),
            status,
            ..Vendor::default()
        }
    }

    #[test]
    fn test_stats() {
        let vendors = vec![
            vendor("NetGear", VendorStatus::Active, 100_000, 10, 45),
            vendor("TP Link", VendorStatus::Pending, 50_000, 8, 40),
        ];
        let stats = VendorStats::from_records(&vendors);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.total_revenue, Decimal::from(150_000));
        assert_eq!(stats.total_commission, Decimal::from(14_000));
        assert_eq!(stats.average_rating, Some(Decimal::new(425, 2)));
    }

    #[test]
    fn test_stats_empty_has_no_average() {
        let stats = VendorStats::from_records(std::iter::empty());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_rating, None);
    }

    #[test]
    fn test_category_facet() {
        let mut cables = vendor("WireCo", VendorStatus::Active, 1, 1, 1);
        cables.category = "Cables".to_string();
        let vendors = vec![vendor("NetGear", VendorStatus::Active, 1, 1, 1), cables];
        let filter = VendorFilter {
            category: Facet::Only("cables".to_string()),
            ..VendorFilter::default()
        };
        let kept = crate::listing::apply_filter(&vendors, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "WireCo");
    }

    #[test]
    fn test_status_update_payload() {
        let json = serde_json::to_value(VendorUpdate::status(VendorStatus::Rejected))
            .unwrap_or_default();
        assert_eq!(json, serde_json::json!({ "status": "rejected" }));
    }
}
