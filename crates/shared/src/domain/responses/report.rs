use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{CategorySales, OrderStats, ServiceSales};

/// Fixed-shape per-category totals consumed by the admin dashboard. Keys are
/// pre-seeded to zero and only overwritten on an exact category match, so a
/// category the dashboard does not know about is dropped from this view
/// while staying visible in `raw_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryTotals {
    pub tarpaulin: f64,
    pub stickers: f64,
    pub shirts: f64,
    pub printxerox: f64,
    pub others: f64,
}

impl CategoryTotals {
    pub fn from_rows(rows: &[CategorySales]) -> Self {
        let mut totals = CategoryTotals::default();
        for row in rows {
            match row.category.as_str() {
                "tarpaulin" => totals.tarpaulin = row.total_amount,
                "stickers" => totals.stickers = row.total_amount,
                "shirts" => totals.shirts = row.total_amount,
                "printxerox" => totals.printxerox = row.total_amount,
                "others" => totals.others = row.total_amount,
                _ => {}
            }
        }
        totals
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SalesAnalyticsResponse {
    pub success: bool,
    pub data: CategoryTotals,
    pub raw_data: Vec<CategorySales>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OthersBreakdownResponse {
    pub success: bool,
    pub data: Vec<ServiceSales>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderStatsResponse {
    pub success: bool,
    pub data: OrderStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, total: f64) -> CategorySales {
        CategorySales {
            category: category.to_string(),
            total_amount: total,
            transaction_count: 1,
        }
    }

    #[test]
    fn known_categories_overwrite_seeded_zeroes() {
        let rows = vec![row("shirts", 1500.0), row("tarpaulin", 800.0)];
        let totals = CategoryTotals::from_rows(&rows);

        assert_eq!(totals.shirts, 1500.0);
        assert_eq!(totals.tarpaulin, 800.0);
        assert_eq!(totals.stickers, 0.0);
        assert_eq!(totals.printxerox, 0.0);
        assert_eq!(totals.others, 0.0);
    }

    #[test]
    fn unknown_category_is_dropped_from_fixed_shape() {
        let rows = vec![row("mugs", 999.0), row("others", 300.0)];
        let totals = CategoryTotals::from_rows(&rows);

        assert_eq!(totals.others, 300.0);
        // "mugs" has no slot; it only survives in the raw rows.
        assert_eq!(
            totals,
            CategoryTotals {
                others: 300.0,
                ..CategoryTotals::default()
            }
        );
    }

    #[test]
    fn empty_rows_keep_all_zeroes() {
        assert_eq!(CategoryTotals::from_rows(&[]), CategoryTotals::default());
    }
}
