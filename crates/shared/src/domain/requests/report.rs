use serde::Deserialize;
use utoipa::IntoParams;

use super::OrderFilters;

/// Analytics window. Unknown period strings fall back to `All`, which leaves
/// the aggregation unfiltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesPeriod {
    Day,
    Week,
    Month,
    Year,
    All,
}

impl SalesPeriod {
    pub fn parse(value: &str) -> Self {
        match value {
            "day" => SalesPeriod::Day,
            "week" => SalesPeriod::Week,
            "month" => SalesPeriod::Month,
            "year" => SalesPeriod::Year,
            _ => SalesPeriod::All,
        }
    }
}

/// Query-string parameters of the reporting endpoint. The `action` selects
/// the operation; the rest only apply to the action that reads them.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ReportParams {
    pub action: Option<String>,
    pub service_category: Option<String>,
    pub order_status: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub limit: Option<i64>,
    pub period: Option<String>,
}

impl ReportParams {
    /// Empty-string filters are treated as absent, matching the intake
    /// form's habit of submitting blank query parameters.
    pub fn filters(&self) -> OrderFilters {
        OrderFilters {
            service_category: non_empty(&self.service_category),
            order_status: non_empty(&self.order_status),
            date_from: non_empty(&self.date_from),
            date_to: non_empty(&self.date_to),
            limit: self.limit,
        }
    }

    pub fn period(&self) -> SalesPeriod {
        SalesPeriod::parse(self.period.as_deref().unwrap_or("month"))
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_owned)
}
