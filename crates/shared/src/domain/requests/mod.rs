mod order;
mod report;

pub use self::order::{CreateOrderRecord, CreateSalesTransaction, OrderFilters, SubmitOrderRequest};
pub use self::report::{ReportParams, SalesPeriod};
