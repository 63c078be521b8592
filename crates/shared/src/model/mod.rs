mod order;
mod sales_transaction;

pub use self::order::{Order, OrderStats};
pub use self::sales_transaction::{CategorySales, SalesTransaction, ServiceSales};
