mod order;
mod sales;

pub use self::order::OrderService;
pub use self::sales::SalesService;
