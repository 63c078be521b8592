mod order;
mod sales;

pub use self::order::OrderRepository;
pub use self::sales::SalesRepository;
