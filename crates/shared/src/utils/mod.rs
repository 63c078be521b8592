mod gracefullshutdown;
mod logs;
mod order_code;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::order_code::generate_order_code;
