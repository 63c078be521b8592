use crate::{
    config::ConnectionPool,
    repository::{OrderRepository, SalesRepository},
    service::{OrderService, SalesService},
};
use std::fmt;

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_service: OrderService,
    pub sales_service: SalesService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_service", &self.order_service)
            .field("sales_service", &self.sales_service)
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let order_repository = OrderRepository::new(pool.clone());
        let sales_repository = SalesRepository::new(pool.clone());

        let order_service = OrderService::new(&order_repository, &sales_repository);
        let sales_service = SalesService::new(&sales_repository);

        Self {
            order_service,
            sales_service,
        }
    }
}
