mod command;
mod pricing;
mod query;
mod validation;

use self::command::OrderCommandService;
use self::query::OrderQueryService;

use crate::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    repository::{OrderRepository, SalesRepository},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct OrderService {
    pub query: DynOrderQueryService,
    pub command: DynOrderCommandService,
}

impl fmt::Debug for OrderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderService")
            .field("query", &"Arc<dyn OrderQueryServiceTrait>")
            .field("command", &"Arc<dyn OrderCommandServiceTrait>")
            .finish()
    }
}

impl OrderService {
    pub fn new(orders: &OrderRepository, sales: &SalesRepository) -> Self {
        let query =
            Arc::new(OrderQueryService::new(orders.query.clone())) as DynOrderQueryService;

        let command = Arc::new(OrderCommandService::new(
            orders.command.clone(),
            sales.command.clone(),
        )) as DynOrderCommandService;

        Self { query, command }
    }
}
