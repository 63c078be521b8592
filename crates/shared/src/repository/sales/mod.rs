mod command;
mod query;

use std::sync::Arc;

use self::command::SalesCommandRepository;
use self::query::SalesQueryRepository;

use crate::{
    abstract_trait::{DynSalesCommandRepository, DynSalesQueryRepository},
    config::ConnectionPool,
};

#[derive(Clone)]
pub struct SalesRepository {
    pub query: DynSalesQueryRepository,
    pub command: DynSalesCommandRepository,
}

impl SalesRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(SalesQueryRepository::new(pool.clone())) as DynSalesQueryRepository;

        let command =
            Arc::new(SalesCommandRepository::new(pool.clone())) as DynSalesCommandRepository;

        Self { query, command }
    }
}
