mod query;

use self::query::SalesQueryService;

use crate::{abstract_trait::DynSalesQueryService, repository::SalesRepository};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct SalesService {
    pub query: DynSalesQueryService,
}

impl fmt::Debug for SalesService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SalesService")
            .field("query", &"Arc<dyn SalesQueryServiceTrait>")
            .finish()
    }
}

impl SalesService {
    pub fn new(sales: &SalesRepository) -> Self {
        let query = Arc::new(SalesQueryService::new(sales.query.clone())) as DynSalesQueryService;

        Self { query }
    }
}
