mod order;
mod sales;

pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::sales::{
    DynSalesCommandRepository, DynSalesQueryRepository, DynSalesQueryService,
    SalesCommandRepositoryTrait, SalesQueryRepositoryTrait, SalesQueryServiceTrait,
};
