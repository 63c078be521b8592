mod command;
mod query;

pub use self::command::{DynSalesCommandRepository, SalesCommandRepositoryTrait};
pub use self::query::{DynSalesQueryRepository, DynSalesQueryService, SalesQueryRepositoryTrait, SalesQueryServiceTrait};
