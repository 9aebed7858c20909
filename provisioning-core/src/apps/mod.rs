pub mod app_descriptor;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod query;

pub use app_descriptor::{AppDescriptor, AppList};
pub use catalog::{AppCatalog, AppManager, InMemoryAppCatalog};
pub use error::{QueryError, QueryResult};
pub use filter::FilterSelector;
pub use query::AppRegistryQueryService;
