pub mod error;
pub mod resolver;
pub mod shared;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use resolver::{find_by_id, parse_id, resolve_param};
pub use shared::SharedCatalog;
pub use store::CatalogStore;
