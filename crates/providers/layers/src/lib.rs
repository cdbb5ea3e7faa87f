pub mod matcher;
pub mod provider;
pub mod store;

pub use matcher::{AttributeMatch, match_attributes};
pub use provider::{LayerSearchProvider, PROVIDER_ID, descriptor};
pub use store::{LayerStore, SearchLayer};
