mod catalogue;
pub mod domain;
pub mod errors;

pub use catalogue::TransitCatalogue;
