pub mod catalog;

pub use catalog::{
    CatalogError, PgRapCatalog, RapAllocation, RapCatalog, OUTFILE_CREATED_AND_SENT,
};
