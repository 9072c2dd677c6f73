pub mod asn;
pub mod codec;
pub mod models;
pub mod validation;
