pub mod cache;
pub mod matcher;
pub mod sunat;
