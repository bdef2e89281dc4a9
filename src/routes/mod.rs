pub mod health;
pub mod metrics;
pub mod ruc;
pub mod search;
