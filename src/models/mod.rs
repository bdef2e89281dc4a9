pub mod lookup;
pub mod taxpayer;
