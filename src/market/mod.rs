pub mod competitor;
pub mod demand;
