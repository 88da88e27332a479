//! Authentication (`protect`) and authorization (`admin`) layers.
pub mod admin;
pub mod protect;
