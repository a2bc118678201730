pub mod catalog;
pub mod core_api;
pub mod profile;
pub mod sync;
pub mod xml;
