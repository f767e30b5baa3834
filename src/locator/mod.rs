pub mod locator_model;
pub mod store;
