pub mod capture_model;
pub mod pipeline;
