pub mod describe;
pub mod element_model;
pub mod extractor;
pub mod search;
