pub mod bounds;
pub mod classifier;
pub mod hierarchy_xml;
pub mod optimizer;
pub mod screen_size;
pub mod tree_model;
