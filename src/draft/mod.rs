pub mod duration;
pub mod form;
pub mod model;
pub mod store;
