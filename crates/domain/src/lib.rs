pub mod analytics;
pub mod model;
