pub mod density;
pub mod error;
pub mod generator;
pub mod model;
pub mod report;
pub mod scoring;
pub mod serp;
pub mod website;
