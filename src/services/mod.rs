pub mod api;
pub mod batch;
pub mod endpoints;
pub mod normalizer;
