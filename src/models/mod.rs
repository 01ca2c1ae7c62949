pub mod chart;
pub mod energy_data;
pub mod error;
pub mod payload;
pub mod page;
pub mod prediction;
