pub mod use_charts;
pub mod use_energy_data;
pub mod use_predictions;
