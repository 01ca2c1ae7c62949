pub mod chart;
pub mod chart_grid;
pub mod country_selector;
pub mod filter_panel;
pub mod nav_bar;
pub mod prediction_form;
pub mod prediction_table;
pub mod series_toggle;
pub mod status;

pub use chart::Chart;
pub use chart_grid::ChartGrid;
pub use country_selector::CountrySelector;
pub use filter_panel::FilterPanel;
pub use nav_bar::NavBar;
pub use prediction_form::PredictionForm;
pub use prediction_table::PredictionTable;
pub use series_toggle::SeriesToggle;
pub use status::Status;
