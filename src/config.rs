/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Origin of the energy statistics backend
    pub const API_BASE_URL: &'static str = "http://localhost:5000";

    /// Country used by the landing page overview
    pub const WORLD: &'static str = "World";

    /// Year range requested by time-series charts
    pub const START_YEAR: i32 = 2000;
    pub const END_YEAR: i32 = 2023;

    /// Year requested by breakdown pies
    pub const PIE_YEAR: i32 = 2023;

    /// The prediction model only covers years from here on
    pub const MIN_PREDICTION_YEAR: i32 = 2025;

    /// Prediction form defaults
    pub const PREDICTION_COUNTRY: &'static str = "Germany";
    pub const PREDICTION_ENERGY: &'static str = "wind";

    /// Countries the prediction model was trained on
    pub const PREDICTION_COUNTRIES: &'static [&'static str] = &["Germany", "France"];

    /// Default country of the explorer filter panel
    pub const EXPLORER_COUNTRY: &'static str = "United States";

    /// Delay before charts redraw after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Countries offered by the country and prediction pickers
    pub const COUNTRIES: &'static [&'static str] = &[
        "Australia",
        "Brazil",
        "Canada",
        "China",
        "France",
        "Germany",
        "India",
        "Italy",
        "Japan",
        "Mexico",
        "Norway",
        "Spain",
        "Sweden",
        "United Kingdom",
        "United States",
    ];
}
