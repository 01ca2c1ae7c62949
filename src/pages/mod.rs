pub mod country;
pub mod energy;
pub mod explorer;
pub mod landing;
pub mod prediction;

pub use country::CountryPage;
pub use energy::EnergyPage;
pub use explorer::ExplorerPage;
pub use landing::LandingPage;
pub use prediction::PredictionPage;
