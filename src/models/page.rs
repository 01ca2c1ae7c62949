use super::error::AppError;

/// Energy types with a dedicated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnergyKind {
    #[default]
    Solar,
    Wind,
    Hydro,
}

impl EnergyKind {
    /// The slug used in URLs and backend column names.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::Wind => "wind",
            Self::Hydro => "hydro",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Solar => "Solar",
            Self::Wind => "Wind",
            Self::Hydro => "Hydro",
        }
    }

    pub const fn all() -> &'static [Self] {
        &[Self::Solar, Self::Wind, Self::Hydro]
    }
}

impl std::fmt::Display for EnergyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for EnergyKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solar" => Ok(Self::Solar),
            "wind" => Ok(Self::Wind),
            "hydro" => Ok(Self::Hydro),
            _ => Err(AppError::NotFound(format!("Unknown energy type: {s}"))),
        }
    }
}

/// The page currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    /// Country detail; the country comes from navigation state, not the URL.
    Country(Option<String>),
    Energy(EnergyKind),
    Prediction,
    Explorer,
}

impl Page {
    /// Resolves a URL path. Energy pages are matched on the first word of the
    /// first segment, so `/wind-energy` and `/wind` both open the wind page.
    pub fn from_path(path: &str) -> Self {
        let segment = path.trim_start_matches('/').split('/').next().unwrap_or("");

        match segment {
            "" => Self::Landing,
            "energy-by-country-year" => Self::Country(None),
            "get-predictions" => Self::Prediction,
            "explorer" => Self::Explorer,
            other => other
                .split('-')
                .next()
                .and_then(|kind| kind.parse().ok())
                .map_or(Self::Landing, Self::Energy),
        }
    }

    /// Rebuilds a page from a URL path and the history entry's state, which
    /// carries the selected country of a country page.
    pub fn from_location(path: &str, state: Option<String>) -> Self {
        match Self::from_path(path) {
            Self::Country(None) => Self::Country(state),
            page => page,
        }
    }

    /// State stored with the history entry of this page.
    pub fn history_state(&self) -> Option<&str> {
        match self {
            Self::Country(Some(country)) => Some(country.as_str()),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Country(_) => "/energy-by-country-year".to_string(),
            Self::Energy(kind) => format!("/{}-energy", kind.slug()),
            Self::Prediction => "/get-predictions".to_string(),
            Self::Explorer => "/explorer".to_string(),
        }
    }

    /// Applies navigation guards: a country page without a country falls back to the landing page.
    pub fn resolve(self) -> Self {
        match self {
            Self::Country(None) => Self::Landing,
            Self::Country(Some(country)) if country.trim().is_empty() => Self::Landing,
            other => other,
        }
    }

    /// Nav bar entries.
    pub fn categories() -> Vec<(&'static str, Self)> {
        vec![
            ("Country", Self::Country(None)),
            ("Solar Energy", Self::Energy(EnergyKind::Solar)),
            ("Wind Energy", Self::Energy(EnergyKind::Wind)),
            ("Hydro Energy", Self::Energy(EnergyKind::Hydro)),
            ("Get Predictions", Self::Prediction),
            ("Explorer", Self::Explorer),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_kind_parsing() {
        assert_eq!("solar".parse::<EnergyKind>().unwrap(), EnergyKind::Solar);
        assert_eq!("Wind".parse::<EnergyKind>().unwrap(), EnergyKind::Wind);
        assert!("nuclear".parse::<EnergyKind>().is_err());
    }

    #[test]
    fn test_country_restored_from_history_state() {
        let page = Page::from_location("/energy-by-country-year", Some("Germany".to_string()));
        assert_eq!(page.clone().resolve(), Page::Country(Some("Germany".to_string())));
        assert_eq!(page.history_state(), Some("Germany"));

        // Without state the guard still applies
        let page = Page::from_location("/energy-by-country-year", None).resolve();
        assert_eq!(page, Page::Landing);
        assert_eq!(page.path(), "/");

        // State is ignored off the country page
        let page = Page::from_location("/wind-energy", Some("Germany".to_string()));
        assert_eq!(page, Page::Energy(EnergyKind::Wind));
        assert_eq!(page.history_state(), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Page::Landing);
        assert_eq!(Page::from_path("/solar-energy"), Page::Energy(EnergyKind::Solar));
        assert_eq!(Page::from_path("/hydro-energy/"), Page::Energy(EnergyKind::Hydro));
        assert_eq!(Page::from_path("/get-predictions"), Page::Prediction);
        assert_eq!(Page::from_path("/energy-by-country-year"), Page::Country(None));
        assert_eq!(Page::from_path("/unknown"), Page::Landing);
    }

    #[test]
    fn test_path_round_trips_energy_pages() {
        for kind in EnergyKind::all() {
            let page = Page::Energy(*kind);
            assert_eq!(Page::from_path(&page.path()), page);
        }
    }

    #[test]
    fn test_country_page_without_country_redirects() {
        assert_eq!(Page::Country(None).resolve(), Page::Landing);
        assert_eq!(Page::Country(Some("  ".to_string())).resolve(), Page::Landing);

        let page = Page::Country(Some("Germany".to_string()));
        assert_eq!(page.clone().resolve(), page);
    }
}
