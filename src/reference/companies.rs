//! Company universe
//!
//! The fixed set of Euronext-listed companies the panel is built for,
//! keyed by name and kept in a stable order.

use rustc_hash::FxHashMap;

use crate::error::{PanelError, Result};
use crate::models::{CompanyProfile, Country, Sector};

/// Ordered, name-indexed collection of company profiles
#[derive(Debug, Clone)]
pub struct CompanyUniverse {
    /// Profiles in universe order
    profiles: Vec<CompanyProfile>,
    /// Position of each profile by name
    index: FxHashMap<String, usize>,
}

impl CompanyUniverse {
    /// Create a universe from a list of profiles
    ///
    /// Names must be unique and market capitalizations strictly positive.
    pub fn new(profiles: Vec<CompanyProfile>) -> Result<Self> {
        let mut index = FxHashMap::default();
        for (position, profile) in profiles.iter().enumerate() {
            if !(profile.market_cap.is_finite() && profile.market_cap > 0.0) {
                return Err(PanelError::InvalidConfig(format!(
                    "Market capitalization of {} must be positive, got {}",
                    profile.name, profile.market_cap
                )));
            }
            if index.insert(profile.name.clone(), position).is_some() {
                return Err(PanelError::InvalidConfig(format!(
                    "Duplicate company name: {}",
                    profile.name
                )));
            }
        }
        Ok(Self { profiles, index })
    }

    /// The 25 Euronext companies of the reference dataset
    #[must_use]
    pub fn euronext() -> Self {
        let profiles: Vec<CompanyProfile> = EURONEXT_COMPANIES
            .iter()
            .map(|&(name, sector, country, market_cap)| {
                CompanyProfile::new(name, sector, country, market_cap)
            })
            .collect();
        let index = profiles
            .iter()
            .enumerate()
            .map(|(position, profile)| (profile.name.clone(), position))
            .collect();
        Self { profiles, index }
    }

    /// Look up a profile by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CompanyProfile> {
        self.index.get(name).map(|&position| &self.profiles[position])
    }

    /// Whether a company is part of the universe
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate over profiles in universe order
    pub fn iter(&self) -> impl Iterator<Item = &CompanyProfile> {
        self.profiles.iter()
    }

    /// Profiles in universe order
    #[must_use]
    pub fn profiles(&self) -> &[CompanyProfile] {
        &self.profiles
    }

    /// Company names in universe order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    /// Number of companies
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the universe is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Restrict the universe to the named companies, keeping universe order
    ///
    /// Fails with `PanelError::UnknownCompany` on the first name that is not
    /// part of this universe.
    pub fn restrict<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        for name in names {
            if !self.contains(name.as_ref()) {
                return Err(PanelError::UnknownCompany(name.as_ref().to_string()));
            }
        }
        let profiles: Vec<CompanyProfile> = self
            .profiles
            .iter()
            .filter(|p| names.iter().any(|n| n.as_ref() == p.name))
            .cloned()
            .collect();
        Self::new(profiles)
    }
}

impl Default for CompanyUniverse {
    fn default() -> Self {
        Self::euronext()
    }
}

/// Name, sector, country and market capitalization (M€)
const EURONEXT_COMPANIES: [(&str, Sector, Country, f64); 25] = [
    ("LVMH", Sector::Luxury, Country::France, 380_000.0),
    ("L'Oréal", Sector::Cosmetics, Country::France, 240_000.0),
    ("TotalEnergies", Sector::Energy, Country::France, 160_000.0),
    ("Sanofi", Sector::Pharmaceuticals, Country::France, 120_000.0),
    ("Air Liquide", Sector::Industrials, Country::France, 95_000.0),
    ("BNP Paribas", Sector::Banking, Country::France, 75_000.0),
    ("Airbus", Sector::Aerospace, Country::Netherlands, 120_000.0),
    ("Unibail-Rodamco-Westfield", Sector::RealEstate, Country::France, 12_000.0),
    ("Kering", Sector::Luxury, Country::France, 75_000.0),
    ("Hermès", Sector::Luxury, Country::France, 220_000.0),
    ("Schneider Electric", Sector::ElectricalEquipment, Country::France, 120_000.0),
    ("Vinci", Sector::Construction, Country::France, 65_000.0),
    ("Danone", Sector::FoodAndBeverage, Country::France, 40_000.0),
    ("Safran", Sector::Aerospace, Country::France, 85_000.0),
    ("EssilorLuxottica", Sector::Optics, Country::France, 95_000.0),
    ("AXA", Sector::Insurance, Country::France, 70_000.0),
    ("Société Générale", Sector::Banking, Country::France, 25_000.0),
    ("Carrefour", Sector::Retail, Country::France, 12_000.0),
    ("Orange", Sector::Telecommunications, Country::France, 30_000.0),
    ("Engie", Sector::Energy, Country::France, 40_000.0),
    ("Pernod Ricard", Sector::Spirits, Country::France, 45_000.0),
    ("STMicroelectronics", Sector::Semiconductors, Country::Switzerland, 40_000.0),
    ("Capgemini", Sector::ItServices, Country::France, 35_000.0),
    ("Legrand", Sector::ElectricalEquipment, Country::France, 25_000.0),
    ("Publicis", Sector::Communication, Country::France, 25_000.0),
];
