//! Common domain type definitions
//!
//! Sector and country classifications shared by the reference data,
//! the synthetic model and the reports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Industry sector of a listed company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    /// Luxury goods
    Luxury,
    /// Cosmetics and personal care
    Cosmetics,
    /// Oil, gas and utilities
    Energy,
    /// Pharmaceuticals
    Pharmaceuticals,
    /// Industrial gases and general industry
    Industrials,
    /// Retail and investment banking
    Banking,
    /// Aircraft and engines
    Aerospace,
    /// Commercial real estate
    RealEstate,
    /// Electrical equipment and automation
    ElectricalEquipment,
    /// Construction and concessions
    Construction,
    /// Food and beverage
    FoodAndBeverage,
    /// Optical products
    Optics,
    /// Insurance
    Insurance,
    /// Food retail
    Retail,
    /// Telecommunications
    Telecommunications,
    /// Wine and spirits
    Spirits,
    /// Semiconductors
    Semiconductors,
    /// IT services and consulting
    ItServices,
    /// Advertising and communication
    Communication,
}

impl Sector {
    /// All sectors in declaration order
    pub const ALL: [Self; 19] = [
        Self::Luxury,
        Self::Cosmetics,
        Self::Energy,
        Self::Pharmaceuticals,
        Self::Industrials,
        Self::Banking,
        Self::Aerospace,
        Self::RealEstate,
        Self::ElectricalEquipment,
        Self::Construction,
        Self::FoodAndBeverage,
        Self::Optics,
        Self::Insurance,
        Self::Retail,
        Self::Telecommunications,
        Self::Spirits,
        Self::Semiconductors,
        Self::ItServices,
        Self::Communication,
    ];

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Luxury => "Luxury",
            Self::Cosmetics => "Cosmetics",
            Self::Energy => "Energy",
            Self::Pharmaceuticals => "Pharmaceuticals",
            Self::Industrials => "Industrials",
            Self::Banking => "Banking",
            Self::Aerospace => "Aerospace",
            Self::RealEstate => "Real Estate",
            Self::ElectricalEquipment => "Electrical Equipment",
            Self::Construction => "Construction",
            Self::FoodAndBeverage => "Food & Beverage",
            Self::Optics => "Optics",
            Self::Insurance => "Insurance",
            Self::Retail => "Retail",
            Self::Telecommunications => "Telecommunications",
            Self::Spirits => "Spirits",
            Self::Semiconductors => "Semiconductors",
            Self::ItServices => "IT Services",
            Self::Communication => "Communication",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sector {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|sector| normalize(sector.label()) == wanted || normalize(&format!("{sector:?}")) == wanted)
            .ok_or_else(|| PanelError::UnknownSector(s.to_string()))
    }
}

/// Country of listing
///
/// Only France, the Netherlands and Switzerland carry statutory VAT rows;
/// the remaining Euronext markets resolve through the default rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Country {
    /// France
    France,
    /// The Netherlands
    Netherlands,
    /// Switzerland
    Switzerland,
    /// Belgium
    Belgium,
    /// Italy
    Italy,
    /// Portugal
    Portugal,
    /// Ireland
    Ireland,
    /// Norway
    Norway,
}

impl Country {
    /// All countries in declaration order
    pub const ALL: [Self; 8] = [
        Self::France,
        Self::Netherlands,
        Self::Switzerland,
        Self::Belgium,
        Self::Italy,
        Self::Portugal,
        Self::Ireland,
        Self::Norway,
    ];

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::France => "France",
            Self::Netherlands => "Netherlands",
            Self::Switzerland => "Switzerland",
            Self::Belgium => "Belgium",
            Self::Italy => "Italy",
            Self::Portugal => "Portugal",
            Self::Ireland => "Ireland",
            Self::Norway => "Norway",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "france" | "fr" => Ok(Self::France),
            "netherlands" | "thenetherlands" | "nl" => Ok(Self::Netherlands),
            "switzerland" | "ch" => Ok(Self::Switzerland),
            "belgium" | "be" => Ok(Self::Belgium),
            "italy" | "it" => Ok(Self::Italy),
            "portugal" | "pt" => Ok(Self::Portugal),
            "ireland" | "ie" => Ok(Self::Ireland),
            "norway" | "no" => Ok(Self::Norway),
            _ => Err(PanelError::UnknownCountry(s.to_string())),
        }
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
