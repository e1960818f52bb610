//! Growth and shock model for amount-valued metrics
//!
//! Each year draws an independent growth rate from a normal distribution,
//! applies a fixed downward shock in crisis years and compounds the base
//! value over the years elapsed since 2002.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::models::FIRST_YEAR;

/// Crisis years and the growth shock applied in each
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrisisShocks {
    /// Shock applied in 2008 and 2009
    pub financial_crisis: f64,
    /// Shock applied in 2020
    pub pandemic: f64,
}

impl CrisisShocks {
    /// Years hit by the financial crisis
    pub const FINANCIAL_CRISIS_YEARS: [i32; 2] = [2008, 2009];
    /// Year hit by the pandemic
    pub const PANDEMIC_YEAR: i32 = 2020;

    /// Shock for a year; zero outside crisis years
    #[must_use]
    pub fn for_year(&self, year: i32) -> f64 {
        let mut shock = 0.0;
        if Self::FINANCIAL_CRISIS_YEARS.contains(&year) {
            shock += self.financial_crisis;
        }
        if year == Self::PANDEMIC_YEAR {
            shock += self.pandemic;
        }
        shock
    }
}

/// Parameters of the growth model for one metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthParams {
    /// Mean of the yearly growth draw
    pub mean: f64,
    /// Standard deviation of the yearly growth draw
    pub std_dev: f64,
    /// Crisis shocks added to the growth draw
    pub shocks: CrisisShocks,
    /// Standard deviation of the additive noise as a fraction of the compounded value
    pub noise_fraction: f64,
    /// Lower bound of every generated value
    pub floor: f64,
}

impl GrowthParams {
    /// VAT paid: 5% ± 3% growth, -15% in 2008-2009, -10% in 2020, floor 10 M€
    pub const VAT_PAID: Self = Self {
        mean: 0.05,
        std_dev: 0.03,
        shocks: CrisisShocks {
            financial_crisis: -0.15,
            pandemic: -0.10,
        },
        noise_fraction: 0.1,
        floor: 10.0,
    };

    /// Revenue: 6% ± 4% growth, -12% in 2008-2009, -8% in 2020, floor 100 M€
    pub const REVENUE: Self = Self {
        mean: 0.06,
        std_dev: 0.04,
        shocks: CrisisShocks {
            financial_crisis: -0.12,
            pandemic: -0.08,
        },
        noise_fraction: 0.1,
        floor: 100.0,
    };

    /// Copy of these parameters without any randomness
    #[must_use]
    pub const fn without_noise(self) -> Self {
        Self {
            std_dev: 0.0,
            noise_fraction: 0.0,
            ..self
        }
    }

    /// Growth rate for a year: normal draw plus the crisis shock
    pub fn draw_growth<R: Rng + ?Sized>(&self, year: i32, rng: &mut R) -> f64 {
        normal(rng, self.mean, self.std_dev) + self.shocks.for_year(year)
    }

    /// Value for one year: compound, add proportional noise, clamp to the floor
    pub fn value_for_year<R: Rng + ?Sized>(&self, base: f64, year: i32, rng: &mut R) -> f64 {
        let growth = self.draw_growth(year, rng);
        let compounded = compound(base, growth, year);
        let noisy = compounded + normal(rng, 0.0, compounded.abs() * self.noise_fraction);
        noisy.max(self.floor)
    }
}

/// `base * (1 + growth)^(year - 2002)`
#[must_use]
pub fn compound(base: f64, growth: f64, year: i32) -> f64 {
    base * (1.0 + growth).powi(year - FIRST_YEAR)
}

/// Draw from `N(mean, std_dev)`; a zero standard deviation returns `mean`
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    mean + std_dev * z
}
