use serde::Deserialize;

use crate::{read_csv, DatasetError};
use std::path::Path;

/// OWID region/income-group pseudo-codes that must not be plotted as
/// countries.
pub const AGGREGATE_CODES: [&str; 5] = ["OWID_WRL", "OWID_HIC", "OWID_LIC", "OWID_UMC", "OWID_LMC"];

/// Aggregate entity names used by the happiness and GDP datasets.
pub const AGGREGATE_ENTITIES: [&str; 5] = [
    "World",
    "High-income countries",
    "Low-income countries",
    "Upper-middle-income countries",
    "Lower-middle-income countries",
];

pub fn is_aggregate_code(code: &str) -> bool {
    AGGREGATE_CODES.contains(&code)
}

#[derive(Debug, Clone, Deserialize)]
pub struct PovertyRow {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Number of people living in extreme poverty")]
    pub in_extreme_poverty: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Co2Row {
    #[serde(rename = "Entity")]
    pub entity: String,
    #[serde(rename = "Code")]
    pub code: Option<String>,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "CO2 emissions per capita")]
    pub tonnes_per_capita: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemperatureRow {
    #[serde(rename = "Entity")]
    pub entity: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Average")]
    pub average: f64,
    #[serde(rename = "Lower bound")]
    pub lower: f64,
    #[serde(rename = "Upper bound")]
    pub upper: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenewablesRow {
    #[serde(rename = "Entity")]
    pub entity: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Renewables")]
    pub share: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HappinessRow {
    #[serde(rename = "Entity")]
    pub entity: String,
    #[serde(rename = "Code")]
    pub code: Option<String>,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Life satisfaction")]
    pub satisfaction: Option<f64>,
    #[serde(rename = "GDP per capita")]
    pub gdp_per_capita: Option<f64>,
}

/// One country-year of the WHO life expectancy dataset, reduced to the
/// eleven factors the correlation heatmap uses.
#[derive(Debug, Clone, Deserialize)]
pub struct LifeFactorsRow {
    #[serde(rename = "Life expectancy")]
    pub life_expectancy: Option<f64>,
    #[serde(rename = "Schooling")]
    pub schooling: Option<f64>,
    #[serde(rename = "Income index")]
    pub income_index: Option<f64>,
    #[serde(rename = "BMI")]
    pub bmi: Option<f64>,
    #[serde(rename = "GDP")]
    pub gdp: Option<f64>,
    #[serde(rename = "Alcohol")]
    pub alcohol: Option<f64>,
    #[serde(rename = "Adult mortality")]
    pub adult_mortality: Option<f64>,
    #[serde(rename = "HIV/AIDS")]
    pub hiv_aids: Option<f64>,
    #[serde(rename = "Thinness (teens)")]
    pub thinness_teens: Option<f64>,
    #[serde(rename = "Polio")]
    pub polio: Option<f64>,
    #[serde(rename = "Diphtheria")]
    pub diphtheria: Option<f64>,
}

pub const LIFE_FACTOR_LABELS: [&str; 11] = [
    "Life Expectancy",
    "Schooling",
    "Income Index",
    "BMI",
    "GDP",
    "Alcohol",
    "Adult Mortality",
    "HIV/AIDS",
    "Thinness (teens)",
    "Polio Immunization",
    "Diphtheria Imm.",
];

impl LifeFactorsRow {
    /// The row as an array in `LIFE_FACTOR_LABELS` order, `None` if any
    /// factor is missing.
    pub fn complete(&self) -> Option<[f64; 11]> {
        Some([
            self.life_expectancy?,
            self.schooling?,
            self.income_index?,
            self.bmi?,
            self.gdp?,
            self.alcohol?,
            self.adult_mortality?,
            self.hiv_aids?,
            self.thinness_teens?,
            self.polio?,
            self.diphtheria?,
        ])
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LifeExpectancyGenderRow {
    #[serde(rename = "Entity")]
    pub entity: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Life expectancy of women")]
    pub women: f64,
    #[serde(rename = "Life expectancy of men")]
    pub men: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnergyMixRow {
    pub country: String,
    pub year: i32,
    pub coal_share_elec: Option<f64>,
    pub gas_share_elec: Option<f64>,
    pub oil_share_elec: Option<f64>,
    pub nuclear_share_elec: Option<f64>,
    pub hydro_share_elec: Option<f64>,
    pub solar_share_elec: Option<f64>,
    pub wind_share_elec: Option<f64>,
}

impl EnergyMixRow {
    pub fn nuclear(&self) -> f64 {
        self.nuclear_share_elec.unwrap_or(0.0)
    }

    pub fn renewables(&self) -> f64 {
        self.hydro_share_elec.unwrap_or(0.0)
            + self.solar_share_elec.unwrap_or(0.0)
            + self.wind_share_elec.unwrap_or(0.0)
    }

    pub fn fossil(&self) -> f64 {
        self.coal_share_elec.unwrap_or(0.0)
            + self.gas_share_elec.unwrap_or(0.0)
            + self.oil_share_elec.unwrap_or(0.0)
    }

    /// Remainder up to 100% so every bar spans the full axis.
    pub fn other(&self) -> f64 {
        (100.0 - self.nuclear() - self.renewables() - self.fossil()).max(0.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GdpRow {
    pub entity: String,
    pub code: Option<String>,
    pub year: i32,
    #[serde(rename = "ny_gdp_pcap_pp_kd")]
    pub gdp_per_capita: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChildMortalityRow {
    pub entity: String,
    pub code: Option<String>,
    pub year: i32,
    pub child_mortality_rate: Option<f64>,
}

pub fn load_poverty(path: impl AsRef<Path>) -> Result<Vec<PovertyRow>, DatasetError> {
    read_csv(path)
}

pub fn load_co2(path: impl AsRef<Path>) -> Result<Vec<Co2Row>, DatasetError> {
    read_csv(path)
}

pub fn load_temperature(path: impl AsRef<Path>) -> Result<Vec<TemperatureRow>, DatasetError> {
    read_csv(path)
}

pub fn load_renewables(path: impl AsRef<Path>) -> Result<Vec<RenewablesRow>, DatasetError> {
    read_csv(path)
}

pub fn load_happiness(path: impl AsRef<Path>) -> Result<Vec<HappinessRow>, DatasetError> {
    read_csv(path)
}

pub fn load_life_factors(path: impl AsRef<Path>) -> Result<Vec<LifeFactorsRow>, DatasetError> {
    read_csv(path)
}

pub fn load_life_expectancy_gender(
    path: impl AsRef<Path>,
) -> Result<Vec<LifeExpectancyGenderRow>, DatasetError> {
    read_csv(path)
}

pub fn load_energy_mix(path: impl AsRef<Path>) -> Result<Vec<EnergyMixRow>, DatasetError> {
    read_csv(path)
}

pub fn load_gdp(path: impl AsRef<Path>) -> Result<Vec<GdpRow>, DatasetError> {
    read_csv(path)
}

pub fn load_child_mortality(
    path: impl AsRef<Path>,
) -> Result<Vec<ChildMortalityRow>, DatasetError> {
    read_csv(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_mix_grouping_sums_to_one_hundred() {
        let row = EnergyMixRow {
            country: "France".into(),
            year: 2023,
            coal_share_elec: Some(0.5),
            gas_share_elec: Some(5.0),
            oil_share_elec: Some(0.7),
            nuclear_share_elec: Some(64.8),
            hydro_share_elec: Some(10.6),
            solar_share_elec: Some(4.4),
            wind_share_elec: Some(9.9),
        };
        let total = row.nuclear() + row.renewables() + row.fossil() + row.other();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn energy_mix_other_never_goes_negative() {
        let row = EnergyMixRow {
            country: "Testland".into(),
            year: 2023,
            coal_share_elec: Some(60.0),
            gas_share_elec: Some(30.0),
            oil_share_elec: Some(10.0),
            nuclear_share_elec: Some(5.0),
            hydro_share_elec: None,
            solar_share_elec: None,
            wind_share_elec: None,
        };
        assert_eq!(row.other(), 0.0);
    }

    #[test]
    fn incomplete_life_factor_rows_drop_out() {
        let row = LifeFactorsRow {
            life_expectancy: Some(72.0),
            schooling: None,
            income_index: Some(0.7),
            bmi: Some(24.0),
            gdp: Some(9000.0),
            alcohol: Some(4.1),
            adult_mortality: Some(140.0),
            hiv_aids: Some(0.1),
            thinness_teens: Some(2.2),
            polio: Some(96.0),
            diphtheria: Some(95.0),
        };
        assert!(row.complete().is_none());
    }
}
