use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One nation's dataset entry.
///
/// The three series are index-aligned over the same implicit time axis; only
/// the most recent (last) sample of each is displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationRecord {
    pub name: String,
    pub region: String,
    pub income: Vec<f64>,
    #[serde(rename = "lifeExpectancy")]
    pub life_expectancy: Vec<f64>,
    pub population: Vec<f64>,
}

impl NationRecord {
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        income: Vec<f64>,
        life_expectancy: Vec<f64>,
        population: Vec<f64>,
    ) -> ChartResult<Self> {
        let record = Self {
            name: name.into(),
            region: region.into(),
            income,
            life_expectancy,
            population,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.name.is_empty() {
            return Err(ChartError::InvalidData(
                "record name must not be empty".to_owned(),
            ));
        }
        if self.region.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "record `{}` has an empty region",
                self.name
            )));
        }
        if self.income.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "record `{}` has no income samples",
                self.name
            )));
        }
        if self.income.len() != self.life_expectancy.len()
            || self.income.len() != self.population.len()
        {
            return Err(ChartError::InvalidData(format!(
                "record `{}` has misaligned series: income={}, lifeExpectancy={}, population={}",
                self.name,
                self.income.len(),
                self.life_expectancy.len(),
                self.population.len()
            )));
        }

        for (series, value) in [
            ("income", self.latest_income()),
            ("lifeExpectancy", self.latest_life_expectancy()),
            ("population", self.latest_population()),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "record `{}` has a non-finite latest {series} sample",
                    self.name
                )));
            }
        }
        if self.latest_population() < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "record `{}` has a negative latest population",
                self.name
            )));
        }

        Ok(())
    }

    /// Most recent income sample; `NaN` when the series is empty.
    #[must_use]
    pub fn latest_income(&self) -> f64 {
        self.income.last().copied().unwrap_or(f64::NAN)
    }

    /// Most recent life-expectancy sample; `NaN` when the series is empty.
    #[must_use]
    pub fn latest_life_expectancy(&self) -> f64 {
        self.life_expectancy.last().copied().unwrap_or(f64::NAN)
    }

    /// Most recent population sample; `NaN` when the series is empty.
    #[must_use]
    pub fn latest_population(&self) -> f64 {
        self.population.last().copied().unwrap_or(f64::NAN)
    }
}
