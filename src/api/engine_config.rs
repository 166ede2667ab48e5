use serde::{Deserialize, Serialize};

use crate::core::{ChartLayout, Scale};
use crate::error::{ChartError, ChartResult};

use super::projection::MarkScales;
use super::reconcile::MarkUpdatePolicy;

/// Visibility applied to a freshly installed dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InitialVisibility {
    /// Every region starts active, as if all checkboxes were checked.
    #[default]
    AllVisible,
    /// No region starts active; the chart builds up from an empty canvas.
    NoneVisible,
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub layout: ChartLayout,
    /// Income domain mapped to the full canvas width on a log scale.
    #[serde(default = "default_income_domain")]
    pub income_domain: (f64, f64),
    /// Life-expectancy domain mapped to the full canvas height on a linear
    /// scale; the default is reversed so larger values plot higher.
    #[serde(default = "default_life_expectancy_domain")]
    pub life_expectancy_domain: (f64, f64),
    /// Population domain mapped to mark radius on a sqrt scale.
    #[serde(default = "default_population_domain")]
    pub population_domain: (f64, f64),
    #[serde(default = "default_max_mark_radius")]
    pub max_mark_radius: f64,
    /// When disabled, region toggles are ignored and the chart stays static.
    #[serde(default = "default_filtering_enabled")]
    pub filtering_enabled: bool,
    #[serde(default)]
    pub initial_visibility: InitialVisibility,
    #[serde(default)]
    pub mark_update_policy: MarkUpdatePolicy,
}

impl ChartEngineConfig {
    /// Creates a config with the canonical nations-chart encodings.
    #[must_use]
    pub fn new(layout: ChartLayout) -> Self {
        Self {
            layout,
            income_domain: default_income_domain(),
            life_expectancy_domain: default_life_expectancy_domain(),
            population_domain: default_population_domain(),
            max_mark_radius: default_max_mark_radius(),
            filtering_enabled: default_filtering_enabled(),
            initial_visibility: InitialVisibility::default(),
            mark_update_policy: MarkUpdatePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_income_domain(mut self, start: f64, end: f64) -> Self {
        self.income_domain = (start, end);
        self
    }

    #[must_use]
    pub fn with_life_expectancy_domain(mut self, start: f64, end: f64) -> Self {
        self.life_expectancy_domain = (start, end);
        self
    }

    #[must_use]
    pub fn with_population_domain(mut self, start: f64, end: f64) -> Self {
        self.population_domain = (start, end);
        self
    }

    #[must_use]
    pub fn with_max_mark_radius(mut self, radius: f64) -> Self {
        self.max_mark_radius = radius;
        self
    }

    #[must_use]
    pub fn with_filtering_enabled(mut self, enabled: bool) -> Self {
        self.filtering_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_initial_visibility(mut self, visibility: InitialVisibility) -> Self {
        self.initial_visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_mark_update_policy(mut self, policy: MarkUpdatePolicy) -> Self {
        self.mark_update_policy = policy;
        self
    }

    /// Builds the concrete scales, ranged to the layout's canvas.
    pub fn build_scales(&self) -> ChartResult<MarkScales> {
        self.layout.validate()?;
        if !self.max_mark_radius.is_finite() || self.max_mark_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "max mark radius must be finite and > 0".to_owned(),
            ));
        }

        Ok(MarkScales {
            x: Scale::log(
                self.income_domain.0,
                self.income_domain.1,
                0.0,
                self.layout.canvas_width(),
            )?,
            y: Scale::linear(
                self.life_expectancy_domain.0,
                self.life_expectancy_domain.1,
                0.0,
                self.layout.canvas_height(),
            )?,
            radius: Scale::sqrt(
                self.population_domain.0,
                self.population_domain.1,
                0.0,
                self.max_mark_radius,
            )?,
        })
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(ChartLayout::default())
    }
}

fn default_income_domain() -> (f64, f64) {
    (250.0, 100_000.0)
}

fn default_life_expectancy_domain() -> (f64, f64) {
    (84.0, 10.0)
}

fn default_population_domain() -> (f64, f64) {
    (0.0, 5.0e8)
}

fn default_max_mark_radius() -> f64 {
    40.0
}

fn default_filtering_enabled() -> bool {
    true
}
