use serde::Deserialize;
use thiserror::Error;

use crate::{
    thermostat::RoomThermostat,
    types::{OccupancyState, TemperaturePreferences},
};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("invalid scenario json")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdjustmentConfig {
    pub occupied_step: f64,
    pub occupied_energy_cost: f64,
    pub vacant_step: f64,
    pub vacant_energy_cost: f64,
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            occupied_step: 1.0,
            occupied_energy_cost: 0.5,
            vacant_step: 0.5,
            vacant_energy_cost: 0.2,
        }
    }
}

impl AdjustmentConfig {
    pub fn sanitize(&mut self) {
        let defaults = Self::default();
        self.occupied_step = non_negative_or(self.occupied_step, defaults.occupied_step);
        self.occupied_energy_cost =
            non_negative_or(self.occupied_energy_cost, defaults.occupied_energy_cost);
        self.vacant_step = non_negative_or(self.vacant_step, defaults.vacant_step);
        self.vacant_energy_cost =
            non_negative_or(self.vacant_energy_cost, defaults.vacant_energy_cost);
    }
}

fn non_negative_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoomScenario {
    #[serde(rename = "initialTemp")]
    pub initial_temp: f64,
    #[serde(rename = "outsideTemp")]
    pub outside_temp: f64,
    pub occupancy: OccupancyState,
    #[serde(default)]
    pub preferences: Option<TemperaturePreferences>,
    #[serde(default)]
    pub adjustment: AdjustmentConfig,
}

impl Default for RoomScenario {
    fn default() -> Self {
        Self {
            initial_temp: 22.0,
            outside_temp: 15.0,
            occupancy: OccupancyState::Occupied,
            preferences: Some(TemperaturePreferences::new(20.0, 24.0)),
            adjustment: AdjustmentConfig::default(),
        }
    }
}

impl RoomScenario {
    pub fn from_json(raw: &[u8]) -> Result<Self, ScenarioError> {
        let mut scenario: Self = serde_json::from_slice(raw)?;
        scenario.adjustment.sanitize();
        Ok(scenario)
    }

    pub fn build(&self) -> RoomThermostat {
        let mut thermostat = RoomThermostat::with_config(
            self.adjustment,
            self.initial_temp,
            self.outside_temp,
            self.occupancy,
        );
        if let Some(prefs) = self.preferences {
            thermostat.set_temperature_preferences(prefs.min_temp, prefs.max_temp);
        }
        thermostat
    }
}
