use crate::{
    config::AdjustmentConfig,
    types::{OccupancyState, RoomStatus, TemperaturePreferences},
};

#[derive(Debug, Clone)]
pub struct RoomThermostat {
    config: AdjustmentConfig,

    current_temp: f64,
    outside_temp: f64,
    occupancy: OccupancyState,

    energy_consumption: f64,
    preferences: Option<TemperaturePreferences>,
}

impl RoomThermostat {
    pub fn new(initial_temp: f64, outside_temp: f64, occupancy: OccupancyState) -> Self {
        Self::with_config(
            AdjustmentConfig::default(),
            initial_temp,
            outside_temp,
            occupancy,
        )
    }

    pub fn with_config(
        mut config: AdjustmentConfig,
        initial_temp: f64,
        outside_temp: f64,
        occupancy: OccupancyState,
    ) -> Self {
        config.sanitize();
        Self {
            config,
            current_temp: initial_temp,
            outside_temp,
            occupancy,
            energy_consumption: 0.0,
            preferences: None,
        }
    }

    pub fn config(&self) -> &AdjustmentConfig {
        &self.config
    }

    pub fn current_temperature(&self) -> f64 {
        self.current_temp
    }

    pub fn outside_temperature(&self) -> f64 {
        self.outside_temp
    }

    pub fn occupancy(&self) -> OccupancyState {
        self.occupancy
    }

    pub fn energy_consumption(&self) -> f64 {
        self.energy_consumption
    }

    pub fn preferences(&self) -> Option<TemperaturePreferences> {
        self.preferences
    }

    pub fn set_temperature_preferences(&mut self, min_temp: f64, max_temp: f64) {
        self.preferences = Some(TemperaturePreferences::new(min_temp, max_temp));
    }

    /// Performs one bounded adjustment step.
    ///
    /// Nothing happens until preferences have been set, whatever the
    /// occupancy. An occupied room moves one occupied step toward the
    /// preferred band; a vacant room drifts one vacant step toward the
    /// outside temperature and ignores the band's values.
    pub fn adjust_temperature(&mut self) {
        let Some(prefs) = self.preferences else {
            return;
        };

        match self.occupancy {
            OccupancyState::Occupied => {
                if self.current_temp < prefs.min_temp {
                    self.apply_step(self.config.occupied_step, self.config.occupied_energy_cost);
                } else if self.current_temp > prefs.max_temp {
                    self.apply_step(-self.config.occupied_step, self.config.occupied_energy_cost);
                }
            }
            OccupancyState::Vacant => {
                if self.current_temp > self.outside_temp {
                    self.apply_step(-self.config.vacant_step, self.config.vacant_energy_cost);
                } else if self.current_temp < self.outside_temp {
                    self.apply_step(self.config.vacant_step, self.config.vacant_energy_cost);
                }
            }
        }
    }

    pub fn status(&self) -> RoomStatus {
        RoomStatus {
            current_temp: self.current_temp,
            outside_temp: self.outside_temp,
            occupancy: self.occupancy.as_str(),
            energy_consumption: self.energy_consumption,
            preferences: self.preferences,
            within_preferences: self
                .preferences
                .map(|prefs| prefs.contains(self.current_temp))
                .unwrap_or(false),
        }
    }

    fn apply_step(&mut self, delta: f64, energy_cost: f64) {
        self.current_temp += delta;
        self.energy_consumption += energy_cost;
    }
}
